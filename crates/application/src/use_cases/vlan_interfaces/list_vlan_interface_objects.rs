use ixp_export_domain::{index_by_id, DomainError, VlanInterfacesById};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::VlanInterfaceRepository;

pub struct ListVlanInterfaceObjectsUseCase {
    vli_repo: Arc<dyn VlanInterfaceRepository>,
}

impl ListVlanInterfaceObjectsUseCase {
    pub fn new(vli_repo: Arc<dyn VlanInterfaceRepository>) -> Self {
        Self { vli_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, vlan_id: i64) -> Result<VlanInterfacesById, DomainError> {
        let interfaces = index_by_id(self.vli_repo.objects_for_vlan(vlan_id).await?);

        info!(vlan_id, count = interfaces.len(), "VLAN interface objects listed");
        Ok(interfaces)
    }
}
