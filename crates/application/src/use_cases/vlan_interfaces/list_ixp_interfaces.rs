use ixp_export_domain::{DomainError, IxpInterfaceRow};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::VlanInterfaceRepository;

pub struct ListIxpInterfacesUseCase {
    vli_repo: Arc<dyn VlanInterfaceRepository>,
}

impl ListIxpInterfacesUseCase {
    pub fn new(vli_repo: Arc<dyn VlanInterfaceRepository>) -> Self {
        Self { vli_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, ixp_id: i64) -> Result<Vec<IxpInterfaceRow>, DomainError> {
        let rows = self.vli_repo.list_for_ixp(ixp_id).await?;

        info!(ixp_id, count = rows.len(), "IXP interfaces listed");
        Ok(rows)
    }
}
