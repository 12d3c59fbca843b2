use ixp_export_domain::{DomainError, IpProtocol, VlanMember};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::VlanInterfaceRepository;

pub struct ListVlanMembersUseCase {
    vli_repo: Arc<dyn VlanInterfaceRepository>,
}

impl ListVlanMembersUseCase {
    pub fn new(vli_repo: Arc<dyn VlanInterfaceRepository>) -> Self {
        Self { vli_repo }
    }

    /// A `protocol` other than 4 or 6 fails with `InvalidProtocol` before
    /// the repository is queried.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        vlan_id: i64,
        protocol: Option<i64>,
        external_only: bool,
    ) -> Result<Vec<VlanMember>, DomainError> {
        let protocol = protocol.map(IpProtocol::try_from).transpose()?;

        let members = self
            .vli_repo
            .list_members(vlan_id, protocol, external_only)
            .await?;

        info!(vlan_id, count = members.len(), "VLAN members listed");
        Ok(members)
    }
}
