use ixp_export_domain::{index_by_id, DomainError, VlanInterfacesById};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::VlanInterfaceRepository;

/// All VLAN interfaces of one customer, optionally limited to one exchange,
/// keyed by VLAN interface id.
pub struct ListCustomerVlanInterfacesUseCase {
    vli_repo: Arc<dyn VlanInterfaceRepository>,
}

impl ListCustomerVlanInterfacesUseCase {
    pub fn new(vli_repo: Arc<dyn VlanInterfaceRepository>) -> Self {
        Self { vli_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        customer_id: i64,
        ixp_id: Option<i64>,
    ) -> Result<VlanInterfacesById, DomainError> {
        let rows = self.vli_repo.list_for_customer(customer_id, ixp_id).await?;
        let fetched = rows.len();
        let interfaces = index_by_id(rows);

        info!(
            customer_id,
            fetched,
            count = interfaces.len(),
            "Customer VLAN interfaces listed"
        );
        Ok(interfaces)
    }
}
