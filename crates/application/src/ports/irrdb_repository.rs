use async_trait::async_trait;
use ixp_export_domain::{DomainError, IpProtocol};

/// Access to IRR-derived filter data gathered per customer.
#[async_trait]
pub trait IrrdbRepository: Send + Sync {
    /// Prefixes the customer may announce, ascending.
    async fn prefixes_for(
        &self,
        customer_id: i64,
        protocol: IpProtocol,
    ) -> Result<Vec<String>, DomainError>;

    /// Origin ASNs the customer may announce, ascending.
    async fn asns_for(&self, customer_id: i64, protocol: IpProtocol)
        -> Result<Vec<u32>, DomainError>;
}
