use async_trait::async_trait;
use ixp_export_domain::{
    DomainError, IpProtocol, IxpInterfaceRow, PhysicalInterfaceStatus, RawInterfaceRow,
    VlanInterfaceDetail, VlanMember,
};

/// Read-only projections of VLAN interfaces joined with their customer,
/// physical interfaces and switching fabric.
///
/// Every query except `list_for_customer` is restricted to customers that
/// are active, current and trafficking.
#[async_trait]
pub trait VlanInterfaceRepository: Send + Sync {
    /// Returns one row per physical interface in `status` on the VLAN, with
    /// protocol-specific columns taken from `protocol`.
    ///
    /// # Ordering
    ///
    /// Rows are returned in the order the store produces them. Callers that
    /// deduplicate must not assume anything beyond that.
    async fn rows_for_vlan(
        &self,
        vlan_id: i64,
        protocol: IpProtocol,
        status: PhysicalInterfaceStatus,
    ) -> Result<Vec<RawInterfaceRow>, DomainError>;

    /// Lists VLAN interfaces across every VLAN of an exchange, connected
    /// physical interfaces only.
    async fn list_for_ixp(&self, ixp_id: i64) -> Result<Vec<IxpInterfaceRow>, DomainError>;

    /// Lists members attached to a VLAN.
    ///
    /// # Arguments
    ///
    /// * `protocol` - When set, only interfaces enabled for that protocol
    /// * `external_only` - Exclude internal customers
    async fn list_members(
        &self,
        vlan_id: i64,
        protocol: Option<IpProtocol>,
        external_only: bool,
    ) -> Result<Vec<VlanMember>, DomainError>;

    /// Lists every VLAN interface of a customer, regardless of its status or
    /// of physical interface state.
    ///
    /// Without `ixp_id` rows are ordered by VLAN number. With it, only
    /// interfaces whose switch belongs to that exchange are returned, ordered
    /// by exchange then VLAN number, one row per physical interface.
    async fn list_for_customer(
        &self,
        customer_id: i64,
        ixp_id: Option<i64>,
    ) -> Result<Vec<VlanInterfaceDetail>, DomainError>;

    /// VLAN interfaces on a VLAN belonging to active, current, trafficking,
    /// external customers with a connected port, ordered by customer name.
    /// One row per connected physical interface.
    async fn objects_for_vlan(&self, vlan_id: i64)
        -> Result<Vec<VlanInterfaceDetail>, DomainError>;
}
