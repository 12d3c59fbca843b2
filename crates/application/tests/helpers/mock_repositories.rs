#![allow(dead_code)]

use async_trait::async_trait;
use ixp_export_application::ports::{IrrdbRepository, VlanInterfaceRepository};
use ixp_export_domain::{
    DomainError, IpProtocol, IrrdbFilter, IxpInterfaceRow, PhysicalInterfaceStatus,
    RawInterfaceRow, VlanInterfaceDetail, VlanMember,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Fixtures
// ============================================================================

pub fn make_row(cid: i64, vliid: i64, address: &str) -> RawInterfaceRow {
    RawInterfaceRow {
        cid,
        cname: Arc::from(format!("Customer {}", cid).as_str()),
        cshortname: Arc::from(format!("cust{}", cid).as_str()),
        autsys: 65000 + cid as u32,
        gmaxprefixes: Some(100),
        peeringmacro: None,
        peeringmacrov6: None,
        vliid,
        enabled: true,
        address: address.to_string(),
        bgpmd5secret: None,
        maxbgpprefix: None,
        as112client: false,
        rsclient: true,
        irrdbfilter: false,
        location_name: Some(Arc::from("Example DC1")),
        location_shortname: Some(Arc::from("EX-DC1")),
        location_tag: Some(Arc::from("dc1")),
    }
}

pub fn make_member(cid: i64, vliid: i64) -> VlanMember {
    VlanMember {
        cid,
        cname: Arc::from(format!("Customer {}", cid).as_str()),
        cshortname: Arc::from(format!("cust{}", cid).as_str()),
        virtual_interface_id: vliid * 10,
        physical_interface_id: vliid * 100,
        vlan_interface_id: vliid,
        switch_port_id: vliid * 1000,
        switch_id: 1,
    }
}

pub fn make_detail(id: i64, cid: i64, vlan_number: i64) -> VlanInterfaceDetail {
    VlanInterfaceDetail {
        id,
        cid,
        cname: Arc::from(format!("Customer {}", cid).as_str()),
        cshortname: Arc::from(format!("cust{}", cid).as_str()),
        virtual_interface_id: id * 10,
        vlan_id: vlan_number,
        vlan_name: Arc::from(format!("VLAN {}", vlan_number).as_str()),
        vlan_number,
        ipv4enabled: true,
        ipv4address: Some(format!("192.0.2.{}", id)),
        ipv6enabled: false,
        ipv6address: None,
        maxbgpprefix: None,
        as112client: false,
        rsclient: true,
        irrdbfilter: true,
    }
}

// ============================================================================
// Mock VlanInterfaceRepository
// ============================================================================

#[derive(Clone)]
pub struct MockVlanInterfaceRepository {
    rows: Arc<RwLock<Vec<RawInterfaceRow>>>,
    members: Arc<RwLock<Vec<VlanMember>>>,
    ixp_rows: Arc<RwLock<Vec<IxpInterfaceRow>>>,
    details: Arc<RwLock<Vec<VlanInterfaceDetail>>>,
    last_customer_query: Arc<RwLock<Option<(i64, Option<i64>)>>>,
    last_query: Arc<RwLock<Option<(i64, IpProtocol, PhysicalInterfaceStatus)>>>,
    last_members_query: Arc<RwLock<Option<(i64, Option<IpProtocol>, bool)>>>,
    calls: Arc<AtomicUsize>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockVlanInterfaceRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
            members: Arc::new(RwLock::new(Vec::new())),
            ixp_rows: Arc::new(RwLock::new(Vec::new())),
            details: Arc::new(RwLock::new(Vec::new())),
            last_customer_query: Arc::new(RwLock::new(None)),
            last_query: Arc::new(RwLock::new(None)),
            last_members_query: Arc::new(RwLock::new(None)),
            calls: Arc::new(AtomicUsize::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn with_rows(rows: Vec<RawInterfaceRow>) -> Self {
        let repo = Self::new();
        *repo.rows.try_write().unwrap() = rows;
        repo
    }

    pub async fn set_members(&self, members: Vec<VlanMember>) {
        *self.members.write().await = members;
    }

    pub async fn set_ixp_rows(&self, rows: Vec<IxpInterfaceRow>) {
        *self.ixp_rows.write().await = rows;
    }

    pub async fn set_details(&self, details: Vec<VlanInterfaceDetail>) {
        *self.details.write().await = details;
    }

    pub async fn last_customer_query(&self) -> Option<(i64, Option<i64>)> {
        *self.last_customer_query.read().await
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn last_query(&self) -> Option<(i64, IpProtocol, PhysicalInterfaceStatus)> {
        *self.last_query.read().await
    }

    pub async fn last_members_query(&self) -> Option<(i64, Option<IpProtocol>, bool)> {
        *self.last_members_query.read().await
    }

    async fn fail_if_requested(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError(
                "Mock repository failed".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MockVlanInterfaceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VlanInterfaceRepository for MockVlanInterfaceRepository {
    async fn rows_for_vlan(
        &self,
        vlan_id: i64,
        protocol: IpProtocol,
        status: PhysicalInterfaceStatus,
    ) -> Result<Vec<RawInterfaceRow>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.write().await = Some((vlan_id, protocol, status));
        self.fail_if_requested().await?;

        Ok(self.rows.read().await.clone())
    }

    async fn list_for_ixp(&self, _ixp_id: i64) -> Result<Vec<IxpInterfaceRow>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.fail_if_requested().await?;

        Ok(self.ixp_rows.read().await.clone())
    }

    async fn list_members(
        &self,
        vlan_id: i64,
        protocol: Option<IpProtocol>,
        external_only: bool,
    ) -> Result<Vec<VlanMember>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_members_query.write().await = Some((vlan_id, protocol, external_only));
        self.fail_if_requested().await?;

        Ok(self.members.read().await.clone())
    }

    async fn list_for_customer(
        &self,
        customer_id: i64,
        ixp_id: Option<i64>,
    ) -> Result<Vec<VlanInterfaceDetail>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_customer_query.write().await = Some((customer_id, ixp_id));
        self.fail_if_requested().await?;

        Ok(self.details.read().await.clone())
    }

    async fn objects_for_vlan(
        &self,
        _vlan_id: i64,
    ) -> Result<Vec<VlanInterfaceDetail>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.fail_if_requested().await?;

        Ok(self.details.read().await.clone())
    }
}

// ============================================================================
// Mock IrrdbRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockIrrdbRepository {
    filters: Arc<RwLock<HashMap<(i64, IpProtocol), IrrdbFilter>>>,
    calls: Arc<AtomicUsize>,
    failing_customer: Arc<RwLock<Option<i64>>>,
}

impl MockIrrdbRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_filter(&self, customer_id: i64, protocol: IpProtocol, filter: IrrdbFilter) {
        self.filters
            .write()
            .await
            .insert((customer_id, protocol), filter);
    }

    pub async fn fail_for_customer(&self, customer_id: i64) {
        *self.failing_customer.write().await = Some(customer_id);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn lookup(
        &self,
        customer_id: i64,
        protocol: IpProtocol,
    ) -> Result<IrrdbFilter, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if *self.failing_customer.read().await == Some(customer_id) {
            return Err(DomainError::IrrdbLookupFailed(format!(
                "Customer {} not found",
                customer_id
            )));
        }

        Ok(self
            .filters
            .read()
            .await
            .get(&(customer_id, protocol))
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl IrrdbRepository for MockIrrdbRepository {
    async fn prefixes_for(
        &self,
        customer_id: i64,
        protocol: IpProtocol,
    ) -> Result<Vec<String>, DomainError> {
        Ok(self.lookup(customer_id, protocol).await?.prefixes)
    }

    async fn asns_for(
        &self,
        customer_id: i64,
        protocol: IpProtocol,
    ) -> Result<Vec<u32>, DomainError> {
        Ok(self.lookup(customer_id, protocol).await?.asns)
    }
}
