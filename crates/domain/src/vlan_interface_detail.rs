use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A VLAN interface with its customer, VLAN and addresses resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanInterfaceDetail {
    pub id: i64,
    pub cid: i64,
    pub cname: Arc<str>,
    pub cshortname: Arc<str>,
    pub virtual_interface_id: i64,
    pub vlan_id: i64,
    pub vlan_name: Arc<str>,
    pub vlan_number: i64,
    pub ipv4enabled: bool,
    pub ipv4address: Option<String>,
    pub ipv6enabled: bool,
    pub ipv6address: Option<String>,
    pub maxbgpprefix: Option<u32>,
    pub as112client: bool,
    pub rsclient: bool,
    pub irrdbfilter: bool,
}

/// VLAN interfaces keyed by their id, in first-seen order.
pub type VlanInterfacesById = IndexMap<i64, VlanInterfaceDetail>;

/// Collapses joined rows into one entry per VLAN interface. Repeats of an id
/// (one per physical interface) keep the position and content of the first.
pub fn index_by_id(rows: impl IntoIterator<Item = VlanInterfaceDetail>) -> VlanInterfacesById {
    let mut indexed = VlanInterfacesById::new();
    for row in rows {
        indexed.entry(row.id).or_insert(row);
    }
    indexed
}
