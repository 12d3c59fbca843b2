use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanMember {
    pub cid: i64,
    pub cname: Arc<str>,
    pub cshortname: Arc<str>,
    pub virtual_interface_id: i64,
    pub physical_interface_id: i64,
    pub vlan_interface_id: i64,
    pub switch_port_id: i64,
    pub switch_id: i64,
}
