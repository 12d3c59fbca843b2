use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Per-protocol settings of a VLAN interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolDetails {
    pub enabled: bool,
    pub hostname: Option<String>,
    pub canping: bool,
    pub monitorrcbgp: bool,
    pub bgpmd5secret: Option<String>,
    pub address: String,
}

/// A VLAN interface as seen across a whole exchange, both protocols side by
/// side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IxpInterfaceRow {
    pub cid: i64,
    pub cname: Arc<str>,
    pub cshortname: Arc<str>,
    pub autsys: u32,
    pub vliid: i64,
    pub ipv4: ProtocolDetails,
    pub ipv6: ProtocolDetails,
    pub maxbgpprefix: Option<u32>,
    pub as112client: bool,
    pub rsclient: bool,
    pub switchname: Arc<str>,
    pub switchport: Arc<str>,
    pub vlannumber: i64,
    pub ixpname: Arc<str>,
}
