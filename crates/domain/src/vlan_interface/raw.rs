use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::DEFAULT_MAX_PREFIXES;
use crate::protocol::IpProtocol;

/// One row of the VLAN interface join for a single protocol.
///
/// The join fans out per physical interface, so several rows can share the
/// same `vliid` and `address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInterfaceRow {
    pub cid: i64,
    pub cname: Arc<str>,
    pub cshortname: Arc<str>,
    pub autsys: u32,
    /// Customer-wide max-prefix limit.
    pub gmaxprefixes: Option<u32>,
    pub peeringmacro: Option<String>,
    pub peeringmacrov6: Option<String>,
    pub vliid: i64,
    /// VLAN interface enabled for the queried protocol.
    pub enabled: bool,
    pub address: String,
    pub bgpmd5secret: Option<String>,
    /// Per VLAN interface max-prefix override.
    pub maxbgpprefix: Option<u32>,
    pub as112client: bool,
    pub rsclient: bool,
    pub irrdbfilter: bool,
    pub location_name: Option<Arc<str>>,
    pub location_shortname: Option<Arc<str>>,
    pub location_tag: Option<Arc<str>>,
}

impl RawInterfaceRow {
    /// The override wins only when it is set and larger than the customer
    /// limit. Zero counts as unset on both sides.
    pub fn effective_max_prefixes(&self) -> u32 {
        let global = self.gmaxprefixes.unwrap_or(0);

        let limit = match self.maxbgpprefix {
            Some(vli_limit) if vli_limit > global => vli_limit,
            _ => global,
        };

        if limit == 0 {
            DEFAULT_MAX_PREFIXES
        } else {
            limit
        }
    }

    pub fn effective_peering_macro(&self, protocol: IpProtocol) -> String {
        let v6_macro = match protocol {
            IpProtocol::V6 => non_empty(&self.peeringmacrov6),
            IpProtocol::V4 => None,
        };

        v6_macro
            .or_else(|| non_empty(&self.peeringmacro))
            .map(str::to_owned)
            .unwrap_or_else(|| format!("AS{}", self.autsys))
    }

    pub fn effective_md5_secret(&self) -> Option<String> {
        non_empty(&self.bgpmd5secret).map(str::to_owned)
    }

    pub fn formatted_vli_id(&self) -> String {
        format!("{:04}", self.vliid)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
