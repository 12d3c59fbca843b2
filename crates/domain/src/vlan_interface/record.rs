use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::RawInterfaceRow;
use crate::protocol::IpProtocol;

/// Export keyed by assigned address, iterated in first-insertion order.
pub type ExportedInterfaces = IndexMap<String, SanitizedInterfaceRecord>;

/// IRR-derived allow-lists for one customer and protocol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrdbFilter {
    pub prefixes: Vec<String>,
    pub asns: Vec<u32>,
}

/// A peering session ready for route server / collector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedInterfaceRecord {
    pub cid: i64,
    pub cname: Arc<str>,
    pub cshortname: Arc<str>,
    pub autsys: u32,
    pub vliid: i64,
    pub fvliid: String,
    pub address: String,
    pub peeringmacro: String,
    /// `None` when the session carries no MD5 secret.
    pub bgpmd5secret: Option<String>,
    pub maxprefixes: u32,
    pub as112client: bool,
    pub rsclient: bool,
    pub irrdbfilter: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irrdbfilter_prefixes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irrdbfilter_asns: Option<Vec<u32>>,
    pub location_name: Option<Arc<str>>,
    pub location_shortname: Option<Arc<str>>,
    pub location_tag: Option<Arc<str>>,
}

impl SanitizedInterfaceRecord {
    /// Applies the max-prefix, peering macro and MD5 defaulting rules. IRRDB
    /// lists are attached separately with [`Self::with_irrdb_filter`].
    pub fn from_raw(row: RawInterfaceRow, protocol: IpProtocol) -> Self {
        let fvliid = row.formatted_vli_id();
        let maxprefixes = row.effective_max_prefixes();
        let peeringmacro = row.effective_peering_macro(protocol);
        let bgpmd5secret = row.effective_md5_secret();

        Self {
            cid: row.cid,
            cname: row.cname,
            cshortname: row.cshortname,
            autsys: row.autsys,
            vliid: row.vliid,
            fvliid,
            address: row.address,
            peeringmacro,
            bgpmd5secret,
            maxprefixes,
            as112client: row.as112client,
            rsclient: row.rsclient,
            irrdbfilter: row.irrdbfilter,
            irrdbfilter_prefixes: None,
            irrdbfilter_asns: None,
            location_name: row.location_name,
            location_shortname: row.location_shortname,
            location_tag: row.location_tag,
        }
    }

    pub fn with_irrdb_filter(mut self, filter: IrrdbFilter) -> Self {
        self.irrdbfilter_prefixes = Some(filter.prefixes);
        self.irrdbfilter_asns = Some(filter.asns);
        self
    }
}
