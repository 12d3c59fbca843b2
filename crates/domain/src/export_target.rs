use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Consumer the exported sessions are generated for.
///
/// Only [`ExportTarget::RouteServer`] narrows the export to route server
/// clients; every other target receives all enabled interfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExportTarget {
    #[default]
    RouteServer,
    RouteCollector,
    As112,
    Other(Arc<str>),
}

impl ExportTarget {
    pub fn as_str(&self) -> &str {
        match self {
            ExportTarget::RouteServer => "RS",
            ExportTarget::RouteCollector => "RC",
            ExportTarget::As112 => "AS112",
            ExportTarget::Other(name) => name,
        }
    }

    pub fn requires_rs_client(&self) -> bool {
        matches!(self, ExportTarget::RouteServer)
    }
}

impl FromStr for ExportTarget {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "RS" => ExportTarget::RouteServer,
            "RC" => ExportTarget::RouteCollector,
            "AS112" => ExportTarget::As112,
            other => ExportTarget::Other(Arc::from(other)),
        })
    }
}

impl From<String> for ExportTarget {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(target) => target,
            Err(never) => match never {},
        }
    }
}

impl From<ExportTarget> for String {
    fn from(target: ExportTarget) -> Self {
        target.as_str().to_string()
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
