use serde::{Deserialize, Serialize};

use crate::export_target::ExportTarget;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Target used when the command line does not name one (default: "RS")
    #[serde(default)]
    pub default_target: ExportTarget,

    /// Pretty-print JSON output (default: true)
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_target: ExportTarget::RouteServer,
            pretty: true,
        }
    }
}

fn default_true() -> bool {
    true
}
