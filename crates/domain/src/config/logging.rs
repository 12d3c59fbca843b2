use serde::{Deserialize, Serialize};

use super::ConfigError;

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Case-insensitive match against `LOG_LEVELS`.
    pub fn filter_level(&self) -> Result<&'static str, ConfigError> {
        let level = self.level.to_lowercase();
        LOG_LEVELS
            .iter()
            .copied()
            .find(|known| *known == level)
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "logging.level must be one of {}, got '{}'",
                    LOG_LEVELS.join(", "),
                    self.level
                ))
            })
    }
}
