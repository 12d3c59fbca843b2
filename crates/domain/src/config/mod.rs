//! Configuration module for IXP Export
//!
//! - `root`: Main configuration and CLI overrides
//! - `database`: SQLite location and pool sizing
//! - `logging`: Logging settings
//! - `export`: Defaults for the export command
//! - `errors`: Configuration errors

pub mod database;
pub mod errors;
pub mod export;
pub mod logging;
pub mod root;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use export::ExportConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
