//! Configuration module for the overlay store.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Store configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory the file-backed store persists namespaces under
    pub data_dir: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = env::var("TEMPLE_DATA_DIR")
            .unwrap_or_else(|_| "./data/store".to_string())
            .into();

        let log_level = env::var("TEMPLE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            data_dir,
            log_level,
        }
    }
}
