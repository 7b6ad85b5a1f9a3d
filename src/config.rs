//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

const DATA_DIR_VAR: &str = "WELLNESS_DATA_DIR";
const QUOTA_VAR: &str = "WELLNESS_STORAGE_QUOTA_BYTES";

/// Typical per-origin browser storage quota.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Storage configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the file store
    pub data_dir: PathBuf,
    /// Total bytes the store may hold (`None` for unlimited)
    pub storage_quota_bytes: Option<usize>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./wellness-data"),
            storage_quota_bytes: Some(DEFAULT_QUOTA_BYTES),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first if present. A quota of `0` disables the
    /// quota.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        let data_dir = env::var(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let storage_quota_bytes = match env::var(QUOTA_VAR) {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => None,
                Ok(bytes) => Some(bytes),
                Err(_) => return Err(ConfigError::Invalid(QUOTA_VAR, raw)),
            },
            Err(_) => defaults.storage_quota_bytes,
        };

        Ok(Self {
            data_dir,
            storage_quota_bytes,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
