//! Runtime configuration shared by host front ends.
//!
//! # Responsibility
//! - Resolve store path, click asset and logging settings.
//! - Apply `TALLY_*` environment overrides on top of defaults.
//!
//! # Invariants
//! - Blank environment values are ignored.
//! - Log level is validated at load time, not at logging init.

use crate::logging::{default_log_level, normalize_level};
use crate::sound::DEFAULT_CLICK_ASSET;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "TALLY_DB_PATH";
pub const ENV_CLICK_ASSET: &str = "TALLY_CLICK_ASSET";
pub const ENV_LOG_LEVEL: &str = "TALLY_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TALLY_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "tally.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyConfig {
    /// SQLite file backing the key-value store.
    pub db_path: PathBuf,
    pub click_asset: String,
    pub log_level: &'static str,
    /// Logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            click_asset: DEFAULT_CLICK_ASSET.to_string(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl TallyConfig {
    /// Defaults overridden by process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = read(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(asset) = read(ENV_CLICK_ASSET) {
            config.click_asset = asset;
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.set_log_level(&level)?;
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        Ok(config)
    }

    /// Validates and applies a log level such as `info` or `WARNING`.
    pub fn set_log_level(&mut self, level: &str) -> Result<(), ConfigError> {
        self.log_level = normalize_level(level).map_err(ConfigError::InvalidLogLevel)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "invalid log level: {message}"),
        }
    }
}

impl Error for ConfigError {}
