//! Configuration management for txhandle

use crate::error::{Result, TxError};
use crate::transaction::MAX_TRANSACTION_SIZE;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TxConfig {
    /// Largest serialized transaction accepted when decoding
    #[serde(default = "default_max_transaction_size")]
    pub max_transaction_size: usize,
    /// Block lists at least this long are hashed in parallel
    #[serde(default = "default_parallel_hash_threshold")]
    pub parallel_hash_threshold: usize,
}

impl Default for TxConfig {
    fn default() -> Self {
        Self {
            max_transaction_size: default_max_transaction_size(),
            parallel_hash_threshold: default_parallel_hash_threshold(),
        }
    }
}

impl TxConfig {
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: TxConfig = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_transaction_size == 0 {
            return Err(TxError::Config(
                "max_transaction_size must be greater than zero".to_string(),
            ));
        }
        if self.parallel_hash_threshold == 0 {
            return Err(TxError::Config(
                "parallel_hash_threshold must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from a TOML file.
///
/// A missing or empty file yields the defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<TxConfig> {
    let path = path.as_ref();
    let config_str = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    if config_str.trim().is_empty() {
        tracing::debug!(path = %path.display(), "no config found, using defaults");
        return Ok(TxConfig::default());
    }

    TxConfig::from_toml_str(&config_str)
}

fn default_max_transaction_size() -> usize {
    MAX_TRANSACTION_SIZE
}

fn default_parallel_hash_threshold() -> usize {
    64
}
