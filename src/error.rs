//! Error types for txhandle

use thiserror::Error;

/// Failure to decode a transaction from its serialized form.
///
/// Carries the codec's diagnostic text as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct DecodeError(pub String);

impl DecodeError {
    pub fn new(msg: impl Into<String>) -> Self {
        DecodeError(msg.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<Box<bincode::ErrorKind>> for DecodeError {
    fn from(err: Box<bincode::ErrorKind>) -> Self {
        DecodeError(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum TxError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("Transaction too large: {size} bytes (max: {max})")]
    TooLarge { size: usize, max: usize },
    #[error("Encode error: {0}")]
    Encode(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<Box<bincode::ErrorKind>> for TxError {
    fn from(err: Box<bincode::ErrorKind>) -> Self {
        TxError::Encode(err.to_string())
    }
}

impl From<toml::de::Error> for TxError {
    fn from(err: toml::de::Error) -> Self {
        TxError::Config(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, TxError>;
