//! Canonical binary encoding for [`Transaction`]
//!
//! bincode with fixed-width little-endian integers. Trailing bytes are
//! rejected so every valid encoding maps to exactly one record.

use super::types::{Transaction, MAX_TRANSACTION_SIZE};
use crate::error::{DecodeError, TxError};
use bincode::Options;

/// Reject input longer than `limit` bytes before decoding it.
pub fn check_size(len: usize, limit: usize) -> Result<(), DecodeError> {
    if len > limit {
        return Err(DecodeError(format!(
            "Transaction too large: {} bytes (max: {})",
            len, limit
        )));
    }
    Ok(())
}

fn wire_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
}

impl Transaction {
    /// Serialize into the canonical encoding.
    pub fn encode(&self) -> Result<Vec<u8>, TxError> {
        let serialized = wire_options().serialize(self)?;
        if serialized.len() > MAX_TRANSACTION_SIZE {
            return Err(TxError::TooLarge {
                size: serialized.len(),
                max: MAX_TRANSACTION_SIZE,
            });
        }
        Ok(serialized)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_with_limit(bytes, MAX_TRANSACTION_SIZE)
    }

    /// Decode, refusing input longer than `limit` bytes.
    pub fn decode_with_limit(bytes: &[u8], limit: usize) -> Result<Self, DecodeError> {
        check_size(bytes.len(), limit)?;
        let tx = wire_options()
            .with_limit(limit as u64)
            .deserialize(bytes)?;
        Ok(tx)
    }
}
