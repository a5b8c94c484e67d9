//! Transaction handle with a memoized content hash
//!
//! [`Tx`] wraps a decoded transaction record and computes its hash on first
//! request. The hash lives in a write-once cell, so the first call to
//! [`Tx::hash`] is the only point where the handle's cached state changes and
//! later calls are plain reads. The cell is thread-safe: concurrent first
//! callers block until one of them has stored the value, and the record's
//! hasher runs exactly once per handle.
//!
//! The handle also carries the record's position inside a block. Until
//! [`Tx::set_index`] is called the position reads as [`TX_INDEX_UNKNOWN`].

use crate::config::TxConfig;
use crate::error::{DecodeError, Result};
use crate::transaction::codec::check_size;
use crate::transaction::{Sha256Hash, Transaction};
use once_cell::sync::OnceCell;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Index reported for a transaction that has not been placed in a block.
pub const TX_INDEX_UNKNOWN: i64 = -1;

/// Capabilities a record needs to be wrapped in a [`Tx`].
pub trait TxRecord: Sized {
    /// Content hash of the record. Must be deterministic and cannot fail.
    fn tx_hash(&self) -> Sha256Hash;

    /// Canonical serialized form of the record.
    fn encode(&self) -> Result<Vec<u8>>;

    fn decode(bytes: &[u8]) -> std::result::Result<Self, DecodeError>;

    /// Decode, refusing input longer than `limit` bytes.
    fn decode_with_limit(bytes: &[u8], limit: usize) -> std::result::Result<Self, DecodeError> {
        check_size(bytes.len(), limit)?;
        Self::decode(bytes)
    }
}

impl TxRecord for Transaction {
    fn tx_hash(&self) -> Sha256Hash {
        self.hash()
    }

    fn encode(&self) -> Result<Vec<u8>> {
        Transaction::encode(self)
    }

    fn decode(bytes: &[u8]) -> std::result::Result<Self, DecodeError> {
        Transaction::decode(bytes)
    }

    fn decode_with_limit(bytes: &[u8], limit: usize) -> std::result::Result<Self, DecodeError> {
        Transaction::decode_with_limit(bytes, limit)
    }
}

/// A decoded transaction with its lazily computed hash and block position.
#[derive(Debug, Clone)]
pub struct Tx<T = Transaction> {
    record: T,
    /// Bytes the handle was decoded from, kept verbatim
    serialized: Option<Vec<u8>>,
    hash: OnceCell<Sha256Hash>,
    /// `None` is the unknown position
    index: Option<i64>,
}

impl<T: TxRecord> Tx<T> {
    /// Wrap an already decoded record.
    pub fn new(record: T) -> Self {
        Tx {
            record,
            serialized: None,
            hash: OnceCell::new(),
            index: None,
        }
    }

    /// Decode a record from its serialized form and keep the bytes.
    ///
    /// Any size limit is the record codec's own; its error is returned as-is.
    pub fn from_bytes(serialized: impl Into<Vec<u8>>) -> std::result::Result<Self, DecodeError> {
        Self::decode_into(serialized.into(), T::decode)
    }

    pub fn from_bytes_with_limit(
        serialized: impl Into<Vec<u8>>,
        limit: usize,
    ) -> std::result::Result<Self, DecodeError> {
        Self::decode_into(serialized.into(), |bytes| T::decode_with_limit(bytes, limit))
    }

    /// Decode using the size limit from `config`.
    pub fn from_bytes_with_config(
        serialized: impl Into<Vec<u8>>,
        config: &TxConfig,
    ) -> std::result::Result<Self, DecodeError> {
        Self::from_bytes_with_limit(serialized, config.max_transaction_size)
    }

    fn decode_into(
        serialized: Vec<u8>,
        decode: impl FnOnce(&[u8]) -> std::result::Result<T, DecodeError>,
    ) -> std::result::Result<Self, DecodeError> {
        let record = decode(&serialized).map_err(|e| {
            debug!(len = serialized.len(), error = %e, "failed to decode transaction");
            e
        })?;

        Ok(Tx {
            record,
            serialized: Some(serialized),
            hash: OnceCell::new(),
            index: None,
        })
    }

    /// The wrapped record.
    ///
    /// Only a shared view is handed out; use [`Tx::into_record`] to get an
    /// owned record that can be changed.
    pub fn record(&self) -> &T {
        &self.record
    }

    /// Give up the handle, its cached hash and retained bytes.
    pub fn into_record(self) -> T {
        self.record
    }

    pub fn hash(&self) -> Sha256Hash {
        *self.hash.get_or_init(|| {
            let hash = self.record.tx_hash();
            trace!(hash = %hex::encode(hash), "computed transaction hash");
            hash
        })
    }

    pub fn hash_str(&self) -> String {
        hex::encode(self.hash())
    }

    /// True once [`Tx::hash`] has been called.
    pub fn is_hash_cached(&self) -> bool {
        self.hash.get().is_some()
    }

    /// Position in the containing block, or [`TX_INDEX_UNKNOWN`].
    pub fn index(&self) -> i64 {
        self.index.unwrap_or(TX_INDEX_UNKNOWN)
    }

    /// Overwrite the block position. No range check is applied.
    pub fn set_index(&mut self, index: i64) {
        self.index = if index == TX_INDEX_UNKNOWN {
            None
        } else {
            Some(index)
        };
    }

    /// Zero-based block offset, if a non-negative index has been assigned.
    pub fn position(&self) -> Option<usize> {
        self.index.and_then(|i| usize::try_from(i).ok())
    }

    /// Bytes the handle was decoded from, if it was built by [`Tx::from_bytes`].
    pub fn serialized(&self) -> Option<&[u8]> {
        self.serialized.as_deref()
    }

    /// Serialized form: the retained bytes, or a fresh encoding of the record.
    pub fn to_bytes(&self) -> Result<Cow<'_, [u8]>> {
        match &self.serialized {
            Some(bytes) => Ok(Cow::Borrowed(bytes.as_slice())),
            None => Ok(Cow::Owned(self.record.encode()?)),
        }
    }
}

impl<T: TxRecord> From<T> for Tx<T> {
    fn from(record: T) -> Self {
        Tx::new(record)
    }
}
