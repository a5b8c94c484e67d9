//! txhandle - Transaction handles with memoized hashes
//!
//! # Architecture
//!
//! ## Core
//! - [`tx`] - Transaction handle: cached hash, block position index
//! - [`transaction`] - Transaction record types and wire codec
//! - [`block`] - Ordered block transactions and merkle root
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//! - [`logging`] - Tracing subscriber setup

#![forbid(unsafe_code)]

// ============================================================================
// Core
// ============================================================================
pub mod block;
pub mod transaction;
pub mod tx;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;
pub mod logging;

pub use block::BlockTransactions;
pub use error::{DecodeError, TxError};
pub use transaction::{Sha256Hash, Transaction};
pub use tx::{Tx, TxRecord, TX_INDEX_UNKNOWN};
