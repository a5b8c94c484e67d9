//! Ordered transactions of a block
//!
//! Wraps each record in a [`Tx`] whose index is its offset in the block.

use crate::config::TxConfig;
use crate::transaction::{Sha256Hash, Transaction};
use crate::tx::{Tx, TxRecord};
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct BlockTransactions<T = Transaction> {
    transactions: Vec<Tx<T>>,
    parallel_hash_threshold: usize,
}

impl<T: TxRecord> BlockTransactions<T> {
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        Self::from_handles(records.into_iter().map(Tx::new).collect())
    }

    /// Take ownership of existing handles and renumber them by position.
    ///
    /// Hashes already cached on the handles are kept.
    pub fn from_handles(mut transactions: Vec<Tx<T>>) -> Self {
        for (position, tx) in transactions.iter_mut().enumerate() {
            // Vec lengths are bounded by isize::MAX, so every offset fits
            let index = i64::try_from(position).unwrap_or(i64::MAX);
            tx.set_index(index);
        }
        BlockTransactions {
            transactions,
            parallel_hash_threshold: TxConfig::default().parallel_hash_threshold,
        }
    }

    pub fn with_config(mut self, config: &TxConfig) -> Self {
        self.parallel_hash_threshold = config.parallel_hash_threshold;
        self
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Tx<T>> {
        self.transactions.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tx<T>> {
        self.transactions.iter()
    }

    pub fn into_handles(self) -> Vec<Tx<T>> {
        self.transactions
    }
}

impl<T: TxRecord + Send + Sync> BlockTransactions<T> {
    /// Hashes of all transactions in block order.
    pub fn tx_hashes(&self) -> Vec<Sha256Hash> {
        let parallel = self.transactions.len() >= self.parallel_hash_threshold;
        debug!(
            count = self.transactions.len(),
            parallel, "hashing block transactions"
        );
        if parallel {
            self.transactions.par_iter().map(Tx::hash).collect()
        } else {
            self.transactions.iter().map(Tx::hash).collect()
        }
    }

    /// Merkle root over the transaction hashes.
    ///
    /// Odd levels pair their last hash with itself. An empty block has the
    /// all-zero root.
    pub fn merkle_root(&self) -> Sha256Hash {
        let mut level = self.tx_hashes();
        if level.is_empty() {
            return [0u8; 32];
        }

        while level.len() > 1 {
            if level.len() % 2 == 1 {
                let last = level[level.len() - 1];
                level.push(last);
            }
            level = level
                .chunks_exact(2)
                .map(|pair| hash_pair(&pair[0], &pair[1]))
                .collect();
        }
        level[0]
    }
}

fn hash_pair(left: &Sha256Hash, right: &Sha256Hash) -> Sha256Hash {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    Sha256::digest(hasher.finalize()).into()
}
