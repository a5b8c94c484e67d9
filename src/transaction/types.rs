/// Transaction record types
use sha2::{Digest, Sha256};

/// Maximum transaction size in bytes (100KB) to prevent DoS
pub const MAX_TRANSACTION_SIZE: usize = 100_000;

pub type Sha256Hash = [u8; 32];

/// Reference to a specific output of a previous transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct OutPoint {
    pub hash: Sha256Hash,
    pub index: u32,
}

impl OutPoint {
    pub fn new(hash: Sha256Hash, index: u32) -> Self {
        OutPoint { hash, index }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TxIn {
    pub previous_outpoint: OutPoint,
    pub signature_script: Vec<u8>,
    pub sequence: u32,
}

impl TxIn {
    /// Sequence value that disables relative lock-time for the input
    pub const MAX_SEQUENCE: u32 = u32::MAX;

    pub fn new(previous_outpoint: OutPoint, signature_script: Vec<u8>) -> Self {
        TxIn {
            previous_outpoint,
            signature_script,
            sequence: Self::MAX_SEQUENCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TxOut {
    pub value: i64,
    pub pk_script: Vec<u8>,
}

impl TxOut {
    pub fn new(value: i64, pk_script: Vec<u8>) -> Self {
        TxOut { value, pk_script }
    }
}

/// A decoded transaction record.
///
/// Field order is the canonical encoding order; [`Transaction::hash`] streams
/// the same layout the codec writes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    pub const CURRENT_VERSION: i32 = 1;

    pub fn new(version: i32) -> Self {
        Transaction {
            version,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
        }
    }

    pub fn with_input(mut self, input: TxIn) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn with_output(mut self, output: TxOut) -> Self {
        self.outputs.push(output);
        self
    }

    pub fn with_lock_time(mut self, lock_time: u32) -> Self {
        self.lock_time = lock_time;
        self
    }

    pub fn hash_str(&self) -> String {
        hex::encode(self.hash())
    }

    /// Double SHA-256 of the canonical encoding.
    ///
    /// Lengths are written as u64 little-endian and integers in fixed width,
    /// matching the codec byte for byte, so no intermediate buffer is built.
    pub fn hash(&self) -> Sha256Hash {
        let mut hasher = Sha256::new();
        hasher.update(self.version.to_le_bytes());

        hasher.update((self.inputs.len() as u64).to_le_bytes());
        for input in &self.inputs {
            hasher.update(input.previous_outpoint.hash);
            hasher.update(input.previous_outpoint.index.to_le_bytes());
            hasher.update((input.signature_script.len() as u64).to_le_bytes());
            hasher.update(&input.signature_script);
            hasher.update(input.sequence.to_le_bytes());
        }

        hasher.update((self.outputs.len() as u64).to_le_bytes());
        for output in &self.outputs {
            hasher.update(output.value.to_le_bytes());
            hasher.update((output.pk_script.len() as u64).to_le_bytes());
            hasher.update(&output.pk_script);
        }

        hasher.update(self.lock_time.to_le_bytes());
        let first = hasher.finalize();
        Sha256::digest(first).into()
    }
}
