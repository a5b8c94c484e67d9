//! Integration tests for transaction handles and block assembly

use sha2::{Digest, Sha256};
use txhandle::config::TxConfig;
use txhandle::transaction::{OutPoint, TxIn, TxOut};
use txhandle::{BlockTransactions, Sha256Hash, Transaction, Tx, TX_INDEX_UNKNOWN};

/// Helper to build a one-input, two-output transaction
fn create_test_transaction(seed: u8) -> Transaction {
    Transaction::new(Transaction::CURRENT_VERSION)
        .with_input(TxIn::new(
            OutPoint::new([seed; 32], 0),
            vec![0x47, 0x30, 0x44, seed],
        ))
        .with_output(TxOut::new(4_000_000, vec![0x76, 0xa9, 0x14, seed]))
        .with_output(TxOut::new(999_000, vec![0x76, 0xa9, 0x14]))
}

/// Hash computed without going through the handle
fn independent_hash(bytes: &[u8]) -> Sha256Hash {
    Sha256::digest(Sha256::digest(bytes)).into()
}

#[test]
fn test_handle_from_bytes_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let bytes = create_test_transaction(1).encode()?;
    let expected_hash = Transaction::decode(&bytes)?.hash();

    let mut tx: Tx = Tx::from_bytes(bytes.clone())?;
    assert_eq!(tx.index(), -1);

    tx.set_index(3);
    assert_eq!(tx.index(), 3);

    let first = tx.hash();
    assert_eq!(first, expected_hash);
    assert_eq!(first, independent_hash(&bytes));
    assert_eq!(tx.hash(), first);

    Ok(())
}

#[test]
fn test_both_constructors_agree() -> Result<(), Box<dyn std::error::Error>> {
    let record = create_test_transaction(2);
    let bytes = record.encode()?;

    let from_record = Tx::new(record.clone());
    let from_bytes: Tx = Tx::from_bytes(bytes)?;

    assert_eq!(from_record.index(), TX_INDEX_UNKNOWN);
    assert_eq!(from_bytes.index(), TX_INDEX_UNKNOWN);
    assert_eq!(from_bytes.record(), &record);
    assert_eq!(from_bytes.record().hash(), record.hash());
    assert_eq!(from_record.hash(), from_bytes.hash());
    assert_eq!(from_record.to_bytes()?, from_bytes.to_bytes()?);

    Ok(())
}

#[test]
fn test_malformed_bytes_produce_no_handle() {
    let result = Tx::<Transaction>::from_bytes(vec![0x00]);
    assert!(result.is_err());

    let mut truncated = create_test_transaction(3).encode().unwrap();
    truncated.truncate(truncated.len() / 2);
    assert!(Tx::<Transaction>::from_bytes(truncated).is_err());
}

#[test]
fn test_config_limit_applies_to_handles() -> Result<(), Box<dyn std::error::Error>> {
    let config = TxConfig::from_toml_str("max_transaction_size = 16")?;
    let bytes = create_test_transaction(4).encode()?;
    assert!(bytes.len() > config.max_transaction_size);
    assert!(Tx::<Transaction>::from_bytes_with_config(bytes, &config).is_err());
    Ok(())
}

#[test]
fn test_block_assembly() -> Result<(), Box<dyn std::error::Error>> {
    let decoded: Vec<Tx> = (0..4)
        .map(|seed| Ok(Tx::from_bytes(create_test_transaction(seed).encode()?)?))
        .collect::<Result<_, Box<dyn std::error::Error>>>()?;
    let expected: Vec<Sha256Hash> = decoded.iter().map(Tx::hash).collect();

    let block = BlockTransactions::from_handles(decoded).with_config(&TxConfig::default());
    assert_eq!(block.len(), 4);
    for (position, tx) in block.iter().enumerate() {
        assert_eq!(tx.position(), Some(position));
    }
    assert_eq!(block.tx_hashes(), expected);
    assert_ne!(block.merkle_root(), [0u8; 32]);

    Ok(())
}
