use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::transaction::Transaction;

/// Represents a block in the blockchain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Index of the block in the chain
    pub index: u64,

    /// Timestamp when the block was created
    pub timestamp: DateTime<Utc>,

    /// List of transactions included in this block
    pub transactions: Vec<Transaction>,

    /// Nonce found by proof of work
    pub nonce: u64,

    /// Hash of the previous block
    pub previous_hash: String,

    /// Hash of the current block (calculated)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hash: String,
}

impl Block {
    /// Creates a new block
    ///
    /// The timestamp is stamped at creation, the nonce starts at 0, and the
    /// hash is sealed immediately so that `hash == calculate_hash()` holds
    /// from the first moment. Proof of work re-seals it on every nonce step.
    ///
    /// # Arguments
    ///
    /// * `index` - The index of the block in the chain
    /// * `transactions` - The list of transactions to include in the block
    /// * `previous_hash` - The hash of the previous block
    ///
    /// # Returns
    ///
    /// A new Block instance
    pub fn new(index: u64, transactions: Vec<Transaction>, previous_hash: String) -> Self {
        let block = Block {
            index,
            timestamp: Utc::now(),
            transactions,
            nonce: 0,
            previous_hash,
            hash: String::new(),
        };

        let hash = block.calculate_hash();

        Block { hash, ..block }
    }

    /// Calculates the hash of the block
    ///
    /// The canonical encoding is a JSON object of the block's fields
    /// excluding `hash` itself. serde_json orders object keys, chrono
    /// serializes the timestamp as RFC 3339, and the transaction list is an
    /// ordered JSON array, so two different blocks cannot share an encoding.
    ///
    /// # Returns
    ///
    /// The SHA-256 hash of the block as a hexadecimal string
    pub fn calculate_hash(&self) -> String {
        let mut hasher = Sha256::new();

        let block_data = serde_json::json!({
            "index": self.index,
            "timestamp": self.timestamp,
            "transactions": self.transactions,
            "nonce": self.nonce,
            "previous_hash": self.previous_hash,
        });

        let block_string = serde_json::to_string(&block_data).unwrap();

        hasher.update(block_string.as_bytes());

        hex::encode(hasher.finalize())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block {}", self.index)?;
        writeln!(f, "  Timestamp: {}", self.timestamp)?;
        writeln!(f, "  Previous hash: {}", self.previous_hash)?;
        writeln!(f, "  Hash: {}", self.hash)?;
        writeln!(f, "  Nonce: {}", self.nonce)?;
        write!(
            f,
            "  Transactions: {}",
            serde_json::to_string_pretty(&self.transactions).map_err(|_| fmt::Error)?
        )
    }
}
