use log::{info, warn};
use thiserror::Error;

use super::block::Block;
use super::pow::{self, MiningError};
use super::transaction::Transaction;

/// Previous-hash sentinel carried by the genesis block
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Difficulty used when none is supplied
pub const DEFAULT_DIFFICULTY: usize = 4;

/// Errors that can occur during blockchain operations
#[derive(Debug, Error)]
pub enum BlockchainError {
    #[error("Mining error: {0}")]
    Mining(#[from] MiningError),
}

/// Represents the blockchain
///
/// An append-only sequence of blocks plus the pool of transactions waiting
/// to be mined into the next one. A single owner mutates it; appended
/// blocks are only read back.
#[derive(Debug, Clone)]
pub struct Blockchain {
    /// The chain of blocks
    chain: Vec<Block>,

    /// Pending transactions to be included in the next block
    pending_transactions: Vec<Transaction>,

    /// Mining difficulty (number of leading zeros required in hash)
    difficulty: usize,

    /// Nonce-search cap for proof of work; `None` searches unbounded
    max_mining_attempts: Option<u64>,
}

impl Blockchain {
    /// Creates a new blockchain with a genesis block
    ///
    /// # Arguments
    ///
    /// * `difficulty` - Number of leading zero hex characters a mined hash must carry
    ///
    /// # Returns
    ///
    /// A new Blockchain instance
    pub fn new(difficulty: usize) -> Self {
        let mut blockchain = Blockchain {
            chain: Vec::new(),
            pending_transactions: Vec::new(),
            difficulty,
            max_mining_attempts: None,
        };

        blockchain.create_genesis_block();

        blockchain
    }

    /// Creates the genesis block (first block in the chain)
    ///
    /// The genesis block carries no transactions and the fixed sentinel
    /// previous hash; it is constructed with nonce 0, not mined.
    fn create_genesis_block(&mut self) {
        let genesis_block = Block::new(0, Vec::new(), GENESIS_PREVIOUS_HASH.to_string());

        self.chain.push(genesis_block);
    }

    /// Gets the last block in the chain
    ///
    /// The chain always holds at least the genesis block; an empty chain is
    /// a programming fault, not a runtime condition.
    pub fn latest_block(&self) -> &Block {
        self.chain
            .last()
            .expect("chain always contains the genesis block")
    }

    /// Adds a transaction to the pending pool
    ///
    /// No identity, balance, or amount validation is performed; every
    /// transaction is accepted as given.
    ///
    /// # Arguments
    ///
    /// * `sender` - The sender's identifier
    /// * `receiver` - The receiver's identifier
    /// * `amount` - The amount to transfer
    pub fn add_transaction(
        &mut self,
        sender: impl Into<String>,
        receiver: impl Into<String>,
        amount: f64,
    ) {
        self.pending_transactions
            .push(Transaction::new(sender, receiver, amount));
    }

    /// Limits how many nonces a single `mine_block` call may try
    ///
    /// `None` restores the unbounded search.
    pub fn set_max_mining_attempts(&mut self, max_attempts: Option<u64>) {
        self.max_mining_attempts = max_attempts;
    }

    /// Mines a new block with the pending transactions
    ///
    /// Builds a candidate from a snapshot of the pending pool, runs proof of
    /// work at the configured difficulty, then appends the block and clears
    /// the pool. An empty pool still mines an empty block. If the nonce
    /// search gives up, the chain and the pool are left untouched.
    ///
    /// # Returns
    ///
    /// Result with the newly mined block
    pub fn mine_block(&mut self) -> Result<&Block, BlockchainError> {
        let latest = self.latest_block();
        let mut block = Block::new(
            latest.index + 1,
            self.pending_transactions.clone(),
            latest.hash.clone(),
        );

        pow::mine(&mut block, self.difficulty, self.max_mining_attempts)?;

        info!(
            "Block {} successfully mined (nonce {}, hash {})",
            block.index, block.nonce, block.hash
        );

        self.pending_transactions.clear();
        self.chain.push(block);

        Ok(self
            .chain
            .last()
            .expect("chain always contains the genesis block"))
    }

    /// Gets all blocks in the chain
    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    /// Gets all pending transactions
    pub fn pending_transactions(&self) -> &[Transaction] {
        &self.pending_transactions
    }

    /// Gets the configured mining difficulty
    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    /// Mutable access to a stored block
    ///
    /// The normal flow never rewrites an appended block; this exists so
    /// demos and tests can tamper with stored data and watch
    /// `is_chain_valid` catch it.
    pub fn block_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.chain.get_mut(index)
    }

    /// Validates the blockchain
    ///
    /// Recomputes every block's hash against its stored hash and checks each
    /// block's link to its predecessor, starting with the genesis block's
    /// own hash. Stops at the first failure.
    ///
    /// # Returns
    ///
    /// true if the blockchain is valid, false otherwise
    pub fn is_chain_valid(&self) -> bool {
        for i in 0..self.chain.len() {
            let current_block = &self.chain[i];

            // Check if the hash matches the block's contents
            if current_block.hash != current_block.calculate_hash() {
                warn!("Block {} has been tampered with", current_block.index);
                return false;
            }

            // Check if the link to the previous block is intact
            if i > 0 && current_block.previous_hash != self.chain[i - 1].hash {
                warn!("Block {} has an invalid previous hash", current_block.index);
                return false;
            }
        }

        true
    }
}

impl Default for Blockchain {
    fn default() -> Self {
        Blockchain::new(DEFAULT_DIFFICULTY)
    }
}
