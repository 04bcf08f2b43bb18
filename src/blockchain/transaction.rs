use serde::{Deserialize, Serialize};

/// Represents a transfer recorded on the chain
///
/// The simulation records who sent what to whom; it does not keep account
/// balances, so amounts are never checked or settled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sender's identifier
    pub sender: String,

    /// Receiver's identifier
    pub receiver: String,

    /// Amount being transferred
    pub amount: f64,
}

impl Transaction {
    /// Creates a new transaction
    ///
    /// # Arguments
    ///
    /// * `sender` - The sender's identifier
    /// * `receiver` - The receiver's identifier
    /// * `amount` - The amount to transfer
    ///
    /// # Returns
    ///
    /// A new Transaction instance
    pub fn new(sender: impl Into<String>, receiver: impl Into<String>, amount: f64) -> Self {
        Transaction {
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
        }
    }
}
