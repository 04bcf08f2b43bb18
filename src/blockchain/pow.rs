use log::debug;
use thiserror::Error;

use super::block::Block;

/// Errors that can occur during proof of work
#[derive(Debug, Error)]
pub enum MiningError {
    #[error("no nonce satisfying difficulty {difficulty} found within {attempts} attempts")]
    AttemptsExhausted { difficulty: usize, attempts: u64 },
}

/// Searches for a nonce that makes the block's hash satisfy the difficulty
///
/// Starting from the candidate's current nonce, the hash is tested against
/// the difficulty predicate (the first `difficulty` hex characters must all
/// be `'0'`); on a miss the nonce is incremented and the hash re-sealed, so
/// `block.hash == block.calculate_hash()` holds on every iteration.
///
/// # Arguments
///
/// * `block` - The candidate block, mined in place
/// * `difficulty` - Number of leading zero hex characters required
/// * `max_attempts` - Give up after this many nonces; `None` searches unbounded
///
/// # Returns
///
/// Result with () once the block carries a satisfying nonce and hash
pub fn mine(
    block: &mut Block,
    difficulty: usize,
    max_attempts: Option<u64>,
) -> Result<(), MiningError> {
    let target = "0".repeat(difficulty);
    let mut attempts: u64 = 0;

    loop {
        if block.hash.starts_with(&target) {
            debug!(
                "found nonce {} for block {} after {} attempts",
                block.nonce,
                block.index,
                attempts + 1
            );
            return Ok(());
        }

        attempts += 1;
        if let Some(cap) = max_attempts {
            if attempts >= cap {
                return Err(MiningError::AttemptsExhausted {
                    difficulty,
                    attempts,
                });
            }
        }

        block.nonce += 1;
        block.hash = block.calculate_hash();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::transaction::Transaction;

    fn candidate() -> Block {
        Block::new(
            1,
            vec![Transaction::new("Alice", "Bob", 10.0)],
            "previous_hash".to_string(),
        )
    }

    #[test]
    fn test_mined_hash_satisfies_difficulty() {
        let mut block = candidate();

        mine(&mut block, 2, None).unwrap();

        assert!(block.hash.starts_with("00"));
        assert_eq!(block.hash, block.calculate_hash());
    }

    #[test]
    fn test_zero_difficulty_accepts_initial_nonce() {
        let mut block = candidate();

        mine(&mut block, 0, None).unwrap();

        assert_eq!(block.nonce, 0);
    }

    #[test]
    fn test_attempts_cap_exhausted() {
        let mut block = candidate();

        // 64 leading zeros is the full digest; unreachable in 100 attempts.
        let result = mine(&mut block, 64, Some(100));

        match result {
            Err(MiningError::AttemptsExhausted {
                difficulty,
                attempts,
            }) => {
                assert_eq!(difficulty, 64);
                assert_eq!(attempts, 100);
            }
            Ok(()) => panic!("mining should not succeed at difficulty 64"),
        }
    }

    #[test]
    fn test_block_stays_sealed_after_cap() {
        let mut block = candidate();

        let _ = mine(&mut block, 64, Some(10));

        assert_eq!(block.hash, block.calculate_hash());
    }
}
