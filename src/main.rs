use anyhow::Result;
use log::info;

mod blockchain;

use blockchain::Blockchain;

// Print every block in the chain for inspection
fn print_chain(blockchain: &Blockchain) {
    for block in blockchain.chain() {
        println!("{}", block);
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Create a new blockchain with the default difficulty
    let mut blockchain = Blockchain::default();

    info!("Adding transactions and mining blocks...");
    blockchain.add_transaction("Alice", "Bob", 1.5);
    blockchain.add_transaction("Bob", "Charlie", 0.8);
    blockchain.mine_block()?;

    blockchain.add_transaction("Charlie", "Dave", 2.2);
    blockchain.mine_block()?;

    println!("\nOriginal blockchain:");
    print_chain(&blockchain);

    info!("Validating original chain...");
    println!("Is chain valid? {}", blockchain.is_chain_valid());

    // Rewrite a stored transaction directly, bypassing the mining flow, to
    // simulate an attack on the ledger.
    info!("Tampering with block 1...");
    if let Some(block) = blockchain.block_mut(1) {
        block.transactions[0].amount = 100.0;
    }

    info!("Validating tampered chain...");
    println!("Is chain valid? {}", blockchain.is_chain_valid());

    Ok(())
}
