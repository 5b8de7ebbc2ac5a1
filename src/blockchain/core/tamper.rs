use crate::crypto::digest;
use tracing::debug;

use super::chain::{Blockchain, NULL_HASH_LITERAL};

/// Overwrites the genesis block's previous hash with a non-null digest so the
/// chain fails its genesis check. Mutates `chain` in place.
///
/// # Panics
///
/// Panics if the chain has no blocks.
pub fn break_chain(chain: &mut Blockchain) -> &mut Blockchain {
    let genesis = chain
        .blocks
        .first_mut()
        .expect("break_chain requires at least one block");

    let seed = format!(
        "{}tamper",
        genesis.previous_hash.as_deref().unwrap_or(NULL_HASH_LITERAL)
    );
    let forged = digest(seed);
    debug!("Forging genesis previous hash {}", forged);
    genesis.previous_hash = Some(forged);
    chain
}
