use crate::error::ChainError;
use crate::transaction::validate_transaction;
use tracing::debug;

use super::chain::{Block, Blockchain, NULL_HASH_LITERAL};

/// Recomputes the block digest, compares it with the stored hash, then checks
/// every transaction in order.
pub fn validate_block(block: &Block) -> Result<(), ChainError> {
    let computed = block.compute_hash();
    if computed != block.hash {
        return Err(ChainError::HashMismatch {
            stored: block.hash.clone(),
            computed,
        });
    }

    for (index, tx) in block.transactions.iter().enumerate() {
        validate_transaction(tx).map_err(|e| ChainError::InvalidTransactionAt {
            index,
            source: Box::new(e),
        })?;
    }
    Ok(())
}

pub fn is_valid_block(block: &Block) -> bool {
    match validate_block(block) {
        Ok(()) => true,
        Err(e) => {
            debug!("Rejected block {}: {}", block.hash, e);
            false
        }
    }
}

/// Genesis shape, then per-block validity, then linkage to the predecessor.
pub fn validate_chain(chain: &Blockchain) -> Result<(), ChainError> {
    let genesis = chain.blocks.first().ok_or(ChainError::EmptyChain)?;

    if genesis.previous_hash.is_some() {
        return Err(ChainError::InvalidGenesis(
            "Genesis block must not have a previous hash".to_string(),
        ));
    }
    if !genesis.transactions.is_empty() {
        return Err(ChainError::InvalidGenesis(format!(
            "Genesis block must not contain transactions, found {}",
            genesis.transactions.len()
        )));
    }

    for (height, block) in chain.blocks.iter().enumerate() {
        validate_block(block).map_err(|e| ChainError::InvalidBlock {
            height,
            source: Box::new(e),
        })?;

        if height == 0 {
            continue;
        }
        let previous = &chain.blocks[height - 1];
        match block.previous_hash.as_deref() {
            Some(previous_hash) if previous_hash == previous.hash => {}
            other => {
                return Err(ChainError::InvalidBlockLinkage {
                    height,
                    expected: previous.hash.clone(),
                    actual: other.unwrap_or(NULL_HASH_LITERAL).to_string(),
                })
            }
        }
    }
    Ok(())
}

pub fn is_valid_chain(chain: &Blockchain) -> bool {
    match validate_chain(chain) {
        Ok(()) => true,
        Err(e) => {
            debug!("Rejected chain of {} blocks: {}", chain.blocks.len(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{digest, KeyPair};
    use crate::transaction::Transaction;

    fn populated_chain() -> (KeyPair, Blockchain) {
        let alice = KeyPair::generate();
        let bob = KeyPair::generate();
        let mut chain = Blockchain::new();
        chain
            .add_transactions(vec![Transaction::new(&alice, bob.identity(), 10)])
            .unwrap();
        chain
            .add_transactions(vec![
                Transaction::new(&bob, alice.identity(), 3),
                Transaction::new(&alice, bob.identity(), 0),
            ])
            .unwrap();
        (alice, chain)
    }

    #[test]
    fn test_empty_block_with_correct_hash_is_valid() {
        assert!(is_valid_block(&Block::new(Vec::new(), None)));
        assert!(is_valid_block(&Block::new(Vec::new(), Some("prev".to_string()))));
    }

    #[test]
    fn test_empty_block_hash_is_still_checked() {
        let mut block = Block::new(Vec::new(), None);
        block.hash = "0".repeat(128);
        assert!(!is_valid_block(&block));
    }

    #[test]
    fn test_hash_comparison_is_case_sensitive() {
        let mut block = Block::new(Vec::new(), None);
        block.hash = block.hash.to_uppercase();
        assert!(matches!(validate_block(&block), Err(ChainError::HashMismatch { .. })));
    }

    #[test]
    fn test_tampered_nonce_detected_and_restored() {
        let (_, chain) = populated_chain();
        let mut block = chain.blocks[1].clone();
        block.nonce += 1;
        assert!(!is_valid_block(&block));

        let nonce = block.nonce;
        block.calculate_hash(nonce);
        assert!(is_valid_block(&block));
    }

    #[test]
    fn test_tampered_previous_hash_detected() {
        let (_, chain) = populated_chain();
        let mut block = chain.blocks[1].clone();
        block.previous_hash = Some(digest("elsewhere"));
        assert!(!is_valid_block(&block));
        block.calculate_hash(0);
        assert!(is_valid_block(&block));
    }

    #[test]
    fn test_tampered_transaction_detected_by_hash() {
        let (_, chain) = populated_chain();
        let mut block = chain.blocks[2].clone();
        block.transactions[1].amount = 500;
        assert!(matches!(validate_block(&block), Err(ChainError::HashMismatch { .. })));

        // Rehashing alone does not help: the signature no longer matches.
        block.calculate_hash(0);
        match validate_block(&block) {
            Err(ChainError::InvalidTransactionAt { index, .. }) => assert_eq!(index, 1),
            other => panic!("Expected InvalidTransactionAt, got {:?}", other),
        }
    }

    #[test]
    fn test_single_genesis_chain_is_valid() {
        let genesis = Block {
            transactions: Vec::new(),
            previous_hash: None,
            nonce: 0,
            hash: digest("null0"),
        };
        assert!(is_valid_chain(&Blockchain { blocks: vec![genesis] }));
    }

    #[test]
    fn test_populated_chain_is_valid() {
        let (_, chain) = populated_chain();
        assert!(is_valid_chain(&chain));
    }

    #[test]
    fn test_empty_chain_is_invalid() {
        let chain = Blockchain::default();
        assert!(!is_valid_chain(&chain));
        assert_eq!(validate_chain(&chain).unwrap_err(), ChainError::EmptyChain);
    }

    #[test]
    fn test_genesis_with_transaction_is_invalid() {
        let alice = KeyPair::generate();
        let genesis = Block::new(vec![Transaction::new(&alice, "r", 1)], None);
        assert!(is_valid_block(&genesis));
        let chain = Blockchain { blocks: vec![genesis] };
        assert!(matches!(validate_chain(&chain), Err(ChainError::InvalidGenesis(_))));
    }

    #[test]
    fn test_genesis_with_previous_hash_is_invalid() {
        let genesis = Block::new(Vec::new(), Some(digest("before genesis")));
        let chain = Blockchain { blocks: vec![genesis] };
        assert!(!is_valid_chain(&chain));
    }

    #[test]
    fn test_mismatched_linkage_is_invalid() {
        let mut chain = Blockchain::new();
        let orphan = Block::new(Vec::new(), Some(digest("not the genesis")));
        assert!(is_valid_block(&orphan));
        chain.blocks.push(orphan);

        match validate_chain(&chain) {
            Err(ChainError::InvalidBlockLinkage { height, expected, .. }) => {
                assert_eq!(height, 1);
                assert_eq!(expected, chain.blocks[0].hash);
            }
            other => panic!("Expected InvalidBlockLinkage, got {:?}", other),
        }
    }

    #[test]
    fn test_null_linkage_after_genesis_is_invalid() {
        let mut chain = Blockchain::new();
        chain.blocks.push(Block::new(Vec::new(), None));
        assert!(is_valid_block(&chain.blocks[1]));
        assert!(!is_valid_chain(&chain));
    }

    #[test]
    fn test_invalid_transaction_deep_in_chain() {
        let (alice, mut chain) = populated_chain();
        let mut bad = Transaction::new(&alice, "r", 1);
        bad.amount = -1;
        let head_hash = chain.head().unwrap().hash.clone();
        chain.blocks.push(Block::new(vec![bad], Some(head_hash)));

        match validate_chain(&chain) {
            Err(ChainError::InvalidBlock { height, .. }) => assert_eq!(height, 3),
            other => panic!("Expected InvalidBlock, got {:?}", other),
        }
    }

    #[test]
    fn test_rehashed_middle_block_breaks_linkage() {
        let (_, mut chain) = populated_chain();
        chain.blocks[1].calculate_hash(7);
        assert!(is_valid_block(&chain.blocks[1]));
        match validate_chain(&chain) {
            Err(ChainError::InvalidBlockLinkage { height, .. }) => assert_eq!(height, 2),
            other => panic!("Expected InvalidBlockLinkage, got {:?}", other),
        }
    }
}
