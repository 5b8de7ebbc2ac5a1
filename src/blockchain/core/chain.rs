use crate::crypto::digest;
use crate::error::ChainError;
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};

/// Rendering of an absent previous hash inside the digest input.
pub const NULL_HASH_LITERAL: &str = "null";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub transactions: Vec<Transaction>,
    /// An absent `previousHash` reads as null, same as an explicit null.
    pub previous_hash: Option<String>,
    pub nonce: u64,
    pub hash: String,
}

impl Block {
    /// Builds a block with nonce 0 and a freshly computed hash.
    pub fn new(transactions: Vec<Transaction>, previous_hash: Option<String>) -> Self {
        let mut block = Block {
            transactions,
            previous_hash,
            nonce: 0,
            hash: String::new(),
        };
        block.calculate_hash(0);
        block
    }

    /// Transactions joined by `,`, each as its canonical string. Empty when
    /// there are no transactions.
    pub fn transactions_string(transactions: &[Transaction]) -> String {
        transactions
            .iter()
            .map(Transaction::canonical_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// `transactions ++ previous_hash ++ nonce`, the exact bytes that get digested.
    pub fn hash_input(&self) -> String {
        format!(
            "{}{}{}",
            Self::transactions_string(&self.transactions),
            self.previous_hash.as_deref().unwrap_or(NULL_HASH_LITERAL),
            self.nonce
        )
    }

    /// Digest of the current contents. Does not touch `hash`.
    pub fn compute_hash(&self) -> String {
        digest(self.hash_input())
    }

    /// Sets the nonce and recomputes the stored hash.
    pub fn calculate_hash(&mut self, nonce: u64) {
        self.nonce = nonce;
        self.hash = self.compute_hash();
    }

    pub fn is_genesis_shaped(&self) -> bool {
        self.previous_hash.is_none() && self.transactions.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blockchain {
    pub blocks: Vec<Block>,
}

impl Blockchain {
    /// A chain holding only a genesis block.
    pub fn new() -> Self {
        Blockchain {
            blocks: vec![Block::new(Vec::new(), None)],
        }
    }

    pub fn head(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Appends a block of `transactions` linked to the current head and returns it.
    pub fn add_transactions(&mut self, transactions: Vec<Transaction>) -> Result<&Block, ChainError> {
        let previous_hash = self
            .head()
            .map(|b| b.hash.clone())
            .ok_or(ChainError::EmptyChain)?;
        self.blocks.push(Block::new(transactions, Some(previous_hash)));
        self.head().ok_or(ChainError::EmptyChain)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self, ChainError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ChainError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
