//! Error types for Chainguard

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("Blockchain has no blocks")]
    EmptyChain,
    #[error("Invalid genesis block: {0}")]
    InvalidGenesis(String),
    #[error("Invalid block linkage at height {height}: expected previous hash {expected}, got {actual}")]
    InvalidBlockLinkage {
        height: usize,
        expected: String,
        actual: String,
    },
    #[error("Block hash mismatch: stored {stored}, computed {computed}")]
    HashMismatch { stored: String, computed: String },
    #[error("Invalid block at height {height}: {source}")]
    InvalidBlock {
        height: usize,
        #[source]
        source: Box<ChainError>,
    },
    #[error("Invalid transaction at index {index}: {source}")]
    InvalidTransactionAt {
        index: usize,
        #[source]
        source: Box<ChainError>,
    },
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),
    #[error("Cryptographic error: {0}")]
    CryptoError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<std::io::Error> for ChainError {
    fn from(err: std::io::Error) -> Self {
        ChainError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ChainError {
    fn from(err: serde_json::Error) -> Self {
        ChainError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for ChainError {
    fn from(err: toml::de::Error) -> Self {
        ChainError::ConfigError(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ChainError>;
