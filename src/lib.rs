//! Chainguard - structural and cryptographic validation for a linked chain
//! of signed transactions
//!
//! # Architecture
//!
//! ## Core Blockchain
//! - [`blockchain`] - Block and chain types, validation, and the tampering helper
//! - [`transaction`] - Transaction type, signing message, and validation
//!
//! ## Cryptography
//! - [`crypto`] - SHA-512 digests and secp256k1 signatures
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//!
//! The boolean predicates [`is_valid_transaction`], [`is_valid_block`] and
//! [`is_valid_chain`] never panic; their `validate_*` counterparts return the
//! reason a value was rejected.

#![forbid(unsafe_code)]

// ============================================================================
// Core Blockchain
// ============================================================================
pub mod blockchain;
pub mod transaction;

// ============================================================================
// Cryptography
// ============================================================================
pub mod crypto;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;

pub use blockchain::{
    break_chain, is_valid_block, is_valid_chain, validate_block, validate_chain, Block,
    Blockchain,
};
pub use error::{ChainError, Result};
pub use transaction::{is_valid_transaction, validate_transaction, Transaction};
