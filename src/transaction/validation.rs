/// Validation logic for transactions separated from type definitions
use crate::crypto;
use crate::error::ChainError;
use crate::transaction::types::Transaction;
use tracing::debug;

/// Checks the amount, then the signature over `source ++ recipient ++ amount`
/// against the identity named in `source`. Like [`is_valid_transaction`], but
/// reports why a transaction was rejected.
pub fn validate_transaction(transaction: &Transaction) -> Result<(), ChainError> {
    if transaction.amount < 0 {
        return Err(ChainError::InvalidTransaction(format!(
            "Amount cannot be negative: {}",
            transaction.amount
        )));
    }

    crypto::verify_signature(
        &transaction.source,
        &transaction.signable_message(),
        &transaction.signature,
    )
    .map_err(|e| ChainError::InvalidTransaction(e.to_string()))
}

/// `true` when the amount is non-negative and the signature verifies.
pub fn is_valid_transaction(transaction: &Transaction) -> bool {
    match validate_transaction(transaction) {
        Ok(()) => true,
        Err(e) => {
            debug!("Rejected transaction from {}: {}", transaction.source, e);
            false
        }
    }
}
