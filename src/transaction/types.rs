/// Transaction types for Chainguard
use crate::crypto::KeyPair;
use serde::{Deserialize, Serialize};

/// A signed transfer of `amount` from `source` to `recipient`.
///
/// `source` and `recipient` are identities (hex compressed public keys).
/// Fields stay public: a transaction is plain data handed over by whatever
/// produced it, and tampering with it must be detectable, not prevented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub source: String,
    pub recipient: String,
    pub amount: i64,
    pub signature: String,
}

impl Transaction {
    /// Creates a transaction signed by `signer`, whose identity becomes the source.
    pub fn new(signer: &KeyPair, recipient: impl Into<String>, amount: i64) -> Self {
        let mut tx = Transaction {
            source: signer.identity(),
            recipient: recipient.into(),
            amount,
            signature: String::new(),
        };
        tx.signature = signer.sign(&tx.signable_message());
        tx
    }

    /// `source ++ recipient ++ amount`, amount in base 10.
    pub fn signable_message(&self) -> Vec<u8> {
        format!("{}{}{}", self.source, self.recipient, self.amount).into_bytes()
    }

    /// Compact JSON with keys in declaration order; this is the form that
    /// enters a block's digest. Serialization of these fields is infallible.
    pub fn canonical_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
