//! Cryptographic primitives for Chainguard
//!
//! Identities are hex-encoded compressed secp256k1 public keys and
//! signatures are hex-encoded compact ECDSA signatures over the SHA-256
//! digest of the message. Block digests are SHA-512, rendered as lowercase hex.

use crate::error::ChainError;
use once_cell::sync::Lazy;
use rand::rngs::OsRng;
use secp256k1::{
    constants::{COMPACT_SIGNATURE_SIZE, PUBLIC_KEY_SIZE, SECRET_KEY_SIZE},
    ecdsa::Signature,
    All, Message, PublicKey, Secp256k1, SecretKey,
};
use sha2::{Digest, Sha256, Sha512};

/// A thread-safe, lazily initialized Secp256k1 context.
static SECP256K1_CONTEXT: Lazy<Secp256k1<All>> = Lazy::new(Secp256k1::new);

/// Length of a hex digest produced by [`digest`].
pub const DIGEST_HEX_LEN: usize = 128;

/// SHA-512 of the input, as a lowercase hex string.
pub fn digest(data: impl AsRef<[u8]>) -> String {
    hex::encode(Sha512::digest(data.as_ref()))
}

fn message_for(message: &[u8]) -> Message {
    let hashed: [u8; 32] = Sha256::digest(message).into();
    Message::from_digest(hashed)
}

#[derive(Debug, Clone)]
pub struct KeyPair {
    pub secret_key: SecretKey,
    pub public_key: PublicKey,
}

impl KeyPair {
    /// Generates a new random KeyPair using the OS random number generator.
    pub fn generate() -> Self {
        let secret_key = SecretKey::new(&mut OsRng);
        Self::from_secret_key(secret_key)
    }

    pub fn from_secret_key(secret_key: SecretKey) -> Self {
        let public_key = PublicKey::from_secret_key(&SECP256K1_CONTEXT, &secret_key);
        KeyPair {
            secret_key,
            public_key,
        }
    }

    /// Creates a KeyPair from a hex-encoded 32-byte secret key.
    pub fn from_secret_hex(secret_hex: &str) -> Result<Self, ChainError> {
        let bytes = hex::decode(secret_hex)
            .map_err(|e| ChainError::CryptoError(format!("Invalid hex secret key: {}", e)))?;
        if bytes.len() != SECRET_KEY_SIZE {
            return Err(ChainError::CryptoError(format!(
                "Secret key must be {} bytes, got {}",
                SECRET_KEY_SIZE,
                bytes.len()
            )));
        }
        let secret_key = SecretKey::from_slice(&bytes)
            .map_err(|e| ChainError::CryptoError(format!("Invalid secret key bytes: {}", e)))?;
        Ok(Self::from_secret_key(secret_key))
    }

    pub fn secret_hex(&self) -> String {
        hex::encode(self.secret_key.secret_bytes())
    }

    /// The identity other parties use to verify this key's signatures.
    pub fn identity(&self) -> String {
        hex::encode(self.public_key.serialize())
    }

    /// Signs a message (hashed with SHA-256 first) and returns the hex compact signature.
    pub fn sign(&self, message: &[u8]) -> String {
        let signature = SECP256K1_CONTEXT.sign_ecdsa(&message_for(message), &self.secret_key);
        hex::encode(signature.serialize_compact())
    }
}

/// Verifies a hex signature over `message` against a hex identity.
pub fn verify_signature(identity: &str, message: &[u8], signature: &str) -> Result<(), ChainError> {
    let public_key_bytes = hex::decode(identity)
        .map_err(|e| ChainError::CryptoError(format!("Invalid hex identity: {}", e)))?;
    if public_key_bytes.len() != PUBLIC_KEY_SIZE {
        return Err(ChainError::CryptoError(format!(
            "Public key must be exactly {} bytes (compressed), got {}",
            PUBLIC_KEY_SIZE,
            public_key_bytes.len()
        )));
    }

    let signature_bytes = hex::decode(signature)
        .map_err(|e| ChainError::CryptoError(format!("Invalid hex signature: {}", e)))?;
    if signature_bytes.len() != COMPACT_SIGNATURE_SIZE {
        return Err(ChainError::CryptoError(format!(
            "Signature must be exactly {} bytes (compact), got {}",
            COMPACT_SIGNATURE_SIZE,
            signature_bytes.len()
        )));
    }

    let public_key = PublicKey::from_slice(&public_key_bytes)
        .map_err(|e| ChainError::CryptoError(format!("Invalid public key: {}", e)))?;
    let signature = Signature::from_compact(&signature_bytes)
        .map_err(|e| ChainError::CryptoError(format!("Invalid signature: {}", e)))?;

    SECP256K1_CONTEXT
        .verify_ecdsa(&message_for(message), &signature, &public_key)
        .map_err(|_| ChainError::CryptoError("Signature verification failed".to_string()))
}

/// Boolean form of [`verify_signature`]. Malformed key material is `false`.
pub fn verify(identity: &str, message: &[u8], signature: &str) -> bool {
    verify_signature(identity, message, signature).is_ok()
}
