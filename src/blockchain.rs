// Thin re-export module: implementation is in `blockchain/core.rs`, split into
// chain types, validation, and the tampering helper used by tests.

pub mod core;
pub use core::*;
