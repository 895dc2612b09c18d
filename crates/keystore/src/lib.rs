//! Persistent per-user key-pair storage for Inkseal.
//!
//! Exactly one live key pair per user, with atomic replace on rotation.

pub mod store;

pub use store::{KeyPairRecord, KeyPairStore, StoreError, StoreResult};
