//! Error types for Inkseal signing workflows.

use thiserror::Error;

/// Errors that can occur in signing workflows.
///
/// The request-handling layer maps each variant to a distinct
/// user-facing message; variants are deliberately not collapsed.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The user exists but has no key pair provisioned.
    #[error("No key pair provisioned for user: {0}")]
    NoKeyPair(String),

    /// Export was requested for a document that has not been signed.
    #[error("Document has not been signed yet")]
    NotSigned,

    /// Key store failure.
    #[error("Key store error: {0}")]
    Store(#[from] inkseal_keystore::StoreError),

    /// Cryptographic failure, including the fatal undecryptable private
    /// key case, which must reach the caller unchanged.
    #[error("Cryptographic error: {0}")]
    Crypto(#[from] inkseal_crypto::CryptoError),
}

/// Result type for signing workflows.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
