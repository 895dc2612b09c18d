//! Error types for Inkseal cryptographic operations.

use thiserror::Error;

/// Errors that can occur in cryptographic operations.
///
/// A signature that simply does not match is *not* an error; see
/// [`crate::verify::verify_detached`], which returns `false` for that
/// case. These variants cover failures the caller must handle
/// distinctly.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Ciphertext was tampered with, malformed, or encrypted under a
    /// different process secret. Fatal for the affected key pair; must
    /// be surfaced, never swallowed.
    #[error("Invalid ciphertext: {0}")]
    InvalidCiphertext(String),

    /// AEAD encryption failed. Does not happen under normal operation;
    /// indicates a fatal configuration problem.
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// Signature artifact is not parseable or is missing required fields.
    #[error("Malformed signature artifact: {0}")]
    MalformedArtifact(String),

    /// Public key bytes are not a valid key for the signing algorithm.
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Private key bytes are not a valid key for the signing algorithm.
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Signature bytes are not a valid signature encoding. Distinct from
    /// a well-formed signature that fails verification.
    #[error("Invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),
}

/// Result type for cryptographic operations.
pub type CryptoResult<T> = std::result::Result<T, CryptoError>;
