//! Cryptographic primitives for the Inkseal document signing system.
//!
//! This crate provides the signing core: per-user key-pair generation,
//! at-rest encryption of private keys, detached document signing,
//! signature verification, and the portable signature artifact format.
//!
//! # Core Capabilities
//!
//! - **Key Management**: Ed25519 key-pair generation from the OS CSPRNG
//! - **At-Rest Encryption**: ChaCha20-Poly1305 over private key material,
//!   keyed from a long-lived process secret
//! - **Digital Signatures**: deterministic Ed25519 signatures over the
//!   SHA-256 digest of the document bytes
//! - **Signature Artifacts**: portable `{signer_username, signature}`
//!   JSON records for out-of-band verification
//!
//! # Security Principles
//!
//! - Never roll custom cryptographic primitives
//! - Decrypted private keys exist only transiently and are zeroized
//! - Secrets must never be logged or hardcoded
//! - A cryptographically invalid signature is a negative verification
//!   result, not an error; malformed inputs are typed errors

pub mod artifact;
pub mod error;
pub mod keycodec;
pub mod keypair;
pub mod signing;
pub mod verify;

pub use artifact::SignatureArtifact;
pub use error::{CryptoError, CryptoResult};
pub use keycodec::KeyCodec;
pub use keypair::{GeneratedKeyPair, PUBLIC_KEY_LEN, SECRET_KEY_LEN};
pub use signing::{sign_detached, SIGNATURE_LEN};
pub use verify::verify_detached;
