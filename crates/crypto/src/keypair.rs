//! Per-user signing key-pair generation.

use ed25519_dalek::SigningKey;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Ed25519 secret key length in bytes.
pub const SECRET_KEY_LEN: usize = 32;

/// Ed25519 public key length in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// A freshly generated key pair, before the private half is encrypted
/// for storage.
///
/// The private key bytes are zeroized on drop. Callers hand the private
/// bytes to [`crate::KeyCodec::encrypt`] and must not hold them longer
/// than the provisioning operation.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct GeneratedKeyPair {
    /// Raw Ed25519 secret key (32 bytes).
    pub private_key: [u8; SECRET_KEY_LEN],
    /// Raw Ed25519 verifying key (32 bytes).
    #[zeroize(skip)]
    pub public_key: [u8; PUBLIC_KEY_LEN],
}

impl GeneratedKeyPair {
    /// Generate a new key pair from the OS CSPRNG.
    ///
    /// Generation does not fail under normal operation; an unavailable
    /// entropy source aborts the process, which is the correct outcome
    /// for a fatal configuration error.
    pub fn generate() -> Self {
        let mut secret_bytes = [0u8; SECRET_KEY_LEN];
        rand::rngs::OsRng.fill_bytes(&mut secret_bytes);

        let signing_key = SigningKey::from_bytes(&secret_bytes);
        let public_key = signing_key.verifying_key().to_bytes();

        Self {
            private_key: secret_bytes,
            public_key,
        }
    }

    /// Hex SHA-256 fingerprint of the public key, for logging and audit
    /// trails that must not contain the key itself.
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.public_key)
    }
}

/// Hex SHA-256 fingerprint of arbitrary public key bytes.
pub fn fingerprint(public_key: &[u8]) -> String {
    hex::encode(Sha256::digest(public_key))
}
