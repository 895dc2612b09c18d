//! At-rest encryption of private key material.
//!
//! Private keys are stored as opaque text ciphertext. The symmetric key
//! is derived once, at construction, as the SHA-256 digest of a
//! long-lived process secret; the derivation is deterministic across
//! restarts so previously encrypted keys remain decryptable as long as
//! the secret is unchanged.
//!
//! Wire form: `base64(nonce || ciphertext || tag)` with a fresh random
//! 96-bit nonce per encryption. ChaCha20-Poly1305 provides both
//! confidentiality and integrity; any tampering, truncation, or
//! encryption under a different secret surfaces as
//! [`CryptoError::InvalidCiphertext`].

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::error::{CryptoError, CryptoResult};
use inkseal_core::ProcessSecret;

/// Nonce size for ChaCha20-Poly1305 (96 bits / 12 bytes).
const NONCE_SIZE: usize = 12;

/// Symmetric codec for private key material at rest.
///
/// Construct one per process from the configured [`ProcessSecret`] and
/// share it; the derived key is immutable for the codec's lifetime.
pub struct KeyCodec {
    cipher: ChaCha20Poly1305,
}

impl KeyCodec {
    /// Derive the symmetric key from the process secret and build the codec.
    ///
    /// Same secret, same key: the derivation is a plain SHA-256 digest
    /// of the secret bytes, so restarts with an unchanged secret can
    /// decrypt everything encrypted before.
    pub fn new(secret: &ProcessSecret) -> Self {
        let digest: [u8; 32] = Sha256::digest(secret.as_bytes()).into();
        let key = chacha20poly1305::Key::from_slice(&digest);
        Self {
            cipher: ChaCha20Poly1305::new(key),
        }
    }

    /// Encrypt plaintext key material into portable text.
    pub fn encrypt(&self, plaintext: &[u8]) -> CryptoResult<String> {
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| CryptoError::Encryption(e.to_string()))?;

        let mut blob = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&ciphertext);

        Ok(BASE64.encode(blob))
    }

    /// Decrypt text ciphertext back into key material.
    ///
    /// Fails with [`CryptoError::InvalidCiphertext`] if the input is not
    /// valid base64, is too short to contain a nonce, or fails AEAD
    /// authentication (tampering, or a changed process secret). The
    /// caller must treat this as fatal for the affected key pair.
    pub fn decrypt(&self, ciphertext: &str) -> CryptoResult<Vec<u8>> {
        let blob = BASE64
            .decode(ciphertext)
            .map_err(|e| CryptoError::InvalidCiphertext(format!("not valid base64: {e}")))?;

        if blob.len() <= NONCE_SIZE {
            return Err(CryptoError::InvalidCiphertext(
                "ciphertext shorter than nonce".to_string(),
            ));
        }

        let (nonce_bytes, ct) = blob.split_at(NONCE_SIZE);
        let nonce = Nonce::from_slice(nonce_bytes);

        self.cipher
            .decrypt(nonce, ct)
            .map_err(|_| CryptoError::InvalidCiphertext("authentication failed".to_string()))
    }
}
