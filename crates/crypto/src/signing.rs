//! Detached document signing.
//!
//! A signature is produced over the SHA-256 digest of the exact document
//! bytes, with Ed25519. Signing is deterministic: the same key and the
//! same bytes always yield the same signature, and a signature over
//! different bytes is rejected by the verifier with overwhelming
//! probability.

use ed25519_dalek::{Signer, SigningKey};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::error::{CryptoError, CryptoResult};
use crate::keypair::SECRET_KEY_LEN;

/// Ed25519 signature length in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// Sign message bytes with a decrypted private key, returning the raw
/// 64-byte signature.
///
/// The private key bytes are copied into a fixed array that is zeroized
/// before returning; the caller remains responsible for zeroizing its
/// own copy.
pub fn sign_detached(private_key: &[u8], message: &[u8]) -> CryptoResult<[u8; SIGNATURE_LEN]> {
    if private_key.len() != SECRET_KEY_LEN {
        return Err(CryptoError::InvalidPrivateKey(format!(
            "expected {} bytes, got {}",
            SECRET_KEY_LEN,
            private_key.len()
        )));
    }

    let mut key_bytes = [0u8; SECRET_KEY_LEN];
    key_bytes.copy_from_slice(private_key);
    let signing_key = SigningKey::from_bytes(&key_bytes);
    key_bytes.zeroize();

    let digest: [u8; 32] = Sha256::digest(message).into();
    let signature = signing_key.sign(&digest);

    Ok(signature.to_bytes())
}
