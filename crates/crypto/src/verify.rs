//! Detached signature verification.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use sha2::{Digest, Sha256};

use crate::error::{CryptoError, CryptoResult};
use crate::keypair::PUBLIC_KEY_LEN;
use crate::signing::SIGNATURE_LEN;

/// Verify a detached signature over message bytes against a public key.
///
/// Returns `Ok(false)` for a well-formed signature that does not match
/// the message and key; this is the expected negative outcome, never an
/// error. Errors are reserved for malformed inputs: a public key or
/// signature of the wrong length, or public key bytes that are not a
/// valid curve point.
pub fn verify_detached(public_key: &[u8], message: &[u8], signature: &[u8]) -> CryptoResult<bool> {
    let key_bytes: [u8; PUBLIC_KEY_LEN] = public_key.try_into().map_err(|_| {
        CryptoError::InvalidPublicKey(format!(
            "expected {} bytes, got {}",
            PUBLIC_KEY_LEN,
            public_key.len()
        ))
    })?;

    let verifying_key = VerifyingKey::from_bytes(&key_bytes)
        .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;

    let sig_bytes: [u8; SIGNATURE_LEN] = signature.try_into().map_err(|_| {
        CryptoError::InvalidSignatureEncoding(format!(
            "expected {} bytes, got {}",
            SIGNATURE_LEN,
            signature.len()
        ))
    })?;
    let signature = Signature::from_bytes(&sig_bytes);

    let digest: [u8; 32] = Sha256::digest(message).into();
    Ok(verifying_key.verify(&digest, &signature).is_ok())
}
