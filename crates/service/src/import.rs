//! Signature artifact import and verification.
//!
//! A verifying party submits two byte streams: the original file and a
//! signature artifact. The outcome is one of five cases the caller
//! must present distinctly; a cryptographic mismatch and a malformed
//! artifact are different answers, and neither is a crash.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::info;

use crate::error::ServiceResult;
use inkseal_crypto::{verify_detached, CryptoError, SignatureArtifact};
use inkseal_keystore::{KeyPairStore, StoreError};

/// Lookup seam into the external account system.
///
/// Verification only knows a claimed username; the directory says
/// whether such an account exists at all, which keeps "unknown signer"
/// distinct from "signer without a key pair".
pub trait UserDirectory {
    /// Resolve a username to the account's user id, if the account exists.
    fn resolve(&self, username: &str) -> Option<String>;
}

/// Simple map-backed directory for tests and embedded use.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    users: std::collections::HashMap<String, String>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, username: impl Into<String>, user_id: impl Into<String>) {
        self.users.insert(username.into(), user_id.into());
    }
}

impl UserDirectory for InMemoryDirectory {
    fn resolve(&self, username: &str) -> Option<String> {
        self.users.get(username).cloned()
    }
}

/// Result of verifying an imported artifact against file bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Signature matches; the file was signed by this user's live key.
    Valid { signer: String },
    /// Well-formed signature that does not match the file and key.
    Invalid,
    /// The artifact bytes are not a parseable artifact.
    MalformedArtifact(String),
    /// The claimed signer does not exist in the account system.
    SignerNotFound(String),
    /// The signer exists but has no key pair provisioned.
    NoKeyPairForSigner(String),
}

/// Verify an imported signature artifact against the original file bytes.
///
/// Expected negative outcomes are returned as [`VerificationOutcome`]
/// variants. An `Err` is reserved for conditions the verifying party
/// cannot act on, such as corrupt key material in the store.
pub fn verify_artifact(
    directory: &dyn UserDirectory,
    store: &KeyPairStore,
    file_bytes: &[u8],
    artifact_bytes: &[u8],
) -> ServiceResult<VerificationOutcome> {
    let artifact = match SignatureArtifact::decode(artifact_bytes) {
        Ok(artifact) => artifact,
        Err(CryptoError::MalformedArtifact(reason)) => {
            return Ok(VerificationOutcome::MalformedArtifact(reason));
        }
        Err(other) => return Err(other.into()),
    };

    let username = artifact.signer_username.clone();

    let user_id = match directory.resolve(&username) {
        Some(user_id) => user_id,
        None => return Ok(VerificationOutcome::SignerNotFound(username)),
    };

    let record = match store.get_by_user(&user_id) {
        Ok(record) => record,
        Err(StoreError::NotFound(_)) => {
            return Ok(VerificationOutcome::NoKeyPairForSigner(username));
        }
        Err(other) => return Err(other.into()),
    };

    let signature = match BASE64.decode(artifact.signature.as_bytes()) {
        Ok(signature) => signature,
        Err(e) => {
            return Ok(VerificationOutcome::MalformedArtifact(format!(
                "signature is not valid base64: {e}"
            )));
        }
    };

    // Stored public keys are written by provisioning; failing to decode
    // one is store corruption, not a caller mistake.
    let public_key = BASE64
        .decode(record.public_key.as_bytes())
        .map_err(|e| CryptoError::InvalidPublicKey(format!("stored key not base64: {e}")))?;

    let valid = match verify_detached(&public_key, file_bytes, &signature) {
        Ok(valid) => valid,
        // A signature of the wrong length came from the artifact.
        Err(CryptoError::InvalidSignatureEncoding(reason)) => {
            return Ok(VerificationOutcome::MalformedArtifact(reason));
        }
        Err(other) => return Err(other.into()),
    };

    info!(signer = %username, valid, "Verified signature artifact");

    if valid {
        Ok(VerificationOutcome::Valid { signer: username })
    } else {
        Ok(VerificationOutcome::Invalid)
    }
}
