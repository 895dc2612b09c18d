//! Portable signature artifact format.
//!
//! An artifact is the standalone record a verifying party receives
//! out-of-band alongside the original file: the claimed signer's
//! username and the base64 signature text. It is produced for download,
//! consumed on import, and never stored server-side.

use serde::{Deserialize, Serialize};

use crate::error::{CryptoError, CryptoResult};

/// The `{signer_username, signature}` record exchanged out-of-band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureArtifact {
    /// Claimed signer identity.
    pub signer_username: String,
    /// Detached signature, base64 text.
    pub signature: String,
}

impl SignatureArtifact {
    pub fn new(signer_username: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            signer_username: signer_username.into(),
            signature: signature.into(),
        }
    }

    /// Encode as pretty-printed JSON for download.
    pub fn encode(&self) -> CryptoResult<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| CryptoError::MalformedArtifact(e.to_string()))
    }

    /// Decode an imported artifact.
    ///
    /// Fails with [`CryptoError::MalformedArtifact`] when the bytes are
    /// not valid JSON or a required field is absent.
    pub fn decode(bytes: &[u8]) -> CryptoResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| CryptoError::MalformedArtifact(e.to_string()))
    }
}
