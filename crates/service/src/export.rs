//! Signature artifact export.
//!
//! Produces the downloadable artifact for a signed document: the
//! pretty-printed JSON record named after the original file.

use std::path::Path;

use crate::error::{ServiceError, ServiceResult};
use inkseal_crypto::SignatureArtifact;

/// MIME type of the exported artifact.
pub const ARTIFACT_CONTENT_TYPE: &str = "application/json";

/// A downloadable signature artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureDownload {
    /// Download filename, derived from the original document name.
    pub filename: String,
    /// Always [`ARTIFACT_CONTENT_TYPE`].
    pub content_type: &'static str,
    /// Exact [`SignatureArtifact`] encoding.
    pub bytes: Vec<u8>,
}

/// Build the downloadable artifact for a signed document.
///
/// `signature` is the document's signature slot; exporting an unsigned
/// document is an error. The filename is the original stem with spaces
/// replaced by underscores and a `.json` extension.
pub fn export_signature(
    owner_username: &str,
    original_filename: &str,
    signature: Option<&str>,
) -> ServiceResult<SignatureDownload> {
    let signature = signature.ok_or(ServiceError::NotSigned)?;

    let artifact = SignatureArtifact::new(owner_username, signature);
    let bytes = artifact.encode()?;

    Ok(SignatureDownload {
        filename: artifact_filename(original_filename),
        content_type: ARTIFACT_CONTENT_TYPE,
        bytes,
    })
}

fn artifact_filename(original: &str) -> String {
    let stem = Path::new(original)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(original);
    format!("{}.json", stem.replace(' ', "_"))
}
