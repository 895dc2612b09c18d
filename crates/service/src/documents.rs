//! Document signing workflow.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::info;
use zeroize::Zeroize;

use crate::error::{ServiceError, ServiceResult};
use inkseal_crypto::{sign_detached, KeyCodec};
use inkseal_keystore::{KeyPairStore, StoreError};

/// Sign document bytes on behalf of a user, returning the base64
/// signature text for the document's signature slot.
///
/// The stored private key is decrypted, used for the one signing
/// operation, and zeroized. An undecryptable private key
/// (`InvalidCiphertext`) is fatal and propagates untouched; it is never
/// retried. Re-signing a document simply produces a fresh value for the
/// caller to overwrite the slot with.
pub fn sign_document(
    store: &KeyPairStore,
    codec: &KeyCodec,
    user_id: &str,
    content: &[u8],
) -> ServiceResult<String> {
    let record = store.get_by_user(user_id).map_err(|e| match e {
        StoreError::NotFound(_) => ServiceError::NoKeyPair(user_id.to_string()),
        other => ServiceError::Store(other),
    })?;

    let mut private_key = codec.decrypt(&record.private_key_enc)?;
    let signature = sign_detached(&private_key, content);
    private_key.zeroize();
    let signature = signature?;

    info!(
        user_id = %user_id,
        content_len = content.len(),
        "Signed document"
    );

    Ok(BASE64.encode(signature))
}
