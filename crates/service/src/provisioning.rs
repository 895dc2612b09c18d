//! Key-pair provisioning and rotation.
//!
//! Account creation calls [`provision_keypair`] synchronously before the
//! account becomes usable for signing; if provisioning fails, account
//! creation fails with it. The same path serves explicit rotation, and
//! [`rotate_batch`] runs it over a set of users for administrative bulk
//! actions.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::{error, info};

use crate::error::ServiceResult;
use inkseal_crypto::{GeneratedKeyPair, KeyCodec};
use inkseal_keystore::{KeyPairRecord, KeyPairStore};

/// A user as the external account system identifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub user_id: String,
    pub username: String,
}

impl UserRef {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
        }
    }
}

/// Outcome of a bulk rotation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RotationReport {
    pub succeeded: u64,
    pub failed: u64,
}

/// Generate a key pair for a user, encrypt the private half, and store
/// both, atomically replacing any existing pair.
///
/// The decrypted private key never leaves this function; the generated
/// pair is zeroized on drop.
pub fn provision_keypair(
    store: &mut KeyPairStore,
    codec: &KeyCodec,
    user: &UserRef,
) -> ServiceResult<KeyPairRecord> {
    let pair = GeneratedKeyPair::generate();
    let encrypted_private_key = codec.encrypt(&pair.private_key)?;
    let public_key = BASE64.encode(pair.public_key);

    let record = store.upsert(
        &user.user_id,
        &user.username,
        &public_key,
        &encrypted_private_key,
    )?;

    info!(
        user_id = %user.user_id,
        username = %user.username,
        fingerprint = %pair.fingerprint(),
        "Provisioned key pair"
    );

    Ok(record)
}

/// Rotate key pairs for a set of users.
///
/// Each rotation is independent: one user's failure is logged and
/// counted, and never rolls back or aborts the others.
pub fn rotate_batch(store: &mut KeyPairStore, codec: &KeyCodec, users: &[UserRef]) -> RotationReport {
    let mut report = RotationReport::default();

    for user in users {
        match provision_keypair(store, codec, user) {
            Ok(_) => report.succeeded += 1,
            Err(e) => {
                error!(
                    user_id = %user.user_id,
                    username = %user.username,
                    error = %e,
                    "Key rotation failed"
                );
                report.failed += 1;
            }
        }
    }

    info!(
        succeeded = report.succeeded,
        failed = report.failed,
        "Bulk key rotation finished"
    );

    report
}
