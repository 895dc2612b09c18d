//! Key rotation and persistence scenarios.

use inkseal_core::ProcessSecret;
use inkseal_crypto::{CryptoError, KeyCodec, SignatureArtifact};
use inkseal_keystore::KeyPairStore;
use inkseal_service::{
    provision_keypair, rotate_batch, sign_document, verify_artifact, InMemoryDirectory,
    ServiceError, UserRef, VerificationOutcome,
};

use crate::test_utils::{temp_db_path, test_codec};

#[test]
fn test_rotation_invalidates_old_signatures() {
    let mut directory = InMemoryDirectory::new();
    directory.insert("alice", "user-alice");

    let mut store = KeyPairStore::open_in_memory().unwrap();
    let codec = test_codec();
    let alice = UserRef::new("user-alice", "alice");

    provision_keypair(&mut store, &codec, &alice).unwrap();
    let document = b"signed before rotation";
    let signature = sign_document(&store, &codec, "user-alice", document).unwrap();
    let artifact = SignatureArtifact::new("alice", signature.as_str()).encode().unwrap();

    // Verifiable before rotation, invalid after: the live public key
    // changed and no history is archived.
    assert_eq!(
        verify_artifact(&directory, &store, document, &artifact).unwrap(),
        VerificationOutcome::Valid {
            signer: "alice".to_string()
        }
    );

    provision_keypair(&mut store, &codec, &alice).unwrap();

    assert_eq!(
        verify_artifact(&directory, &store, document, &artifact).unwrap(),
        VerificationOutcome::Invalid
    );

    // A fresh signature under the new key verifies.
    let new_signature = sign_document(&store, &codec, "user-alice", document).unwrap();
    let new_artifact = SignatureArtifact::new("alice", new_signature.as_str()).encode().unwrap();
    assert_eq!(
        verify_artifact(&directory, &store, document, &new_artifact).unwrap(),
        VerificationOutcome::Valid {
            signer: "alice".to_string()
        }
    );
}

#[test]
fn test_rotation_survives_store_reopen() {
    let db_path = temp_db_path("rotation_reopen");
    let codec = test_codec();
    let alice = UserRef::new("user-alice", "alice");

    let first_public = {
        let mut store = KeyPairStore::open(&db_path).unwrap();
        provision_keypair(&mut store, &codec, &alice).unwrap().public_key
    };

    // Rotate in a second "process", then reopen and check exclusivity.
    {
        let mut store = KeyPairStore::open(&db_path).unwrap();
        let rotated = provision_keypair(&mut store, &codec, &alice).unwrap();
        assert_ne!(rotated.public_key, first_public);
    }

    let store = KeyPairStore::open(&db_path).unwrap();
    assert_eq!(store.count().unwrap(), 1);
    assert_ne!(store.get_by_user("user-alice").unwrap().public_key, first_public);

    let _ = std::fs::remove_file(&db_path);
}

#[test]
fn test_bulk_rotation_reports_per_batch() {
    let mut store = KeyPairStore::open_in_memory().unwrap();
    let codec = test_codec();

    let users: Vec<UserRef> = (0..5)
        .map(|i| UserRef::new(format!("user-{i}"), format!("user{i}")))
        .collect();

    // Initial provisioning and a follow-up rotation both succeed for all.
    let report = rotate_batch(&mut store, &codec, &users);
    assert_eq!(report.succeeded, 5);
    assert_eq!(report.failed, 0);

    let before: Vec<String> = users
        .iter()
        .map(|u| store.get_by_user(&u.user_id).unwrap().public_key)
        .collect();

    let report = rotate_batch(&mut store, &codec, &users);
    assert_eq!(report.succeeded, 5);
    assert_eq!(store.count().unwrap(), 5);

    for (user, old_key) in users.iter().zip(before) {
        assert_ne!(store.get_by_user(&user.user_id).unwrap().public_key, old_key);
    }
}

#[test]
fn test_process_secret_rotation_is_fatal_for_stored_keys() {
    let mut store = KeyPairStore::open_in_memory().unwrap();
    let codec = KeyCodec::new(&ProcessSecret::new("original-secret"));
    provision_keypair(&mut store, &codec, &UserRef::new("user-alice", "alice")).unwrap();

    let rotated_codec = KeyCodec::new(&ProcessSecret::new("new-secret"));
    let result = sign_document(&store, &rotated_codec, "user-alice", b"document");

    assert!(matches!(
        result,
        Err(ServiceError::Crypto(CryptoError::InvalidCiphertext(_)))
    ));

    // Re-provisioning under the new secret recovers the user.
    provision_keypair(&mut store, &rotated_codec, &UserRef::new("user-alice", "alice")).unwrap();
    assert!(sign_document(&store, &rotated_codec, "user-alice", b"document").is_ok());
}
