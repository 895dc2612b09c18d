//! End-to-end sign → export → import → verify flows.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use inkseal_crypto::{verify_detached, SignatureArtifact};
use inkseal_service::{
    export_signature, sign_document, verify_artifact, VerificationOutcome, ARTIFACT_CONTENT_TYPE,
};

use crate::test_utils::provisioned_alice;

#[test]
fn test_alice_signs_and_third_party_verifies() {
    let (directory, store, codec) = provisioned_alice();
    let document = b"hello world";

    // Alice signs; her application stores the signature slot and offers
    // the artifact for download.
    let signature = sign_document(&store, &codec, "user-alice", document).unwrap();
    let download = export_signature("alice", "hello world.txt", Some(&signature)).unwrap();

    assert_eq!(download.filename, "hello_world.json");
    assert_eq!(download.content_type, ARTIFACT_CONTENT_TYPE);

    // A third party imports the artifact next to the original bytes.
    let outcome = verify_artifact(&directory, &store, document, &download.bytes).unwrap();
    assert_eq!(
        outcome,
        VerificationOutcome::Valid {
            signer: "alice".to_string()
        }
    );

    // The same artifact against altered bytes is rejected.
    let outcome = verify_artifact(&directory, &store, b"hello world!", &download.bytes).unwrap();
    assert_eq!(outcome, VerificationOutcome::Invalid);
}

#[test]
fn test_exported_artifact_matches_codec_encoding() {
    let (_, store, codec) = provisioned_alice();
    let signature = sign_document(&store, &codec, "user-alice", b"content").unwrap();

    let download = export_signature("alice", "report.pdf", Some(&signature)).unwrap();
    let expected = SignatureArtifact::new("alice", signature.as_str()).encode().unwrap();

    assert_eq!(download.bytes, expected);
}

#[test]
fn test_direct_verify_against_stored_public_key() {
    let (_, store, codec) = provisioned_alice();
    let document = b"raw verification path";

    let signature_b64 = sign_document(&store, &codec, "user-alice", document).unwrap();

    let record = store.get_by_username("alice").unwrap();
    let public_key = BASE64.decode(record.public_key).unwrap();
    let signature = BASE64.decode(signature_b64).unwrap();

    assert!(verify_detached(&public_key, document, &signature).unwrap());
}

#[test]
fn test_import_outcome_ladder() {
    let (mut directory, store, codec) = provisioned_alice();
    directory.insert("bob", "user-bob");

    let document = b"some document";
    let signature = sign_document(&store, &codec, "user-alice", document).unwrap();

    // Unknown signer.
    let artifact = SignatureArtifact::new("mallory", signature.as_str()).encode().unwrap();
    assert_eq!(
        verify_artifact(&directory, &store, document, &artifact).unwrap(),
        VerificationOutcome::SignerNotFound("mallory".to_string())
    );

    // Known signer, no key pair provisioned.
    let artifact = SignatureArtifact::new("bob", signature.as_str()).encode().unwrap();
    assert_eq!(
        verify_artifact(&directory, &store, document, &artifact).unwrap(),
        VerificationOutcome::NoKeyPairForSigner("bob".to_string())
    );

    // Artifact missing the signature field.
    let outcome =
        verify_artifact(&directory, &store, document, br#"{"signer_username": "alice"}"#).unwrap();
    assert!(matches!(outcome, VerificationOutcome::MalformedArtifact(_)));

    // Artifact that is not JSON at all.
    let outcome = verify_artifact(&directory, &store, document, b"not json").unwrap();
    assert!(matches!(outcome, VerificationOutcome::MalformedArtifact(_)));

    // Signature claimed by the wrong user is a clean mismatch.
    let mut other_store = inkseal_keystore::KeyPairStore::open_in_memory().unwrap();
    inkseal_service::provision_keypair(
        &mut other_store,
        &codec,
        &inkseal_service::UserRef::new("user-alice", "alice"),
    )
    .unwrap();
    let foreign_signature = sign_document(&other_store, &codec, "user-alice", document).unwrap();
    let artifact = SignatureArtifact::new("alice", foreign_signature.as_str()).encode().unwrap();
    assert_eq!(
        verify_artifact(&directory, &store, document, &artifact).unwrap(),
        VerificationOutcome::Invalid
    );
}
