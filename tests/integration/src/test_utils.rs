//! Shared helpers for the integration suite.

use std::path::PathBuf;

use inkseal_core::ProcessSecret;
use inkseal_crypto::KeyCodec;
use inkseal_keystore::KeyPairStore;
use inkseal_service::{provision_keypair, InMemoryDirectory, UserRef};

/// A unique on-disk database path so tests can reopen the store.
pub fn temp_db_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("inkseal_{}_{}.db", label, uuid::Uuid::new_v4()))
}

pub fn test_codec() -> KeyCodec {
    KeyCodec::new(&ProcessSecret::new("integration-test-secret"))
}

/// Store, directory, and codec with "alice" fully provisioned.
pub fn provisioned_alice() -> (InMemoryDirectory, KeyPairStore, KeyCodec) {
    let mut directory = InMemoryDirectory::new();
    directory.insert("alice", "user-alice");

    let mut store = KeyPairStore::open_in_memory().expect("in-memory store");
    let codec = test_codec();
    provision_keypair(&mut store, &codec, &UserRef::new("user-alice", "alice"))
        .expect("provisioning alice");

    (directory, store, codec)
}
