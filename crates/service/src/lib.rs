//! Signing workflows for the Inkseal document signing system.
//!
//! This crate wires the crypto primitives and the key-pair store into
//! the operations the surrounding application calls: key provisioning
//! on account creation, administrative key rotation, document signing,
//! and signature artifact export/import. HTTP routing, sessions, and
//! file storage live outside; they reach the core only through these
//! functions and the [`UserDirectory`] seam.

pub mod documents;
pub mod error;
pub mod export;
pub mod import;
pub mod provisioning;

pub use documents::sign_document;
pub use error::{ServiceError, ServiceResult};
pub use export::{export_signature, SignatureDownload, ARTIFACT_CONTENT_TYPE};
pub use import::{verify_artifact, InMemoryDirectory, UserDirectory, VerificationOutcome};
pub use provisioning::{provision_keypair, rotate_batch, RotationReport, UserRef};
