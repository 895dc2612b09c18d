//! End-to-end integration tests for the Inkseal signing core.
//!
//! This test suite validates the full workflows across crates:
//! - Provisioning, signing, export, import, verification
//! - Key rotation semantics and persistence across store reopen
//! - The full ladder of verification outcomes

pub mod test_utils;

#[cfg(test)]
mod rotation_tests;

#[cfg(test)]
mod signing_flow_tests;
