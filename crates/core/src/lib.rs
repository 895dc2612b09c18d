//! Core functionality for the Inkseal document signing system.
//!
//! This crate provides the configuration, error, and logging foundation
//! shared by the Inkseal crates.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, KeystoreConfig, ProcessSecret};
pub use error::{Error, Result};
