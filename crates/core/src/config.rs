//! Configuration management for Inkseal.
//!
//! The process secret is an explicit configuration value handed to the
//! key codec at construction. It is never read from a hidden global, so
//! tests and secret rotation drills can construct codecs with alternate
//! secrets.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Long-lived process secret used to derive the at-rest encryption key.
///
/// Changing this secret makes every previously encrypted private key
/// undecryptable. The inner bytes are zeroized on drop and excluded from
/// `Debug` output.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct ProcessSecret(String);

impl ProcessSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Debug for ProcessSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ProcessSecret(..)")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub secret: ProcessSecret,
    pub keystore: KeystoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeystoreConfig {
    pub path: PathBuf,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that would silently weaken key encryption.
    pub fn validate(&self) -> crate::Result<()> {
        if self.secret.as_bytes().is_empty() {
            return Err(crate::Error::Config(
                "process secret must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
