//! Key-pair store with SQLite backend.
//!
//! Each user owns at most one key pair. Rotation replaces the row with a
//! delete-then-insert inside a single transaction, so concurrent readers
//! never observe a user with zero or two key pairs. The store is the
//! sole owner of encrypted private key material: rows leave this module
//! only as [`KeyPairRecord`] values carrying the still-encrypted text.
//!
//! # Guarantees
//!
//! - Uniqueness: one row per user id and per username
//! - Atomic rotation: replace is one SQLite transaction
//! - Destruction: the old encrypted private key is gone after rotation
//! - Durability: WAL mode for crash recovery

use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// A stored key pair. The private key is encrypted; use the crypto
/// crate's codec to decrypt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPairRecord {
    /// Owning user identifier.
    pub user_id: String,
    /// Owning user's unique handle, used for verification lookups.
    pub username: String,
    /// Public key, base64 text.
    pub public_key: String,
    /// Encrypted private key, opaque ciphertext text.
    pub private_key_enc: String,
    /// Creation timestamp (Unix milliseconds).
    pub created_at: u64,
}

/// Errors that can occur in key-pair store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No key pair exists for the requested user or username.
    #[error("No key pair found for {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Key-pair store backed by SQLite.
pub struct KeyPairStore {
    conn: Connection,
}

impl KeyPairStore {
    /// Create or open a store at the specified path.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();

        info!(path = %path.display(), "Opening key-pair store");

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // WAL mode for better concurrency and durability
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        Self::init_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Open an in-memory store. Intended for tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    fn init_schema(conn: &Connection) -> StoreResult<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS user_keypairs (
                user_id TEXT PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                public_key TEXT NOT NULL,
                private_key_enc TEXT NOT NULL,
                created_at INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_keypair_username ON user_keypairs(username);
            "#,
        )?;

        Ok(())
    }

    /// Insert or replace the key pair for a user.
    ///
    /// Delete-then-insert runs inside one transaction: a concurrent
    /// reader sees either the old pair or the new pair, never neither.
    /// The old encrypted private key is destroyed with the old row.
    pub fn upsert(
        &mut self,
        user_id: &str,
        username: &str,
        public_key: &str,
        encrypted_private_key: &str,
    ) -> StoreResult<KeyPairRecord> {
        let created_at = now_millis();

        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM user_keypairs WHERE user_id = ?1",
            params![user_id],
        )?;
        tx.execute(
            "INSERT INTO user_keypairs (user_id, username, public_key, private_key_enc, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![user_id, username, public_key, encrypted_private_key, created_at],
        )?;
        tx.commit()?;

        debug!(user_id = %user_id, username = %username, "Stored key pair");

        Ok(KeyPairRecord {
            user_id: user_id.to_string(),
            username: username.to_string(),
            public_key: public_key.to_string(),
            private_key_enc: encrypted_private_key.to_string(),
            created_at,
        })
    }

    /// Fetch the key pair for a user id.
    pub fn get_by_user(&self, user_id: &str) -> StoreResult<KeyPairRecord> {
        self.query_one("user_id", user_id)
    }

    /// Fetch the key pair for a username. Used by verification, which
    /// only knows the claimed signer identity.
    pub fn get_by_username(&self, username: &str) -> StoreResult<KeyPairRecord> {
        self.query_one("username", username)
    }

    fn query_one(&self, column: &str, value: &str) -> StoreResult<KeyPairRecord> {
        // column is one of the two fixed names above, never caller input
        let sql = format!(
            "SELECT user_id, username, public_key, private_key_enc, created_at
             FROM user_keypairs WHERE {column} = ?1"
        );

        self.conn
            .query_row(&sql, params![value], |row| {
                Ok(KeyPairRecord {
                    user_id: row.get(0)?,
                    username: row.get(1)?,
                    public_key: row.get(2)?,
                    private_key_enc: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })
            .optional()?
            .ok_or_else(|| StoreError::NotFound(value.to_string()))
    }

    /// Number of stored key pairs.
    pub fn count(&self) -> StoreResult<u64> {
        let count: u64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM user_keypairs", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
