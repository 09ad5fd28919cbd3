//! Key-value storage adapter contract and implementations.
//!
//! # Responsibility
//! - Define the `get`/`set` string store the gradebook persists into.
//! - Provide an in-memory store and a SQLite-backed store.
//!
//! # Invariants
//! - `set` fully overwrites the previous value; last write wins.
//! - `get` of a never-written key is `Ok(None)`, never an error.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage and blob decoding failures.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A stored blob exists but is not a valid collection.
    CorruptBlob {
        key: String,
        source: serde_json::Error,
    },
    /// A collection could not be encoded for storage.
    Encode(serde_json::Error),
    /// The backing connection is missing required schema.
    NotReady(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::CorruptBlob { key, source } => {
                write!(f, "stored value under `{key}` is malformed: {source}")
            }
            Self::Encode(err) => write!(f, "failed to encode collection: {err}"),
            Self::NotReady(details) => write!(f, "store not ready: {details}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::CorruptBlob { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
            Self::NotReady(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String-to-string store holding serialized collections.
pub trait KvStore {
    fn get(&self, key: &str) -> RepoResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> RepoResult<()>;
}

impl<S: KvStore + ?Sized> KvStore for &mut S {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> RepoResult<()> {
        (**self).set(key, value)
    }
}

/// Ordered in-memory store. Contents live as long as the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryKvStore {
    entries: BTreeMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys currently stored, in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// SQLite-backed store over the `kv_entries` table.
pub struct SqliteKvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvStore<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    ///
    /// # Errors
    /// - Returns `RepoError::NotReady` when `kv_entries` is missing.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries'
            );",
            [],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(RepoError::NotReady("kv_entries table is missing"));
        }
        Ok(Self { conn })
    }
}

impl KvStore for SqliteKvStore<'_> {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}
