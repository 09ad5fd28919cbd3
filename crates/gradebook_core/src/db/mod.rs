//! SQLite file behind `SqliteKvStore`.
//!
//! The store holds one table, `kv_entries`, mapping scope keys such as
//! `Maths_students_9` to JSON blobs. Schema changes touch that table only.
//!
//! # Invariants
//! - `PRAGMA user_version` records the last applied migration.
//! - A file written by a newer build is refused rather than downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file's `user_version` is ahead of every known migration.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "gradebook store: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "gradebook store was written by a newer build (schema {found}, this build reads up to {supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
