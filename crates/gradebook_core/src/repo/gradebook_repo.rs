//! Scope persistence over a `KvStore`.
//!
//! # Responsibility
//! - Load a scope's student and test collections from their storage keys.
//! - Save both collections back as JSON arrays.
//!
//! # Invariants
//! - Absent keys load as empty collections ("first use").
//! - Malformed blobs are reported as `RepoError::CorruptBlob`, never panics
//!   and never silently replaced.
//! - Saving overwrites both keys in full.

use crate::model::scope::Scope;
use crate::model::student::Student;
use crate::model::test::Test;
use crate::repo::kv_store::{KvStore, RepoError, RepoResult};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Collections stored under one scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScopeSnapshot {
    pub students: Vec<Student>,
    pub tests: Vec<Test>,
}

/// Reads both collections of `scope`.
pub fn load_scope<S: KvStore + ?Sized>(store: &S, scope: &Scope) -> RepoResult<ScopeSnapshot> {
    let students = load_list::<Student, S>(store, &scope.students_key())?;
    let tests = load_list::<Test, S>(store, &scope.tests_key())?;
    debug!(
        "event=scope_load module=repo status=ok students={} tests={}",
        students.len(),
        tests.len()
    );
    Ok(ScopeSnapshot { students, tests })
}

/// Overwrites both collections of `scope`.
pub fn save_scope<S: KvStore + ?Sized>(
    store: &mut S,
    scope: &Scope,
    students: &[Student],
    tests: &[Test],
) -> RepoResult<()> {
    let students_blob = encode_list(students)?;
    let tests_blob = encode_list(tests)?;
    store.set(&scope.students_key(), &students_blob)?;
    store.set(&scope.tests_key(), &tests_blob)?;
    Ok(())
}

fn load_list<T, S>(store: &S, key: &str) -> RepoResult<Vec<T>>
where
    T: DeserializeOwned,
    S: KvStore + ?Sized,
{
    let Some(blob) = store.get(key)? else {
        return Ok(Vec::new());
    };

    serde_json::from_str(&blob).map_err(|source| {
        warn!("event=scope_load module=repo status=error error_code=corrupt_blob key={key}");
        RepoError::CorruptBlob {
            key: key.to_string(),
            source,
        }
    })
}

fn encode_list<T: Serialize>(items: &[T]) -> RepoResult<String> {
    serde_json::to_string(items).map_err(RepoError::Encode)
}
