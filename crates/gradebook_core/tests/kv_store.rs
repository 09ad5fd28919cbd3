use gradebook_core::db::{open_db, open_db_in_memory};
use gradebook_core::{KvStore, MemoryKvStore, RepoError, SqliteKvStore};
use rusqlite::Connection;

#[test]
fn memory_store_returns_none_for_unknown_keys() {
    let store = MemoryKvStore::new();
    assert_eq!(store.get("Maths_students_9").unwrap(), None);
    assert!(store.is_empty());
}

#[test]
fn memory_store_last_write_wins() {
    let mut store = MemoryKvStore::new();
    store.set("k", "first").unwrap();
    store.set("k", "second").unwrap();

    assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    assert_eq!(store.len(), 1);
    assert_eq!(store.keys().collect::<Vec<_>>(), vec!["k"]);
}

#[test]
fn sqlite_store_overwrites_existing_value() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteKvStore::try_new(&conn).unwrap();

    assert_eq!(store.get("Maths_tests_9").unwrap(), None);
    store.set("Maths_tests_9", "[]").unwrap();
    store
        .set("Maths_tests_9", r#"[{"title":"Unit1","maxMarks":50}]"#)
        .unwrap();

    assert_eq!(
        store.get("Maths_tests_9").unwrap().as_deref(),
        Some(r#"[{"title":"Unit1","maxMarks":50}]"#)
    );
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn sqlite_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradebook.db");

    {
        let conn = open_db(&path).unwrap();
        let mut store = SqliteKvStore::try_new(&conn).unwrap();
        store.set("English_students_10", "[]").unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = SqliteKvStore::try_new(&conn).unwrap();
    assert_eq!(
        store.get("English_students_10").unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn sqlite_store_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();
    let result = SqliteKvStore::try_new(&conn);
    assert!(matches!(result, Err(RepoError::NotReady(_))));
}
