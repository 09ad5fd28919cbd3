//! Storage adapter and scope persistence.
//!
//! # Responsibility
//! - Define the key-value contract the gradebook is stored in.
//! - Isolate JSON blob encoding and SQLite details from the service layer.
//!
//! # Invariants
//! - Repository APIs distinguish "absent" (empty collections) from
//!   "malformed" (`RepoError::CorruptBlob`).

pub mod gradebook_repo;
pub mod kv_store;
