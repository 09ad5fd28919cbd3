//! Gradebook domain model.
//!
//! # Responsibility
//! - Define the student/test records persisted per scope.
//! - Own the in-memory `Gradebook` aggregate and its mutation rules.
//! - Derive storage keys and roll numbers from a scope.
//!
//! # Invariants
//! - Test titles are unique within a scope.
//! - A mark entry exists only when explicitly set; absence means ungraded.
//! - Deleting a test cascades to every student's marks.

pub mod gradebook;
pub mod numeric;
pub mod roll;
pub mod scope;
pub mod student;
