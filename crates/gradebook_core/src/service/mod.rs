//! Gradebook use-case services.
//!
//! # Responsibility
//! - Orchestrate scope loading/saving around the in-memory model.
//! - Own the explicit session state passed in from the presentation layer.
//! - Build presentation read models.

pub mod gradebook_service;
pub mod report;
pub mod session;
