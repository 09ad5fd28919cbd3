//! Ranking engine.
//!
//! # Responsibility
//! - Aggregate a student's graded marks into totals and percentages.
//! - Order a scope's students by total.
//! - Classify overall and per-test pass/fail outcomes.
//!
//! # Invariants
//! - Absent and non-finite marks are excluded from every aggregate.
//! - Ranking is a stable sort: equal totals keep collection order.

pub mod engine;
