//! Core domain logic for the gradebook.
//! This crate is the single source of truth for gradebook invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod ranking;
pub mod repo;
pub mod service;

pub use config::{ConfigError, GradebookConfig, DEFAULT_TEACHER_ACCESS_CODE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::gradebook::Gradebook;
pub use model::roll::{generate_roll_no, RollPolicy};
pub use model::scope::{Scope, ScopeValidationError, KNOWN_CLASSES, KNOWN_SUBJECTS};
pub use model::student::{Marks, Student};
pub use model::test::Test;
pub use ranking::engine::{
    compute_totals, pass_status, percentage, progress_series, rank, rank_of, rank_of_student,
    test_status, PassStatus, Percentage, ProgressPoint, RankedStudent, TestStatus, Totals,
    PASS_THRESHOLD_PERCENT,
};
pub use repo::gradebook_repo::{load_scope, save_scope, ScopeSnapshot};
pub use repo::kv_store::{KvStore, MemoryKvStore, RepoError, RepoResult, SqliteKvStore};
pub use service::gradebook_service::{GradebookService, ServiceError};
pub use service::report::{
    marks_grid, ranking_table, student_report, MarksGridRow, RankingRow, ReportRow, RollLookup,
    StudentReport, NOT_FOUND_MESSAGE,
};
pub use service::session::{AuthOutcome, Role, Session, INVALID_CODE_MESSAGE};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
