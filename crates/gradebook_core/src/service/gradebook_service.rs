//! Gradebook use-case service.
//!
//! # Responsibility
//! - Load the session's scope into an in-memory `Gradebook`.
//! - Persist a gradebook as an explicit save command.
//! - Answer student roll lookups.
//!
//! # Invariants
//! - Only an authenticated teacher session writes to the store.
//! - Loading and lookups never write.
//! - Reopening a scope discards unsaved in-memory changes.

use crate::config::GradebookConfig;
use crate::model::gradebook::Gradebook;
use crate::repo::gradebook_repo::{load_scope, save_scope};
use crate::repo::kv_store::{KvStore, RepoError};
use crate::service::report::{student_report, RollLookup};
use crate::service::session::Session;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for gradebook use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Persistence-layer failure, including malformed stored blobs.
    Repo(RepoError),
    /// The session has not chosen a role or has not signed in.
    NotAuthenticated,
    /// The session may read but not write.
    ReadOnlySession,
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::NotAuthenticated => write!(f, "session is not authenticated"),
            Self::ReadOnlySession => write!(f, "session is not allowed to save changes"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Gradebook facade over a key-value store.
pub struct GradebookService<S: KvStore> {
    store: S,
    config: GradebookConfig,
}

impl<S: KvStore> GradebookService<S> {
    pub fn new(store: S, config: GradebookConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &GradebookConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Loads the session's active scope.
    ///
    /// Absent keys yield an empty gradebook.
    ///
    /// # Errors
    /// - `ServiceError::NotAuthenticated` before sign-in.
    /// - `ServiceError::Repo` with `RepoError::CorruptBlob` for malformed
    ///   stored data.
    pub fn open(&self, session: &Session) -> Result<Gradebook, ServiceError> {
        if !session.can_view() {
            return Err(ServiceError::NotAuthenticated);
        }

        let scope = session.scope().clone();
        let snapshot = load_scope(&self.store, &scope).map_err(|err| {
            warn!("event=scope_open module=service status=error scope={scope} error={err}");
            err
        })?;
        info!(
            "event=scope_open module=service status=ok scope={scope} students={} tests={}",
            snapshot.students.len(),
            snapshot.tests.len()
        );

        Ok(Gradebook::from_parts(
            scope,
            snapshot.students,
            snapshot.tests,
            self.config.roll_policy,
        ))
    }

    /// Persists `gradebook` under its own scope and clears its dirty flag.
    ///
    /// # Errors
    /// - `ServiceError::ReadOnlySession` unless the session is an
    ///   authenticated teacher. Nothing is written in that case.
    /// - `ServiceError::Repo` when encoding or the store write fails.
    pub fn save(&mut self, session: &Session, gradebook: &mut Gradebook) -> Result<(), ServiceError> {
        if !session.can_manage() {
            warn!("event=scope_save module=service status=rejected reason=read_only_session");
            return Err(ServiceError::ReadOnlySession);
        }

        save_scope(
            &mut self.store,
            gradebook.scope(),
            gradebook.students(),
            gradebook.tests(),
        )?;
        gradebook.mark_clean();
        info!(
            "event=scope_save module=service status=ok scope={} students={} tests={}",
            gradebook.scope(),
            gradebook.students().len(),
            gradebook.tests().len()
        );
        Ok(())
    }

    /// Loads the session's scope and builds the report for its roll query.
    pub fn lookup_student(&self, session: &Session) -> Result<RollLookup, ServiceError> {
        let gradebook = self.open(session)?;
        let lookup = student_report(&gradebook, session.roll_query());
        if matches!(lookup, RollLookup::NotFound) {
            info!("event=roll_lookup module=service status=not_found");
        }
        Ok(lookup)
    }
}
