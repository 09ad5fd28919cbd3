//! Explicit application session state.
//!
//! # Responsibility
//! - Hold the role, authentication flag, active scope and roll query that
//!   the presentation layer owns and passes into the service.
//! - Gate management (write) access behind the teacher access code.
//!
//! # Invariants
//! - Only an authenticated teacher session may persist changes.
//! - Choosing a role resets authentication.
//! - A wrong teacher code never authenticates and never panics.

use crate::config::GradebookConfig;
use crate::model::scope::Scope;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Inline message shown after a rejected teacher code.
pub const INVALID_CODE_MESSAGE: &str = "Invalid code";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Teacher => write!(f, "teacher"),
            Self::Student => write!(f, "student"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            other => Err(format!(
                "unsupported role `{other}`; expected teacher|student"
            )),
        }
    }
}

/// Result of a teacher sign-in attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated,
    InvalidCode,
    /// The session has not chosen the teacher role.
    NotTeacher,
}

impl AuthOutcome {
    /// Inline message for the presentation, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::InvalidCode => Some(INVALID_CODE_MESSAGE),
            Self::Authenticated | Self::NotTeacher => None,
        }
    }
}

/// Per-user UI session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    role: Option<Role>,
    authenticated: bool,
    scope: Scope,
    roll_query: String,
}

impl Session {
    /// Starts a session with no role chosen.
    pub fn new(scope: Scope) -> Self {
        Self {
            role: None,
            authenticated: false,
            scope,
            roll_query: String::new(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn roll_query(&self) -> &str {
        &self.roll_query
    }

    pub fn choose_role(&mut self, role: Role) {
        self.role = Some(role);
        self.authenticated = false;
    }

    /// Compares `code` against the configured gate.
    pub fn authenticate_teacher(&mut self, code: &str, config: &GradebookConfig) -> AuthOutcome {
        if self.role != Some(Role::Teacher) {
            return AuthOutcome::NotTeacher;
        }

        if code == config.teacher_access_code {
            self.authenticated = true;
            info!("event=teacher_auth module=session status=ok");
            AuthOutcome::Authenticated
        } else {
            self.authenticated = false;
            warn!("event=teacher_auth module=session status=rejected");
            AuthOutcome::InvalidCode
        }
    }

    /// Records the roll a student wants to look up and opens the view.
    ///
    /// Returns `false` unless the session chose the student role.
    pub fn submit_roll_query(&mut self, roll: impl Into<String>) -> bool {
        if self.role != Some(Role::Student) {
            return false;
        }
        self.roll_query = roll.into();
        self.authenticated = true;
        true
    }

    /// Changes the active scope. Callers reload the gradebook afterwards.
    pub fn switch_scope(&mut self, scope: Scope) {
        self.scope = scope;
    }

    /// Whether this session may mutate and persist collections.
    pub fn can_manage(&self) -> bool {
        self.authenticated && self.role == Some(Role::Teacher)
    }

    /// Whether this session may read the active scope.
    pub fn can_view(&self) -> bool {
        self.authenticated && self.role.is_some()
    }
}
