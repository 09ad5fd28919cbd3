//! Scope selection and storage key derivation.
//!
//! # Responsibility
//! - Represent the active `(subject, class)` pair.
//! - Derive the two storage keys that hold a scope's collections.
//!
//! # Invariants
//! - The same scope always maps to the same keys.
//! - Distinct scopes never share a key: `class` may not contain `_`, so the
//!   trailing `_<class>` segment is unambiguous.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Class values offered by the presentation selectors.
pub const KNOWN_CLASSES: &[&str] = &["9", "10", "11", "12"];
/// Subject values offered by the presentation selectors.
pub const KNOWN_SUBJECTS: &[&str] = &["Maths", "English"];

/// Validation errors for scope construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeValidationError {
    EmptySubject,
    EmptyClass,
    /// Class contains the key separator.
    InvalidClass(String),
}

impl Display for ScopeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySubject => write!(f, "subject cannot be empty"),
            Self::EmptyClass => write!(f, "class cannot be empty"),
            Self::InvalidClass(class) => {
                write!(f, "class `{class}` must not contain `_`")
            }
        }
    }
}

impl Error for ScopeValidationError {}

/// The `(subject, class)` pair selecting which collections are active.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    subject: String,
    class: String,
}

impl Scope {
    /// Creates a scope from selector values.
    ///
    /// Both values are trimmed. Values outside `KNOWN_SUBJECTS` /
    /// `KNOWN_CLASSES` are accepted.
    ///
    /// # Errors
    /// - Returns an error when either value is empty after trimming.
    /// - Returns an error when `class` contains `_`.
    pub fn new(
        subject: impl AsRef<str>,
        class: impl AsRef<str>,
    ) -> Result<Self, ScopeValidationError> {
        let subject = subject.as_ref().trim();
        let class = class.as_ref().trim();

        if subject.is_empty() {
            return Err(ScopeValidationError::EmptySubject);
        }
        if class.is_empty() {
            return Err(ScopeValidationError::EmptyClass);
        }
        if class.contains('_') {
            return Err(ScopeValidationError::InvalidClass(class.to_string()));
        }

        Ok(Self {
            subject: subject.to_string(),
            class: class.to_string(),
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Storage key for the student collection: `<subject>_students_<class>`.
    pub fn students_key(&self) -> String {
        format!("{}_students_{}", self.subject, self.class)
    }

    /// Storage key for the test collection: `<subject>_tests_<class>`.
    pub fn tests_key(&self) -> String {
        format!("{}_tests_{}", self.subject, self.class)
    }

    /// Uppercased first character of the subject.
    pub fn subject_initial(&self) -> String {
        self.subject
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.subject, self.class)
    }
}

#[cfg(test)]
mod tests {
    use super::{Scope, ScopeValidationError};

    #[test]
    fn keys_follow_subject_and_class() {
        let scope = Scope::new("Maths", "9").unwrap();
        assert_eq!(scope.students_key(), "Maths_students_9");
        assert_eq!(scope.tests_key(), "Maths_tests_9");
    }

    #[test]
    fn selector_values_are_trimmed() {
        let scope = Scope::new(" English ", " 12").unwrap();
        assert_eq!(scope.subject(), "English");
        assert_eq!(scope.class(), "12");
        assert_eq!(scope.subject_initial(), "E");
    }

    #[test]
    fn lowercase_subject_initial_is_uppercased() {
        let scope = Scope::new("physics", "11").unwrap();
        assert_eq!(scope.subject_initial(), "P");
    }

    #[test]
    fn rejects_empty_and_ambiguous_values() {
        assert_eq!(
            Scope::new("  ", "9").unwrap_err(),
            ScopeValidationError::EmptySubject
        );
        assert_eq!(
            Scope::new("Maths", "").unwrap_err(),
            ScopeValidationError::EmptyClass
        );
        assert!(matches!(
            Scope::new("Maths", "9_students_x").unwrap_err(),
            ScopeValidationError::InvalidClass(_)
        ));
    }
}
