//! Runtime configuration for the gradebook core.
//!
//! # Responsibility
//! - Hold the teacher access gate and the roll numbering policy.
//! - Parse configuration from JSON with per-field defaults.
//!
//! # Invariants
//! - A validated config always has a non-empty access code.
//! - Unknown fields are rejected rather than ignored.

use crate::model::roll::RollPolicy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Access code gate used when no configuration overrides it.
pub const DEFAULT_TEACHER_ACCESS_CODE: &str = "p3";

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    EmptyAccessCode,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid gradebook config: {err}"),
            Self::EmptyAccessCode => write!(f, "teacher_access_code cannot be empty"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::EmptyAccessCode => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Gradebook configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradebookConfig {
    /// Literal compared against the code a teacher enters.
    pub teacher_access_code: String,
    /// How new roll numbers are sequenced.
    pub roll_policy: RollPolicy,
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            teacher_access_code: DEFAULT_TEACHER_ACCESS_CODE.to_string(),
            roll_policy: RollPolicy::default(),
        }
    }
}

impl GradebookConfig {
    /// Parses and validates a JSON config. Missing fields take defaults.
    ///
    /// # Errors
    /// - Returns `ConfigError::Parse` for malformed JSON or unknown fields.
    /// - Returns `ConfigError::EmptyAccessCode` for a blank access code.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.teacher_access_code.is_empty() {
            return Err(ConfigError::EmptyAccessCode);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, GradebookConfig, DEFAULT_TEACHER_ACCESS_CODE};
    use crate::model::roll::RollPolicy;

    #[test]
    fn empty_object_uses_defaults() {
        let config = GradebookConfig::from_json("{}").unwrap();
        assert_eq!(config, GradebookConfig::default());
        assert_eq!(config.teacher_access_code, DEFAULT_TEACHER_ACCESS_CODE);
        assert_eq!(config.roll_policy, RollPolicy::CountBased);
    }

    #[test]
    fn overrides_are_applied() {
        let config = GradebookConfig::from_json(
            r#"{"teacher_access_code":"staff-room","roll_policy":"next_after_highest"}"#,
        )
        .unwrap();
        assert_eq!(config.teacher_access_code, "staff-room");
        assert_eq!(config.roll_policy, RollPolicy::NextAfterHighest);
    }

    #[test]
    fn rejects_unknown_fields_and_blank_code() {
        assert!(matches!(
            GradebookConfig::from_json(r#"{"teacher_code":"x"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GradebookConfig::from_json(r#"{"teacher_access_code":""}"#),
            Err(ConfigError::EmptyAccessCode)
        ));
    }
}
