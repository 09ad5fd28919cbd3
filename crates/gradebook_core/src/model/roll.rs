//! Roll number generation.
//!
//! # Responsibility
//! - Format roll numbers as `<class>-<subjectInitial>-<NN>`.
//! - Pick the next sequence number under the configured `RollPolicy`.
//!
//! # Invariants
//! - `generate_roll_no` is a pure function of scope and count.
//! - Under `RollPolicy::CountBased` a roll can repeat after a deletion.
//! - Under `RollPolicy::NextAfterHighest` a roll is never reissued while a
//!   higher-numbered roll of the same scope remains.

use crate::model::scope::Scope;
use crate::model::student::Student;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ROLL_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+)-(\d+)$").expect("valid roll suffix regex"));

/// Strategy used to choose the sequence number of a new roll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollPolicy {
    /// `count + 1`, where `count` is the current number of students.
    #[default]
    CountBased,
    /// One past the highest sequence already issued in this scope, or
    /// `count + 1` when that is larger.
    NextAfterHighest,
}

/// Formats the roll for the student that would follow `current_count`.
///
/// `(class=9, subject=Maths, count=3)` yields `9-M-04`.
pub fn generate_roll_no(scope: &Scope, current_count: usize) -> String {
    format!(
        "{}-{}-{:02}",
        scope.class(),
        scope.subject_initial(),
        current_count + 1
    )
}

/// Returns the roll to assign to the next student added to `students`.
pub fn next_roll_no(policy: RollPolicy, scope: &Scope, students: &[Student]) -> String {
    match policy {
        RollPolicy::CountBased => generate_roll_no(scope, students.len()),
        RollPolicy::NextAfterHighest => {
            let highest = highest_sequence(scope, students).unwrap_or(0);
            generate_roll_no(scope, highest.max(students.len()))
        }
    }
}

/// Parses the numeric suffix of `roll` when it carries this scope's prefix.
pub fn roll_sequence(scope: &Scope, roll: &str) -> Option<usize> {
    let captures = ROLL_SUFFIX_RE.captures(roll)?;
    let prefix = format!("{}-{}", scope.class(), scope.subject_initial());
    if &captures[1] != prefix {
        return None;
    }
    captures[2].parse().ok()
}

fn highest_sequence(scope: &Scope, students: &[Student]) -> Option<usize> {
    students
        .iter()
        .filter_map(|student| roll_sequence(scope, &student.roll))
        .max()
}
