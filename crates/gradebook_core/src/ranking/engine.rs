//! Totals, percentages, pass rules and ordering.
//!
//! Two pass rules coexist:
//! - overall: `pass_status` on the rounded percentage over graded tests;
//! - per test: `test_status` on a single mark against its max marks.

use crate::model::student::Student;
use crate::model::test::Test;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Minimum percentage that counts as a pass, inclusive.
pub const PASS_THRESHOLD_PERCENT: f64 = 33.0;

/// Sum of graded marks and of the matching max marks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total: f64,
    pub max_total: f64,
}

impl Totals {
    pub fn percentage(&self) -> Percentage {
        percentage(self.total, self.max_total)
    }
}

/// Percentage rounded to two decimals. Displays with exactly two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Percentage(f64);

impl Percentage {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Display for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Aggregate outcome over all graded tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PassStatus {
    Pass,
    Fail,
}

impl Display for PassStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "Pass"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}

/// Outcome of a single test for a single student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TestStatus {
    Pass,
    Fail,
    /// No usable mark. Rendered as `-`.
    Ungraded,
}

impl Display for TestStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "Pass"),
            Self::Fail => write!(f, "Fail"),
            Self::Ungraded => write!(f, "-"),
        }
    }
}

/// One entry of the descending-total ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStudent<'a> {
    /// 1-based rank.
    pub position: usize,
    pub student: &'a Student,
    pub totals: Totals,
}

/// One point of a student's per-test progress series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPoint {
    pub title: String,
    /// `None` when the test is ungraded for this student.
    pub mark: Option<f64>,
    pub max_marks: f64,
}

/// Sums graded marks and their max marks over `tests`.
///
/// Tests without a usable mark contribute to neither side, so the
/// percentage reflects graded tests only.
pub fn compute_totals(student: &Student, tests: &[Test]) -> Totals {
    tests
        .iter()
        .filter_map(|test| {
            student
                .graded_mark(&test.title)
                .map(|mark| (mark, test.max_marks))
        })
        .fold(
            Totals {
                total: 0.0,
                max_total: 0.0,
            },
            |acc, (mark, max_marks)| Totals {
                total: acc.total + mark,
                max_total: acc.max_total + max_marks,
            },
        )
}

/// `total / max_total * 100`, rounded to two decimals; `0.00` when
/// `max_total` is zero.
pub fn percentage(total: f64, max_total: f64) -> Percentage {
    if max_total == 0.0 {
        return Percentage(0.0);
    }
    let raw = total / max_total * 100.0;
    Percentage((raw * 100.0).round() / 100.0)
}

pub fn pass_status(percentage: Percentage) -> PassStatus {
    if percentage.value() >= PASS_THRESHOLD_PERCENT {
        PassStatus::Pass
    } else {
        PassStatus::Fail
    }
}

/// Per-test status. A non-finite mark counts as absent.
pub fn test_status(mark: Option<f64>, max_marks: f64) -> TestStatus {
    match mark.filter(|value| value.is_finite()) {
        None => TestStatus::Ungraded,
        Some(mark) if mark * 100.0 / max_marks >= PASS_THRESHOLD_PERCENT => TestStatus::Pass,
        Some(_) => TestStatus::Fail,
    }
}

/// Orders `students` by descending total with 1-based positions.
pub fn rank<'a>(students: &'a [Student], tests: &[Test]) -> Vec<RankedStudent<'a>> {
    let mut scored: Vec<(&'a Student, Totals)> = students
        .iter()
        .map(|student| (student, compute_totals(student, tests)))
        .collect();

    // `sort_by` is stable; ties keep collection order.
    scored.sort_by(|(_, a), (_, b)| b.total.total_cmp(&a.total));

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (student, totals))| RankedStudent {
            position: index + 1,
            student,
            totals,
        })
        .collect()
}

/// Rank of the first student, in collection order, whose roll equals `roll`.
pub fn rank_of(roll: &str, students: &[Student], tests: &[Test]) -> Option<usize> {
    let student = students.iter().find(|student| student.roll == roll)?;
    rank_of_student(student, students, tests)
}

/// Rank of `student`, which must be borrowed from `students`.
///
/// Matches by identity, so students sharing a roll keep separate ranks.
pub fn rank_of_student(student: &Student, students: &[Student], tests: &[Test]) -> Option<usize> {
    rank(students, tests)
        .into_iter()
        .find(|entry| std::ptr::eq(entry.student, student))
        .map(|entry| entry.position)
}

/// Marks per test in test order, for charting.
pub fn progress_series(student: &Student, tests: &[Test]) -> Vec<ProgressPoint> {
    tests
        .iter()
        .map(|test| ProgressPoint {
            title: test.title.clone(),
            mark: student.graded_mark(&test.title),
            max_marks: test.max_marks,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{percentage, test_status, TestStatus};

    #[test]
    fn percentage_rounds_half_up_to_two_decimals() {
        assert_eq!(percentage(1.0, 3.0).to_string(), "33.33");
        assert_eq!(percentage(2.0, 3.0).to_string(), "66.67");
    }

    #[test]
    fn test_status_treats_non_finite_marks_as_ungraded() {
        assert_eq!(test_status(Some(f64::NAN), 10.0), TestStatus::Ungraded);
        assert_eq!(test_status(Some(f64::INFINITY), 10.0), TestStatus::Ungraded);
        assert_eq!(test_status(Some(f64::NEG_INFINITY), 10.0), TestStatus::Ungraded);
        assert_eq!(test_status(None, 10.0).to_string(), "-");
    }

    #[test]
    fn test_status_passes_exactly_at_threshold() {
        assert_eq!(test_status(Some(16.5), 50.0), TestStatus::Pass);
        assert_eq!(test_status(Some(33.0), 100.0), TestStatus::Pass);
        assert_eq!(test_status(Some(16.4), 50.0), TestStatus::Fail);
    }
}
