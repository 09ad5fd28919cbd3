//! Presentation read models.
//!
//! # Responsibility
//! - Build the student progress report looked up by roll number.
//! - Build the teacher's ranking table and marks grid.
//!
//! # Invariants
//! - Reports are derived from a `Gradebook` snapshot and never mutate it.
//! - A roll lookup miss is a `RollLookup::NotFound` value, not an error.

use crate::model::gradebook::Gradebook;
use crate::ranking::engine::{
    compute_totals, pass_status, progress_series, rank, rank_of_student, test_status, PassStatus,
    Percentage, ProgressPoint, TestStatus, Totals,
};

/// Message rendered when a roll lookup misses.
pub const NOT_FOUND_MESSAGE: &str = "No student found.";

/// One row of the student-facing marks table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub title: String,
    pub mark: Option<f64>,
    pub max_marks: f64,
    pub status: TestStatus,
}

/// Student-facing progress view.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentReport {
    pub name: String,
    pub roll: String,
    pub totals: Totals,
    pub percentage: Percentage,
    pub status: PassStatus,
    /// 1-based rank within the scope.
    pub rank: usize,
    pub rows: Vec<ReportRow>,
    /// Chart data source, one point per test in test order.
    pub series: Vec<ProgressPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RollLookup {
    Found(Box<StudentReport>),
    NotFound,
}

impl RollLookup {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Found(_) => None,
            Self::NotFound => Some(NOT_FOUND_MESSAGE),
        }
    }

    pub fn report(&self) -> Option<&StudentReport> {
        match self {
            Self::Found(report) => Some(report.as_ref()),
            Self::NotFound => None,
        }
    }
}

/// One row of the teacher's ranking table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    pub position: usize,
    pub roll: String,
    pub name: String,
    pub totals: Totals,
    pub percentage: Percentage,
}

/// One editable row of the teacher's marks grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MarksGridRow {
    /// Index to pass back to `Gradebook::update_mark`/`delete_student`.
    pub index: usize,
    pub name: String,
    pub roll: String,
    /// One cell per test in test order; `None` renders as an empty cell.
    pub cells: Vec<Option<f64>>,
}

/// Builds the progress report for the student with `roll`.
pub fn student_report(gradebook: &Gradebook, roll: &str) -> RollLookup {
    let Some(student) = gradebook.lookup_by_roll(roll) else {
        return RollLookup::NotFound;
    };
    let tests = gradebook.tests();

    let totals = compute_totals(student, tests);
    let percentage = totals.percentage();
    let rank = rank_of_student(student, gradebook.students(), tests).unwrap_or(0);
    let rows = tests
        .iter()
        .map(|test| {
            let mark = student.graded_mark(&test.title);
            ReportRow {
                title: test.title.clone(),
                mark,
                max_marks: test.max_marks,
                status: test_status(mark, test.max_marks),
            }
        })
        .collect();

    RollLookup::Found(Box::new(StudentReport {
        name: student.name.clone(),
        roll: student.roll.clone(),
        totals,
        percentage,
        status: pass_status(percentage),
        rank,
        rows,
        series: progress_series(student, tests),
    }))
}

/// Ranking table in descending-total order.
pub fn ranking_table(gradebook: &Gradebook) -> Vec<RankingRow> {
    rank(gradebook.students(), gradebook.tests())
        .into_iter()
        .map(|entry| RankingRow {
            position: entry.position,
            roll: entry.student.roll.clone(),
            name: entry.student.name.clone(),
            totals: entry.totals,
            percentage: entry.totals.percentage(),
        })
        .collect()
}

/// Marks grid in collection order.
pub fn marks_grid(gradebook: &Gradebook) -> Vec<MarksGridRow> {
    gradebook
        .students()
        .iter()
        .enumerate()
        .map(|(index, student)| MarksGridRow {
            index,
            name: student.name.clone(),
            roll: student.roll.clone(),
            cells: gradebook
                .tests()
                .iter()
                .map(|test| student.graded_mark(&test.title))
                .collect(),
        })
        .collect()
}
