//! In-memory gradebook for one scope.
//!
//! # Responsibility
//! - Own the student and test collections of the active scope.
//! - Apply teacher mutations (add/delete/mark entry) in memory.
//! - Track the selected test and whether unsaved changes exist.
//!
//! # Invariants
//! - Mutators never perform I/O; persistence is an explicit service call.
//! - Rejected input is a silent no-op: mutators return `None`/`false` and
//!   leave the collections and dirty flag untouched.
//! - Deleting a test removes its mark from every student.

use crate::model::numeric::{parse_leading_number, parse_strict_number};
use crate::model::roll::{next_roll_no, RollPolicy};
use crate::model::scope::Scope;
use crate::model::student::Student;
use crate::model::test::Test;

/// Student and test collections of a single scope.
#[derive(Debug, Clone)]
pub struct Gradebook {
    scope: Scope,
    students: Vec<Student>,
    tests: Vec<Test>,
    selected_test: Option<String>,
    roll_policy: RollPolicy,
    dirty: bool,
}

impl Gradebook {
    /// Creates an empty gradebook for `scope`.
    pub fn new(scope: Scope, roll_policy: RollPolicy) -> Self {
        Self::from_parts(scope, Vec::new(), Vec::new(), roll_policy)
    }

    /// Wraps collections loaded from storage. The result starts clean.
    pub fn from_parts(
        scope: Scope,
        students: Vec<Student>,
        tests: Vec<Test>,
        roll_policy: RollPolicy,
    ) -> Self {
        Self {
            scope,
            students,
            tests,
            selected_test: None,
            roll_policy,
            dirty: false,
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    pub fn roll_policy(&self) -> RollPolicy {
        self.roll_policy
    }

    /// Whether any mutation happened since load or the last save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Title of the test selected for detail view.
    pub fn selected_test(&self) -> Option<&str> {
        self.selected_test.as_deref()
    }

    /// Selects an existing test. Returns `false` for unknown titles.
    pub fn select_test(&mut self, title: &str) -> bool {
        if self.find_test(title).is_none() {
            return false;
        }
        self.selected_test = Some(title.to_string());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected_test = None;
    }

    pub fn find_test(&self, title: &str) -> Option<&Test> {
        self.tests.iter().find(|test| test.title == title)
    }

    /// Roll the next added student would receive.
    pub fn next_roll_no(&self) -> String {
        next_roll_no(self.roll_policy, &self.scope, &self.students)
    }

    /// Appends a new ungraded student with a generated roll.
    ///
    /// Returns `None` when `name` is blank.
    pub fn add_student(&mut self, name: &str) -> Option<&Student> {
        if name.trim().is_empty() {
            return None;
        }

        let roll = self.next_roll_no();
        self.students.push(Student::new(name, roll));
        self.dirty = true;
        self.students.last()
    }

    /// Appends a new test and selects it.
    ///
    /// Returns `None` when `title` is blank, when `raw_max_marks` is not a
    /// positive finite number, or when a test with `title` already exists.
    pub fn add_test(&mut self, title: &str, raw_max_marks: &str) -> Option<&Test> {
        if title.trim().is_empty() {
            return None;
        }
        let max_marks = parse_strict_number(raw_max_marks)
            .filter(|value| value.is_finite() && *value > 0.0)?;
        if self.find_test(title).is_some() {
            return None;
        }

        self.tests.push(Test::new(title, max_marks));
        self.selected_test = Some(title.to_string());
        self.dirty = true;
        self.tests.last()
    }

    /// Removes the test titled `title` and every mark recorded against it.
    ///
    /// Clears the selection when it pointed at the removed test.
    pub fn delete_test(&mut self, title: &str) -> Option<Test> {
        let position = self.tests.iter().position(|test| test.title == title)?;
        let removed = self.tests.remove(position);

        for student in &mut self.students {
            student.clear_mark(title);
        }
        if self.selected_test.as_deref() == Some(title) {
            self.selected_test = None;
        }

        self.dirty = true;
        Some(removed)
    }

    /// Removes the student at `index`. Tests are unaffected.
    pub fn delete_student(&mut self, index: usize) -> Option<Student> {
        if index >= self.students.len() {
            return None;
        }
        self.dirty = true;
        Some(self.students.remove(index))
    }

    /// Stores the parsed `raw_value` as the student's mark for `test_title`.
    ///
    /// The value is stored even when it parses to `NaN` or exceeds the
    /// test's max marks. Returns the stored value, or `None` when `index` is
    /// out of range.
    pub fn update_mark(&mut self, index: usize, test_title: &str, raw_value: &str) -> Option<f64> {
        let student = self.students.get_mut(index)?;
        let value = parse_leading_number(raw_value);
        student.set_mark(test_title, value);
        self.dirty = true;
        Some(value)
    }

    /// Finds the first student whose roll equals `roll` exactly.
    pub fn lookup_by_roll(&self, roll: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.roll == roll)
    }

    /// Consumes the gradebook into its persisted parts.
    pub fn into_parts(self) -> (Scope, Vec<Student>, Vec<Test>) {
        (self.scope, self.students, self.tests)
    }
}
