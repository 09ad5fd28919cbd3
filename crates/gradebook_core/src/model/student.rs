//! Student record.
//!
//! # Invariants
//! - `marks` holds an entry only for tests the student was graded on.
//! - A non-finite mark (`NaN`, `±Infinity`) is kept as entered and counts as
//!   ungraded everywhere.
//! - On the wire a non-finite mark is `null`, and `null` reads back as `NaN`,
//!   so a reload never changes what counts as graded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from test title to score.
pub type Marks = BTreeMap<String, f64>;

/// One student within a scope.
///
/// Field names are the persisted blob's field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Display name; not required to be unique.
    pub name: String,
    /// Roll number generated at creation time.
    pub roll: String,
    #[serde(default, with = "nullable_marks")]
    pub marks: Marks,
}

impl Student {
    /// Creates an ungraded student.
    pub fn new(name: impl Into<String>, roll: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roll: roll.into(),
            marks: Marks::new(),
        }
    }

    /// Returns the stored value for `title`, non-finite values included.
    pub fn mark(&self, title: &str) -> Option<f64> {
        self.marks.get(title).copied()
    }

    /// Returns the mark for `title` only when it is finite.
    pub fn graded_mark(&self, title: &str) -> Option<f64> {
        self.mark(title).filter(|value| value.is_finite())
    }

    pub fn set_mark(&mut self, title: impl Into<String>, value: f64) {
        self.marks.insert(title.into(), value);
    }

    /// Removes the mark for `title`, returning the previous value.
    pub fn clear_mark(&mut self, title: &str) -> Option<f64> {
        self.marks.remove(title)
    }
}

mod nullable_marks {
    use super::Marks;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(marks: &Marks, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire: BTreeMap<&str, Option<f64>> = marks
            .iter()
            .map(|(title, value)| (title.as_str(), Some(*value).filter(|v| v.is_finite())))
            .collect();
        wire.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Marks, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = BTreeMap::<String, Option<f64>>::deserialize(deserializer)?;
        Ok(wire
            .into_iter()
            .map(|(title, value)| (title, value.unwrap_or(f64::NAN)))
            .collect())
    }
}
