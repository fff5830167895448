//! Base timetable: the read-only source-of-truth weekly schedule.
//!
//! The timetable is supplied externally as a TOML document and never mutated
//! by the core; temporary edits live in the change store and are overlaid at
//! render time.

use anyhow::{Context, Result};
use chrono::Weekday;
use std::collections::HashMap;
use std::path::Path;

/// Serde shape of the timetable file.
///
/// ```toml
/// [days]
/// monday = ["Математика", "Русский язык", "Физика"]
/// tuesday = ["Химия", "Биология"]
/// ```
#[derive(serde::Deserialize)]
struct TimetableInput {
    #[serde(default)]
    days: DaysInput,
}

#[derive(Default, serde::Deserialize)]
struct DaysInput {
    #[serde(default)]
    monday: Vec<String>,
    #[serde(default)]
    tuesday: Vec<String>,
    #[serde(default)]
    wednesday: Vec<String>,
    #[serde(default)]
    thursday: Vec<String>,
    #[serde(default)]
    friday: Vec<String>,
    #[serde(default)]
    saturday: Vec<String>,
    #[serde(default)]
    sunday: Vec<String>,
}

/// Ordered lesson names per weekday. Duplicate names within a day are
/// allowed and positionally significant.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    days: HashMap<Weekday, Vec<String>>,
}

impl Timetable {
    /// Empty timetable (no lessons on any day).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the lesson list for one day. Builder-style, used mostly by
    /// tests and embedding callers.
    pub fn with_day<S: Into<String>>(
        mut self,
        day: Weekday,
        lessons: impl IntoIterator<Item = S>,
    ) -> Self {
        self.days
            .insert(day, lessons.into_iter().map(Into::into).collect());
        self
    }

    /// Parse a timetable from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let input: TimetableInput =
            toml::from_str(toml_str).context("Invalid timetable TOML")?;
        let d = input.days;
        let mut days = HashMap::new();
        for (day, lessons) in [
            (Weekday::Mon, d.monday),
            (Weekday::Tue, d.tuesday),
            (Weekday::Wed, d.wednesday),
            (Weekday::Thu, d.thursday),
            (Weekday::Fri, d.friday),
            (Weekday::Sat, d.saturday),
            (Weekday::Sun, d.sunday),
        ] {
            if !lessons.is_empty() {
                days.insert(day, lessons);
            }
        }
        Ok(Self { days })
    }

    /// Load a timetable from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read timetable file {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Lessons scheduled for `day`, in display order. Empty slice when the
    /// day has no lessons.
    pub fn lessons(&self, day: Weekday) -> &[String] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of days that have at least one lesson.
    pub fn days_with_lessons(&self) -> usize {
        self.days.len()
    }
}
