//! Schedule rendering and edit application.
//!
//! The engine overlays pending substitutions from the change store onto the
//! read-only base timetable. The base list is always copied, never mutated.

use std::sync::Arc;

use chrono::Weekday;

use crate::models::Timetable;
use crate::store::ChangeStore;

/// Result of an edit attempt against a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The substitution was recorded at this position of the base list.
    Applied { position: usize },
    /// No lesson on that day contained the requested text.
    NotFound,
}

/// Read side of the core: the base timetable plus the shared change store.
#[derive(Clone)]
pub struct ScheduleEngine {
    timetable: Arc<Timetable>,
    store: ChangeStore,
}

impl ScheduleEngine {
    pub fn new(timetable: Arc<Timetable>, store: ChangeStore) -> Self {
        Self { timetable, store }
    }

    pub fn store(&self) -> &ChangeStore {
        &self.store
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    /// Lessons for `day` with all pending substitutions applied in insertion
    /// order, so a later substitution at the same position wins. Entries
    /// whose position falls outside the base list are skipped; the store is
    /// unguarded and tolerating them beats failing the whole render.
    pub fn render(&self, day: Weekday) -> Vec<String> {
        let mut lessons: Vec<String> = self.timetable.lessons(day).to_vec();
        for substitution in self.store.substitutions_for(day) {
            if substitution.position < lessons.len() {
                lessons[substitution.position] = substitution.replacement;
            }
        }
        lessons
    }

    /// Record a substitution for the first base lesson of `day` that
    /// contains `old_lesson` (case-insensitive). The scan deliberately runs
    /// over the unmodified base list, not the rendered one, so repeated
    /// edits of the same lesson target the same position.
    pub fn apply_edit(&self, day: Weekday, old_lesson: &str, new_lesson: &str) -> EditOutcome {
        let needle = old_lesson.to_lowercase();
        let position = self
            .timetable
            .lessons(day)
            .iter()
            .position(|lesson| lesson.to_lowercase().contains(&needle));

        match position {
            Some(position) => {
                self.store.record_substitution(day, position, new_lesson);
                EditOutcome::Applied { position }
            }
            None => EditOutcome::NotFound,
        }
    }
}
