//! In-memory change store for temporary timetable edits.
//!
//! Pending substitutions live for at most one school week: the first request
//! that arrives on a Monday wipes the whole store before any other logic
//! runs. Nothing is persisted; a process restart also discards all edits.

use chrono::{Datelike, NaiveDate, Weekday};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// A positional lesson replacement recorded for a single day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Substitution {
    /// Index into the day's base lesson list.
    pub position: usize,
    /// Text shown instead of the base lesson at that position.
    pub replacement: String,
}

#[derive(Default)]
struct StoreState {
    /// Per-day substitutions in insertion order. A later entry for the same
    /// position overrides an earlier one at render time.
    substitutions: HashMap<Weekday, Vec<Substitution>>,
    /// One marker per calendar week, keyed by that week's Monday. Presence
    /// means the weekly reset already fired.
    reset_markers: HashSet<NaiveDate>,
}

/// Shared in-memory change store. Cloning the handle shares the same
/// underlying state.
#[derive(Clone, Default)]
pub struct ChangeStore {
    state: Arc<RwLock<StoreState>>,
}

impl ChangeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Weekly reset gate. If `today` is a Monday and no reset has fired for
    /// this week yet, discard every pending substitution and every old
    /// marker, then seed exactly one marker for `today`.
    ///
    /// Returns whether a reset occurred. The clear and the marker insert
    /// happen under one write lock so a concurrent edit can never land in a
    /// half-reset store.
    pub fn apply_reset(&self, today: NaiveDate) -> bool {
        if today.weekday() != Weekday::Mon {
            return false;
        }
        let mut state = self.state.write();
        if state.reset_markers.contains(&today) {
            return false;
        }
        state.substitutions.clear();
        state.reset_markers.clear();
        state.reset_markers.insert(today);
        true
    }

    /// Append a substitution for `day`. Unconditional: no existence checks
    /// and no deduplication.
    pub fn record_substitution(
        &self,
        day: Weekday,
        position: usize,
        replacement: impl Into<String>,
    ) {
        self.state
            .write()
            .substitutions
            .entry(day)
            .or_default()
            .push(Substitution {
                position,
                replacement: replacement.into(),
            });
    }

    /// Snapshot of `day`'s substitutions in insertion order.
    pub fn substitutions_for(&self, day: Weekday) -> Vec<Substitution> {
        self.state
            .read()
            .substitutions
            .get(&day)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether the weekly reset already fired for the week starting at
    /// `monday`.
    pub fn has_reset_marker(&self, monday: NaiveDate) -> bool {
        self.state.read().reset_markers.contains(&monday)
    }
}
