//! Application state for the webhook server.

use std::sync::Arc;

use crate::services::{Clock, ScheduleEngine};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Core engine: base timetable plus the shared change store
    pub engine: ScheduleEngine,
    /// Source of the current date for the reset gate and relative days
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(engine: ScheduleEngine, clock: Arc<dyn Clock>) -> Self {
        Self { engine, clock }
    }
}
