//! Core engine: day resolution, command interpretation, rendering, and
//! per-request dialogue orchestration.

pub mod clock;
pub mod dialogue;
pub mod engine;
pub mod interpreter;
pub mod resolver;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dialogue::{handle_utterance, SkillReply};
pub use engine::{EditOutcome, ScheduleEngine};
pub use interpreter::{interpret_command, EditRequest};
pub use resolver::{resolve, resolve_day, ResolvedDay};
