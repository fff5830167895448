//! Domain models: weekday vocabulary and the base timetable.

pub mod timetable;
pub mod weekday;

pub use timetable::Timetable;
pub use weekday::{find_weekday, ru_name, DayReference, WEEK};
