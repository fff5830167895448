//! # School Timetable Skill Backend
//!
//! Backend for a Russian-language voice-assistant skill that reads out a
//! weekly class timetable and accepts temporary, free-text edit commands
//! ("замени математику на физику в понедельник"). Edits live in an in-memory
//! change store and expire automatically at the start of each school week.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Weekday vocabulary and the read-only base timetable
//! - [`store`]: In-memory change store with the weekly reset gate
//! - [`services`]: Core engine: day resolution, command interpretation,
//!   rendering, and per-request dialogue orchestration
//! - [`config`]: Environment-driven server configuration
//! - [`http`]: Axum-based webhook endpoint for the voice platform
//!
//! The core is pure and synchronous; the HTTP layer is thin glue that hands
//! it the utterance, the current date, and the shared change store.

pub mod config;
pub mod models;
pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
