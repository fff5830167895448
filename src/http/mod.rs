//! Webhook server module for the voice platform.
//!
//! This module provides an axum-based HTTP server exposing the skill as a
//! single voice-platform webhook plus a health endpoint. It is thin
//! transport glue: request parsing, envelope construction, and suggestion
//! buttons live here; all scheduling logic lives in the core services.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! │  - Webhook envelope parsing/serialization                │
//! │  - Greeting, suggestion buttons, fallback error text     │
//! │  - CORS, compression, request tracing                    │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Core services (services/)                               │
//! │  - Weekly reset gate, command interpretation             │
//! │  - Day resolution, schedule rendering                    │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Change store (store/) + base timetable (models/)        │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
