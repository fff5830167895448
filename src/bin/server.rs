//! Timetable Skill Server Binary
//!
//! Entry point for the voice-skill webhook server. It loads the base
//! timetable, creates the in-memory change store, and starts serving the
//! platform webhook.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin timetable-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `TIMETABLE_PATH`: Base timetable TOML file (default: timetable.toml)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use timetable_skill::config::SkillConfig;
use timetable_skill::http::{create_router, AppState};
use timetable_skill::models::Timetable;
use timetable_skill::services::{ScheduleEngine, SystemClock};
use timetable_skill::store::ChangeStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting timetable skill server");

    let config = SkillConfig::from_env()?;
    let timetable = Timetable::from_path(&config.timetable_path)?;
    info!(
        "Loaded timetable from {} ({} days with lessons)",
        config.timetable_path.display(),
        timetable.days_with_lessons()
    );

    // The change store lives for the process lifetime; edits are volatile by
    // design and a restart discards them.
    let engine = ScheduleEngine::new(Arc::new(timetable), ChangeStore::new());
    let state = AppState::new(engine, Arc::new(SystemClock));
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
