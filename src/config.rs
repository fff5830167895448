//! Server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Configuration error for invalid environment values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid port number, got '{value}'")]
    InvalidPort { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct SkillConfig {
    /// Server bind host
    pub host: String,
    /// Server bind port
    pub port: u16,
    /// Path to the base timetable TOML file
    pub timetable_path: PathBuf,
}

impl SkillConfig {
    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): Server bind host
    /// - `PORT` (optional, default: 8080): Server bind port
    /// - `TIMETABLE_PATH` (optional, default: timetable.toml): Base
    ///   timetable TOML file
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                name: "PORT",
                value,
            })?,
            Err(_) => 8080,
        };
        let timetable_path = env::var("TIMETABLE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("timetable.toml"));

        Ok(Self {
            host,
            port,
            timetable_path,
        })
    }
}
