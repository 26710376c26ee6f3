pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod schema;

use std::str::FromStr;

use tracing::Level;

use crate::config::Config;

pub use crate::error::{AppError, AppResult};

/// Log level named by the configuration, `info` when unrecognised.
pub fn log_level(config: &Config) -> Level {
    Level::from_str(config.logging().level.trim()).unwrap_or(Level::INFO)
}

pub fn init_tracing(config: &Config) {
    let level = log_level(config);

    // A subscriber may already be installed by the host application.
    let result = match config.logging().format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .try_init(),
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
