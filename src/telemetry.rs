//! Tracing bootstrap. Logs go to stderr so stdout carries only the game.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// `RUST_LOG` wins, then the configured level, then `warn`.
pub fn init(log_level: Option<&str>) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = log_level.unwrap_or(DEFAULT_FILTER);
            EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    tracing::debug!(target: "telemetry", log_level = ?log_level, "telemetry initialized");
    Ok(())
}
