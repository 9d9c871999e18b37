//! Structured logging bring-up.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber before any module work runs
//! - Apply the configured level filter (RUST_LOG wins when set)
//! - Toggle console output from config
//!
//! Module registration performs no I/O and is safe before this runs;
//! everything else in the host logs through tracing and must come after.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogConfig;

/// Initialize the global tracing subscriber from logging config.
///
/// Fails if the configured level is not a valid filter directive, or if a
/// global subscriber is already installed.
pub fn init(cfg: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cfg.level)?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    if cfg.console {
        registry.with(tracing_subscriber::fmt::layer()).try_init()?;
    } else {
        registry.try_init()?;
    }

    Ok(())
}
