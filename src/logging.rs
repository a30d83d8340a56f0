//! Logging initialization for the dashboard.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `CHARTWALL_LOG` environment variable. Falls back to the configured
//! level (default `info`) when the variable is unset.
//!
//! # Usage
//!
//! ```bash
//! # Default (info level)
//! chartwall tui
//!
//! # Debug level
//! CHARTWALL_LOG=debug chartwall tui
//!
//! # Module-specific filtering
//! CHARTWALL_LOG=chartwall=debug,warn chartwall tui
//! ```

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LogLevel;

/// Initialize the tracing subscriber.
///
/// Reads the `CHARTWALL_LOG` environment variable for filter directives.
/// Falls back to `default_level` when the variable is unset or invalid.
///
/// Output is written to stderr so it does not interleave with the
/// alternate-screen TUI.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (should only be
/// called once, at startup).
pub fn init(default_level: LogLevel) {
    let filter = EnvFilter::try_from_env("CHARTWALL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_directive()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
