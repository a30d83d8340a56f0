//! TOML configuration schema for the dashboard.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a missing file, an empty file and a partial file
//! all yield usable values. The `[controls]` section seeds the session's
//! control state; the dashboard never writes it back.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::layout::{ControlState, Density, ManualSize, ScreenPreset};

/// Fallback render tick rate when the configured value fails to parse.
const FALLBACK_TICK_RATE: Duration = Duration::from_millis(250);

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [controls]
/// [tui]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Initial control values for the session.
    pub controls: ControlsConfig,
    /// TUI behavior settings.
    pub tui: TuiConfig,
    /// Logging settings.
    pub log: LogConfig,
}

/// Initial values for the dashboard controls.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ControlsConfig {
    /// Start in automatic mode.
    pub auto_mode: bool,
    /// Initially selected preset (used once automatic mode is turned off).
    pub preset: ScreenPreset,
    /// Initial manual column slider value.
    pub columns: u16,
    /// Initial manual chart-width slider value.
    pub width: f64,
    /// Initial manual chart-height slider value.
    pub height: f64,
    /// Initial density choice.
    pub density: Density,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            auto_mode: true,
            preset: ScreenPreset::UltraWide3440x1440,
            columns: 12,
            width: 2.5,
            height: 3.5,
            density: Density::Medium,
        }
    }
}

impl ControlsConfig {
    /// Builds the session control state from the configured values.
    ///
    /// Values are passed through as-is; out-of-domain manual values are
    /// caught by the resolver when the `Custom` preset is active.
    pub fn control_state(&self) -> ControlState {
        ControlState {
            auto_mode: self.auto_mode,
            preset: self.preset,
            manual: ManualSize {
                columns: self.columns,
                width: self.width,
                height: self.height,
            },
            density: self.density,
        }
    }
}

/// TUI behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Render tick rate as a human-readable duration (e.g. `"250ms"`).
    pub tick_rate: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
        }
    }
}

impl TuiConfig {
    /// Parses the configured tick rate, falling back to 250ms on error.
    pub fn tick_rate_duration(&self) -> Duration {
        match humantime::parse_duration(&self.tick_rate) {
            Ok(duration) => duration,
            Err(e) => {
                tracing::warn!("invalid tick_rate '{}': {e}", self.tick_rate);
                FALLBACK_TICK_RATE
            }
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Logging verbosity used when `CHARTWALL_LOG` is unset.
    pub level: LogLevel,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    #[default]
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive string for the tracing subscriber.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
