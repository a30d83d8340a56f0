//! Chartwall demo dashboard library
//!
//! This crate renders a configurable grid of deterministic demo charts and
//! metric widgets in the terminal. Sidebar controls adjust the column count
//! and chart size either automatically or through resolution presets and
//! manual sliders, with a density dial on top.
//!
//! The one piece of real contract in here is the [`layout`] module: a pure
//! resolver that maps the current control values to a concrete rendering
//! grid. Everything else (chart drawing, sidebar chrome, tips) consumes the
//! resolved [`layout::LayoutConfig`] and has no contract of its own.

/// Demo chart content: kinds, deterministic data generation, cell widgets.
pub mod charts;

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Layout resolution: presets, density rules, and the resolver itself.
pub mod layout;

/// Tracing subscriber initialization.
pub mod logging;

/// TUI module providing the terminal user interface for the dashboard.
pub mod tui;

pub use layout::{
    resolve, ControlState, Density, InvalidConfiguration, LayoutConfig, ManualSize, ScreenPreset,
};
