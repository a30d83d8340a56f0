//! The layout resolver: control values in, rendering grid out.
//!
//! Resolution happens in two steps. First a base resolution is picked: the
//! automatic-mode heuristic, a catalog preset, or the manual slider values.
//! Then the density choice shifts the column count up or down; chart width
//! and height pass through unchanged.
//!
//! The resolver is a pure function. Identical inputs produce identical
//! outputs, and every input is normally pre-constrained by the bounded
//! selector widgets. The validation path only fires when the resolver is
//! driven directly (e.g. from the CLI) with out-of-domain custom values.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::layout::presets::{BaseResolution, ScreenPreset, AUTO_BASE};

/// Valid range for the manual column slider.
pub const MANUAL_COLUMNS: RangeInclusive<u16> = 4..=20;

/// Valid range for the manual chart-width slider.
pub const MANUAL_WIDTH: RangeInclusive<f64> = 1.5..=4.0;

/// Valid range for the manual chart-height slider.
pub const MANUAL_HEIGHT: RangeInclusive<f64> = 2.0..=5.0;

/// Cap on the metrics strip column count.
pub const MAX_METRIC_COLUMNS: u16 = 10;

/// The resolved rendering grid for one render pass.
///
/// Recomputed synchronously on every control change; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct LayoutConfig {
    /// Count of chart cells to render.
    pub columns: u16,
    /// Chart width in layout units.
    pub chart_width: f64,
    /// Chart height in layout units.
    pub chart_height: f64,
}

impl LayoutConfig {
    /// Column count for the metrics strip: the chart column count capped
    /// at [`MAX_METRIC_COLUMNS`].
    pub fn metric_columns(&self) -> u16 {
        self.columns.min(MAX_METRIC_COLUMNS)
    }
}

/// Density dial shifting the resolved column count from its base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    /// Fewer charts: `max(6, base - 4)`.
    Low,
    /// Base column count unchanged.
    Medium,
    /// More charts: `base + 4`. Note there is no upper clamp here, unlike
    /// `Max`; a base of 18 resolves to 22 columns. Kept as documented
    /// behavior of the control logic.
    High,
    /// Maximum charts: `min(20, base + 8)`.
    Max,
}

impl Density {
    /// All densities in dial order.
    pub const ALL: [Density; 4] = [Density::Low, Density::Medium, Density::High, Density::Max];

    /// Human-readable density name.
    pub fn label(self) -> &'static str {
        match self {
            Density::Low => "Low",
            Density::Medium => "Medium",
            Density::High => "High",
            Density::Max => "Max",
        }
    }

    /// Applies this density's column adjustment to a base column count.
    pub fn adjust_columns(self, base: u16) -> u16 {
        match self {
            Density::Low => base.saturating_sub(4).max(6),
            Density::Medium => base,
            Density::High => base + 4,
            Density::Max => (base + 8).min(20),
        }
    }

    /// The next density in dial order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous density in dial order, wrapping around.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error type for parsing Density from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDensityError(pub String);

impl fmt::Display for ParseDensityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown density: {}", self.0)
    }
}

impl std::error::Error for ParseDensityError {}

impl FromStr for Density {
    type Err = ParseDensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Density::Low),
            "medium" => Ok(Density::Medium),
            "high" => Ok(Density::High),
            "max" => Ok(Density::Max),
            _ => Err(ParseDensityError(s.to_string())),
        }
    }
}

/// Manual slider values used when the `Custom` preset is selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualSize {
    /// Column count, valid in [`MANUAL_COLUMNS`].
    pub columns: u16,
    /// Chart width, valid in [`MANUAL_WIDTH`].
    pub width: f64,
    /// Chart height, valid in [`MANUAL_HEIGHT`].
    pub height: f64,
}

impl Default for ManualSize {
    fn default() -> Self {
        Self {
            columns: 12,
            width: 2.5,
            height: 3.5,
        }
    }
}

/// The full set of user-selected control values for one session.
///
/// Passed explicitly into [`resolve`]; there are no ambient globals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    /// When set, resolution uses [`AUTO_BASE`] and ignores every other
    /// field except `density`.
    pub auto_mode: bool,
    /// Selected preset; only consulted when `auto_mode` is off.
    pub preset: ScreenPreset,
    /// Manual slider values; only consulted for the `Custom` preset.
    pub manual: ManualSize,
    /// Density dial.
    pub density: Density,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            auto_mode: true,
            preset: ScreenPreset::UltraWide3440x1440,
            manual: ManualSize::default(),
            density: Density::Medium,
        }
    }
}

/// A control value fell outside its documented domain.
///
/// Only reachable when the resolver is driven directly with custom values;
/// the selector widgets keep interactive input in-domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid configuration: {field} = {value} is outside {min}..={max}")]
pub struct InvalidConfiguration {
    /// Name of the offending field.
    pub field: &'static str,
    /// The rejected value.
    pub value: f64,
    /// Lower bound of the valid domain.
    pub min: f64,
    /// Upper bound of the valid domain.
    pub max: f64,
}

/// Resolves the current control values to a rendering grid.
///
/// Base selection:
/// - automatic mode: [`AUTO_BASE`], a fixed heuristic;
/// - a named preset: catalog lookup;
/// - `Custom`: the manual slider values, validated against their domains.
///
/// The density adjustment then applies to the column count only. The result
/// is not re-clamped beyond what the `Low`/`Max` rules already do, so
/// `High` can legitimately push the column count past 20.
pub fn resolve(controls: &ControlState) -> Result<LayoutConfig, InvalidConfiguration> {
    let base = if controls.auto_mode {
        AUTO_BASE
    } else {
        match controls.preset.base() {
            Some(base) => base,
            None => validated_manual(&controls.manual)?,
        }
    };

    Ok(LayoutConfig {
        columns: controls.density.adjust_columns(base.columns),
        chart_width: base.chart_width,
        chart_height: base.chart_height,
    })
}

/// Checks the manual slider values against their domains.
fn validated_manual(manual: &ManualSize) -> Result<BaseResolution, InvalidConfiguration> {
    if !MANUAL_COLUMNS.contains(&manual.columns) {
        return Err(InvalidConfiguration {
            field: "columns",
            value: f64::from(manual.columns),
            min: f64::from(*MANUAL_COLUMNS.start()),
            max: f64::from(*MANUAL_COLUMNS.end()),
        });
    }
    if !MANUAL_WIDTH.contains(&manual.width) {
        return Err(InvalidConfiguration {
            field: "width",
            value: manual.width,
            min: *MANUAL_WIDTH.start(),
            max: *MANUAL_WIDTH.end(),
        });
    }
    if !MANUAL_HEIGHT.contains(&manual.height) {
        return Err(InvalidConfiguration {
            field: "height",
            value: manual.height,
            min: *MANUAL_HEIGHT.start(),
            max: *MANUAL_HEIGHT.end(),
        });
    }
    Ok(BaseResolution {
        columns: manual.columns,
        chart_width: manual.width,
        chart_height: manual.height,
    })
}
