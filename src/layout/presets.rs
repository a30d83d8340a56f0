//! Resolution preset catalog.
//!
//! Each named preset pairs a common display resolution with a base column
//! count and chart dimensions. The catalog is static lookup data: presets
//! are never created or destroyed at runtime. `Custom` is a sentinel that
//! routes resolution through the manual slider values instead.

use std::fmt;
use std::str::FromStr;

/// A base rendering resolution: column count plus chart dimensions.
///
/// Produced by the preset catalog, the automatic-mode heuristic, or the
/// manual sliders, and consumed by the resolver's density adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseResolution {
    /// Count of chart columns before density adjustment.
    pub columns: u16,
    /// Chart width in layout units.
    pub chart_width: f64,
    /// Chart height in layout units.
    pub chart_height: f64,
}

/// Base resolution used by automatic mode.
///
/// This is a fixed heuristic tuned for ultra-wide displays, not a measured
/// screen size. No terminal or display introspection happens anywhere.
pub const AUTO_BASE: BaseResolution = BaseResolution {
    columns: 12,
    chart_width: 2.5,
    chart_height: 3.5,
};

/// Named resolution presets plus the `Custom` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScreenPreset {
    /// 3440x1440 ultra-wide display.
    #[serde(rename = "ultra-wide-3440x1440")]
    UltraWide3440x1440,
    /// 2560x1080 ultra-wide display.
    #[serde(rename = "ultra-wide-2560x1080")]
    UltraWide2560x1080,
    /// 3840x2160 4K display.
    #[serde(rename = "4k-3840x2160")]
    FourK3840x2160,
    /// 2560x1440 QHD display.
    #[serde(rename = "qhd-2560x1440")]
    Qhd2560x1440,
    /// 1920x1080 Full HD display.
    #[serde(rename = "full-hd-1920x1080")]
    FullHd1920x1080,
    /// Manual configuration via sliders.
    #[serde(rename = "custom")]
    Custom,
}

impl ScreenPreset {
    /// All presets in selector order. `Custom` is last.
    pub const ALL: [ScreenPreset; 6] = [
        ScreenPreset::UltraWide3440x1440,
        ScreenPreset::UltraWide2560x1080,
        ScreenPreset::FourK3840x2160,
        ScreenPreset::Qhd2560x1440,
        ScreenPreset::FullHd1920x1080,
        ScreenPreset::Custom,
    ];

    /// Human-readable preset name.
    pub fn label(self) -> &'static str {
        match self {
            ScreenPreset::UltraWide3440x1440 => "Ultra Wide 3440x1440",
            ScreenPreset::UltraWide2560x1080 => "Ultra Wide 2560x1080",
            ScreenPreset::FourK3840x2160 => "4K 3840x2160",
            ScreenPreset::Qhd2560x1440 => "QHD 2560x1440",
            ScreenPreset::FullHd1920x1080 => "Full HD 1920x1080",
            ScreenPreset::Custom => "Custom",
        }
    }

    /// Catalog lookup for this preset's base resolution.
    ///
    /// Returns `None` for `Custom`, whose base comes from the manual
    /// slider values instead.
    pub fn base(self) -> Option<BaseResolution> {
        let base = match self {
            ScreenPreset::UltraWide3440x1440 => BaseResolution {
                columns: 14,
                chart_width: 2.2,
                chart_height: 3.2,
            },
            ScreenPreset::UltraWide2560x1080 => BaseResolution {
                columns: 12,
                chart_width: 2.5,
                chart_height: 3.0,
            },
            ScreenPreset::FourK3840x2160 => BaseResolution {
                columns: 16,
                chart_width: 2.0,
                chart_height: 3.0,
            },
            ScreenPreset::Qhd2560x1440 => BaseResolution {
                columns: 10,
                chart_width: 2.8,
                chart_height: 3.5,
            },
            ScreenPreset::FullHd1920x1080 => BaseResolution {
                columns: 8,
                chart_width: 3.0,
                chart_height: 3.8,
            },
            ScreenPreset::Custom => return None,
        };
        Some(base)
    }

    /// The next preset in selector order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL
            .iter()
            .position(|p| *p == self)
            .unwrap_or(Self::ALL.len() - 1);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous preset in selector order, wrapping around.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ScreenPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error type for parsing ScreenPreset from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePresetError(pub String);

impl fmt::Display for ParsePresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown preset: {}", self.0)
    }
}

impl std::error::Error for ParsePresetError {}

impl FromStr for ScreenPreset {
    type Err = ParsePresetError;

    /// Accepts both the kebab-case identifier used in configuration files
    /// and the human-readable label shown in the selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ultra-wide-3440x1440" | "ultra wide 3440x1440" => {
                Ok(ScreenPreset::UltraWide3440x1440)
            }
            "ultra-wide-2560x1080" | "ultra wide 2560x1080" => {
                Ok(ScreenPreset::UltraWide2560x1080)
            }
            "4k-3840x2160" | "4k 3840x2160" => Ok(ScreenPreset::FourK3840x2160),
            "qhd-2560x1440" | "qhd 2560x1440" => Ok(ScreenPreset::Qhd2560x1440),
            "full-hd-1920x1080" | "full hd 1920x1080" => Ok(ScreenPreset::FullHd1920x1080),
            "custom" => Ok(ScreenPreset::Custom),
            _ => Err(ParsePresetError(s.to_string())),
        }
    }
}
