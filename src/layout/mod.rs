//! Layout system for the dashboard.
//!
//! Maps the user-selected mode, resolution preset, manual slider values and
//! density choice to a concrete rendering grid (column count plus chart
//! dimensions). The mapping is a pure function recomputed from scratch on
//! every interaction; there is no hidden state.

mod presets;
mod resolver;

pub use presets::{BaseResolution, ParsePresetError, ScreenPreset, AUTO_BASE};
pub use resolver::{
    resolve, ControlState, Density, InvalidConfiguration, LayoutConfig, ManualSize,
    ParseDensityError, MANUAL_COLUMNS, MANUAL_HEIGHT, MANUAL_WIDTH, MAX_METRIC_COLUMNS,
};
