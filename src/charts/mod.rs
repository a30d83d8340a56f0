//! Demo chart cells for the dashboard grid.
//!
//! Each grid cell renders one chart, with the chart kind cycling through a
//! fixed four-way rotation indexed by cell position. All chart content is
//! deterministic filler derived from a seed, so a render pass is
//! reproducible and a reseed regenerates the whole wall at once.

pub mod bar;
pub mod data;
pub mod line;
pub mod pie;
pub mod scatter;

pub use data::{DemoRng, DEFAULT_SEED};

use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Frame;

/// Chart kinds in rotation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Vertical bar chart with five bars.
    Bar,
    /// Sine-ish line with per-cell phase offset.
    Line,
    /// Scatter cloud of roughly-normal points.
    Scatter,
    /// Three-share pie drawn on a braille canvas.
    Pie,
}

impl ChartKind {
    /// The fixed four-way rotation applied across the grid.
    pub const ROTATION: [ChartKind; 4] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Scatter,
        ChartKind::Pie,
    ];

    /// Chart kind for the cell at `index` (position modulo 4).
    pub fn for_cell(index: usize) -> ChartKind {
        Self::ROTATION[index % Self::ROTATION.len()]
    }

    /// Short label used in cell titles.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bars",
            ChartKind::Line => "Line",
            ChartKind::Scatter => "Scatter",
            ChartKind::Pie => "Pie",
        }
    }
}

/// Trait for chart cells in the dashboard grid.
///
/// A cell owns its generated data and renders itself into the rect the
/// grid hands it. Cells are rebuilt from the seed on every render pass,
/// so they carry no cross-frame state.
pub trait ChartCell {
    /// The kind of chart this cell draws.
    fn kind(&self) -> ChartKind;

    /// Render the cell into the given area.
    fn render(&self, frame: &mut Frame, area: Rect);
}

/// Builds the chart cell for grid position `index` from the wall seed.
pub fn build_cell(index: usize, seed: u64) -> Box<dyn ChartCell> {
    let mut rng = DemoRng::for_cell(seed, index);
    match ChartKind::for_cell(index) {
        ChartKind::Bar => Box::new(bar::BarCell::generate(index, &mut rng)),
        ChartKind::Line => Box::new(line::LineCell::generate(index, &mut rng)),
        ChartKind::Scatter => Box::new(scatter::ScatterCell::generate(index, &mut rng)),
        ChartKind::Pie => Box::new(pie::PieCell::generate(index, &mut rng)),
    }
}

/// Ten-color series palette, cycled by cell index.
const SERIES_CYCLE: [Color; 10] = [
    Color::Blue,
    Color::Yellow,
    Color::Green,
    Color::Red,
    Color::Magenta,
    Color::Cyan,
    Color::LightBlue,
    Color::LightYellow,
    Color::LightGreen,
    Color::LightRed,
];

/// Series color for the cell at `index`.
pub fn series_color(index: usize) -> Color {
    SERIES_CYCLE[index % SERIES_CYCLE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_order() {
        assert_eq!(ChartKind::for_cell(0), ChartKind::Bar);
        assert_eq!(ChartKind::for_cell(1), ChartKind::Line);
        assert_eq!(ChartKind::for_cell(2), ChartKind::Scatter);
        assert_eq!(ChartKind::for_cell(3), ChartKind::Pie);
    }

    #[test]
    fn test_rotation_wraps_modulo_four() {
        for index in 0..16 {
            assert_eq!(ChartKind::for_cell(index), ChartKind::for_cell(index + 4));
        }
    }

    #[test]
    fn test_build_cell_kind_matches_rotation() {
        for index in 0..8 {
            let cell = build_cell(index, DEFAULT_SEED);
            assert_eq!(cell.kind(), ChartKind::for_cell(index));
        }
    }

    #[test]
    fn test_series_color_cycles() {
        assert_eq!(series_color(0), series_color(10));
        assert_eq!(series_color(3), series_color(13));
        assert_ne!(series_color(0), series_color(1));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ChartKind::Bar.label(), "Bars");
        assert_eq!(ChartKind::Pie.label(), "Pie");
    }
}
