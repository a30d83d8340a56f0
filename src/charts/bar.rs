//! Bar chart cell.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{BarChart, Block};
use ratatui::Frame;

use crate::charts::data::{bar_values, DemoRng};
use crate::charts::{series_color, ChartCell, ChartKind};

/// A five-bar vertical bar chart.
#[derive(Debug, Clone)]
pub struct BarCell {
    index: usize,
    values: Vec<u64>,
}

impl BarCell {
    /// Generates the bar data for grid position `index`.
    pub fn generate(index: usize, rng: &mut DemoRng) -> Self {
        Self {
            index,
            values: bar_values(rng),
        }
    }

    /// The generated bar values.
    pub fn values(&self) -> &[u64] {
        &self.values
    }
}

impl ChartCell for BarCell {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let color = series_color(self.index);
        let data: Vec<(&str, u64)> = self.values.iter().map(|v| ("", *v)).collect();
        let chart = BarChart::default()
            .block(Block::new().title(format!("{} {}", self.kind().label(), self.index + 1)))
            .bar_width(1)
            .bar_gap(1)
            .bar_style(Style::default().fg(color))
            .value_style(Style::default().fg(color))
            .data(data.as_slice());
        frame.render_widget(chart, area);
    }
}
