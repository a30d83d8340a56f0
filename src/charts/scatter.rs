//! Scatter chart cell.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType};
use ratatui::Frame;

use crate::charts::data::{scatter_points, DemoRng};
use crate::charts::{series_color, ChartCell, ChartKind};

/// A cloud of roughly-normal points.
#[derive(Debug, Clone)]
pub struct ScatterCell {
    index: usize,
    points: Vec<(f64, f64)>,
}

impl ScatterCell {
    /// Generates the point cloud for grid position `index`.
    pub fn generate(index: usize, rng: &mut DemoRng) -> Self {
        Self {
            index,
            points: scatter_points(rng),
        }
    }

    /// The generated points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

impl ChartCell for ScatterCell {
    fn kind(&self) -> ChartKind {
        ChartKind::Scatter
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let color = series_color(self.index);
        let dataset = Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(color))
            .data(&self.points);
        let chart = Chart::new(vec![dataset])
            .block(Block::new().title(format!("{} {}", self.kind().label(), self.index + 1)))
            .x_axis(Axis::default().bounds([-3.0, 3.0]))
            .y_axis(Axis::default().bounds([-3.0, 3.0]));
        frame.render_widget(chart, area);
    }
}
