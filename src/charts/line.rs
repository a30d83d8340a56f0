//! Line chart cell.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType};
use ratatui::Frame;

use crate::charts::data::{line_points, DemoRng};
use crate::charts::{series_color, ChartCell, ChartKind};

/// A sine-ish line with per-cell phase offset.
#[derive(Debug, Clone)]
pub struct LineCell {
    index: usize,
    points: Vec<(f64, f64)>,
}

impl LineCell {
    /// Generates the line samples for grid position `index`.
    pub fn generate(index: usize, rng: &mut DemoRng) -> Self {
        Self {
            index,
            points: line_points(rng, index),
        }
    }

    /// The generated samples.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

impl ChartCell for LineCell {
    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let color = series_color(self.index);
        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&self.points);
        let chart = Chart::new(vec![dataset])
            .block(Block::new().title(format!("{} {}", self.kind().label(), self.index + 1)))
            .x_axis(Axis::default().bounds([0.0, 10.0]))
            .y_axis(Axis::default().bounds([-1.6, 1.6]));
        frame.render_widget(chart, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::data::DEFAULT_SEED;

    #[test]
    fn test_generate_is_deterministic() {
        let mut rng_a = DemoRng::for_cell(DEFAULT_SEED, 1);
        let mut rng_b = DemoRng::for_cell(DEFAULT_SEED, 1);
        let a = LineCell::generate(1, &mut rng_a);
        let b = LineCell::generate(1, &mut rng_b);
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn test_render_no_panic_in_tiny_area() {
        let backend = ratatui::backend::TestBackend::new(5, 3);
        let mut terminal =
            ratatui::Terminal::new(backend).expect("failed to create test terminal");
        let mut rng = DemoRng::for_cell(DEFAULT_SEED, 1);
        let cell = LineCell::generate(1, &mut rng);
        terminal
            .draw(|frame| cell.render(frame, frame.area()))
            .expect("draw should not fail");
    }
}
