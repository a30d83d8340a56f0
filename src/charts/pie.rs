//! Pie chart cell.
//!
//! The terminal has no native pie widget, so the disc is painted on a
//! braille canvas: radial sample points are bucketed into segments by
//! angle, one color per share, with the share letter printed near each
//! segment's centroid.

use std::f64::consts::TAU;

use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::charts::data::{pie_shares, DemoRng};
use crate::charts::{series_color, ChartCell, ChartKind};

/// Share labels in segment order.
const SHARE_LABELS: [&str; 3] = ["A", "B", "C"];

/// Angular sampling steps around the disc.
const ANGLE_STEPS: usize = 180;

/// Radial sampling rings.
const RADII: [f64; 4] = [0.3, 0.55, 0.8, 1.0];

/// Radius at which the share labels are printed.
const LABEL_RADIUS: f64 = 0.55;

/// One colored segment of the disc.
#[derive(Debug, Clone)]
struct Segment {
    coords: Vec<(f64, f64)>,
    /// Mid-angle of the segment, for label placement.
    mid_angle: f64,
    /// Share of the whole disc in [0, 1].
    fraction: f64,
}

/// A three-share pie on a braille canvas.
#[derive(Debug, Clone)]
pub struct PieCell {
    index: usize,
    shares: [u64; 3],
    segments: Vec<Segment>,
}

impl PieCell {
    /// Generates the pie shares for grid position `index`.
    pub fn generate(index: usize, rng: &mut DemoRng) -> Self {
        let shares = pie_shares(rng);
        let segments = build_segments(&shares);
        Self {
            index,
            shares,
            segments,
        }
    }

    /// The generated shares.
    pub fn shares(&self) -> &[u64; 3] {
        &self.shares
    }
}

/// Buckets disc sample points into per-share segments.
fn build_segments(shares: &[u64; 3]) -> Vec<Segment> {
    let total: u64 = shares.iter().sum();
    let mut segments = Vec::with_capacity(shares.len());
    let mut start = 0.0;

    for share in shares {
        let fraction = *share as f64 / total as f64;
        let end = start + fraction;
        let mut coords = Vec::new();
        for step in 0..ANGLE_STEPS {
            let turn = step as f64 / ANGLE_STEPS as f64;
            if turn < start || turn >= end {
                continue;
            }
            let angle = turn * TAU;
            for r in RADII {
                coords.push((r * angle.cos(), r * angle.sin()));
            }
        }
        segments.push(Segment {
            coords,
            mid_angle: (start + end) / 2.0 * TAU,
            fraction,
        });
        start = end;
    }
    segments
}

impl ChartCell for PieCell {
    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let canvas = Canvas::default()
            .block(Block::new().title(format!("{} {}", self.kind().label(), self.index + 1)))
            .marker(Marker::Braille)
            .x_bounds([-1.3, 1.3])
            .y_bounds([-1.3, 1.3])
            .paint(|ctx| {
                for (i, segment) in self.segments.iter().enumerate() {
                    ctx.draw(&Points {
                        coords: &segment.coords,
                        color: series_color(self.index + i),
                    });
                }
                for (i, segment) in self.segments.iter().enumerate() {
                    let label = format!(
                        "{} {:.0}%",
                        SHARE_LABELS[i],
                        segment.fraction * 100.0
                    );
                    ctx.print(
                        LABEL_RADIUS * segment.mid_angle.cos(),
                        LABEL_RADIUS * segment.mid_angle.sin(),
                        label,
                    );
                }
            });
        frame.render_widget(canvas, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::data::DEFAULT_SEED;

    #[test]
    fn test_generate_is_deterministic() {
        let mut rng_a = DemoRng::for_cell(DEFAULT_SEED, 3);
        let mut rng_b = DemoRng::for_cell(DEFAULT_SEED, 3);
        let a = PieCell::generate(3, &mut rng_a);
        let b = PieCell::generate(3, &mut rng_b);
        assert_eq!(a.shares(), b.shares());
    }

    #[test]
    fn test_segments_cover_the_whole_disc() {
        let segments = build_segments(&[1, 1, 2]);
        assert_eq!(segments.len(), 3);
        let total: f64 = segments.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9, "fractions sum to 1: {total}");
        // Every sampled angle lands in exactly one segment
        let sampled: usize = segments.iter().map(|s| s.coords.len()).sum();
        assert_eq!(sampled, ANGLE_STEPS * RADII.len());
    }

    #[test]
    fn test_segment_fractions_follow_shares() {
        let segments = build_segments(&[2, 1, 1]);
        assert!((segments[0].fraction - 0.5).abs() < 1e-9);
        assert!((segments[1].fraction - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_render_no_panic_in_tiny_area() {
        let backend = ratatui::backend::TestBackend::new(6, 3);
        let mut terminal =
            ratatui::Terminal::new(backend).expect("failed to create test terminal");
        let mut rng = DemoRng::for_cell(DEFAULT_SEED, 3);
        let cell = PieCell::generate(3, &mut rng);
        terminal
            .draw(|frame| cell.render(frame, frame.area()))
            .expect("draw should not fail");
    }
}
