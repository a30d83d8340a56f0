//! Main rendering orchestration for the TUI dashboard.
//!
//! Composes the header, sidebar controls, chart grid, metrics strip, tips
//! panels and footer. The sidebar collapses on narrow terminals so the
//! chart wall keeps as much width as possible.

use crate::charts::{self, data};
use crate::layout::LayoutConfig;
use crate::tui::app::{App, Control};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Header text displayed at the top of the dashboard.
const HEADER_TEXT: &str = "Ultra Wide Demo Dashboard";

/// Footer text showing available keybindings.
const FOOTER_TEXT: &str =
    "[j/k] Focus  [h/l] Adjust  [a] Auto  [1-4] Density  [r] Reseed  [q] Quit";

/// Version string shown in the header (right-aligned).
const VERSION_TEXT: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Width of the sidebar in columns.
pub const SIDEBAR_WIDTH: u16 = 34;

/// Below this terminal width the sidebar collapses entirely.
pub const SIDEBAR_COLLAPSE_WIDTH: u16 = 72;

/// Terminal rows rendered per chart-height unit.
const ROWS_PER_HEIGHT_UNIT: f64 = 3.0;

/// Bounds on the chart grid height in rows.
const MIN_CHART_ROWS: u16 = 6;
const MAX_CHART_ROWS: u16 = 16;

/// Renders the full dashboard: header, sidebar, chart grid, metrics strip,
/// tips and footer.
///
/// The layout is re-resolved from the control state on every call; one
/// interaction maps to one recompute and one redraw.
pub fn render_dashboard(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let config = app.resolved();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(3),    // body
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, chunks[0]);

    if area.width >= SIDEBAR_COLLAPSE_WIDTH {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);
        render_sidebar(frame, app, &config, body[0]);
        render_main(frame, app, &config, body[1]);
    } else {
        render_main(frame, app, &config, chunks[1]);
    }

    render_footer(frame, app, chunks[2]);
}

/// Renders the header: title left, version right-aligned.
fn render_header(frame: &mut Frame, area: Rect) {
    let header_width = area.width as usize;
    let padding_len = header_width
        .saturating_sub(HEADER_TEXT.len())
        .saturating_sub(VERSION_TEXT.len());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(HEADER_TEXT, Style::default().fg(Color::Cyan)),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(VERSION_TEXT, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, area);
}

/// Renders the sidebar: the six controls plus the resolved read-out.
fn render_sidebar(frame: &mut Frame, app: &App, config: &LayoutConfig, area: Rect) {
    let block = Block::bordered().title("Controls");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let checkbox = if app.controls.auto_mode { "x" } else { " " };
    let manual = app.controls.manual;

    let mut lines = vec![
        control_line(
            app.focus == Control::AutoMode,
            true,
            format!("[{checkbox}] Automatic mode"),
        ),
        control_line(
            app.focus == Control::Preset,
            app.preset_enabled(),
            format!("Preset:  {}", app.controls.preset),
        ),
        control_line(
            app.focus == Control::Columns,
            app.manual_enabled(),
            format!("Columns: {:>4}", manual.columns),
        ),
        control_line(
            app.focus == Control::Width,
            app.manual_enabled(),
            format!("Width:   {:>4.1}", manual.width),
        ),
        control_line(
            app.focus == Control::Height,
            app.manual_enabled(),
            format!("Height:  {:>4.1}", manual.height),
        ),
        control_line(
            app.focus == Control::Density,
            true,
            format!("Density: {}", app.controls.density),
        ),
        Line::raw(""),
        Line::from(Span::styled(
            "Resolved",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    lines.push(Line::raw(format!("  Columns: {}", config.columns)));
    lines.push(Line::raw(format!(
        "  Chart:   {:.1} x {:.1}",
        config.chart_width, config.chart_height
    )));
    lines.push(Line::raw(format!("  Metrics: {}", config.metric_columns())));
    lines.push(Line::raw(format!("  Mode:    {}", mode_label(app))));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// One sidebar control row with focus marker and enabled/disabled styling.
fn control_line<'a>(focused: bool, enabled: bool, text: String) -> Line<'a> {
    let marker = if focused { "\u{203a} " } else { "  " };
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(text, style),
    ])
}

/// Short label for the active resolution mode.
fn mode_label(app: &App) -> &'static str {
    if app.controls.auto_mode {
        "Automatic"
    } else if app.manual_enabled() {
        "Custom"
    } else {
        "Preset"
    }
}

/// Renders the main area: chart grid on top, metrics strip, then tips.
fn render_main(frame: &mut Frame, app: &App, config: &LayoutConfig, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(chart_rows(config.chart_height)),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    render_chart_grid(frame, app, config, chunks[0]);
    render_metrics_strip(frame, app, config, chunks[1]);
    render_tips(frame, chunks[2]);
}

/// Chart grid height in rows for a resolved chart height.
pub(crate) fn chart_rows(chart_height: f64) -> u16 {
    ((chart_height * ROWS_PER_HEIGHT_UNIT).round() as u16).clamp(MIN_CHART_ROWS, MAX_CHART_ROWS)
}

/// Renders one chart cell per resolved column, cycling the chart kinds.
fn render_chart_grid(frame: &mut Frame, app: &App, config: &LayoutConfig, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let columns = config.columns.max(1);
    let constraints: Vec<Constraint> = (0..columns)
        .map(|_| Constraint::Ratio(1, u32::from(columns)))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, cell_area) in cells.iter().enumerate() {
        let cell = charts::build_cell(index, app.seed);
        cell.render(frame, *cell_area);
    }
}

/// Renders the KPI strip: `metric_columns()` cells of value plus delta.
fn render_metrics_strip(frame: &mut Frame, app: &App, config: &LayoutConfig, area: Rect) {
    let block = Block::bordered().title("Responsive metrics");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let metric_columns = config.metric_columns().max(1);
    let constraints: Vec<Constraint> = (0..metric_columns)
        .map(|_| Constraint::Ratio(1, u32::from(metric_columns)))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (index, cell_area) in cells.iter().enumerate() {
        let kpi = data::kpi_for_cell(app.seed, index);
        let delta_style = if kpi.delta >= 0 {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        let lines = vec![
            Line::from(Span::styled(
                format!("KPI {}", index + 1),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format_thousands(kpi.value),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(format!("{:+}", kpi.delta), delta_style)),
        ];
        frame.render_widget(Paragraph::new(lines), *cell_area);
    }
}

/// Renders the two static tips panels under the metrics strip.
fn render_tips(frame: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    let setup = Paragraph::new(vec![
        Line::raw("1. Start from the preset closest to your resolution"),
        Line::raw("2. Try the density dial to see what reads best"),
        Line::raw("3. Fine-tune with the Custom sliders if needed"),
        Line::raw("4. Copy values that worked into your config file"),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::bordered().title("Finding your ideal setup"));
    frame.render_widget(setup, halves[0]);

    let recommended = Paragraph::new(vec![
        Line::raw("Ultra Wide (3440px): 12-16 columns"),
        Line::raw("4K Wide:             14-18 columns"),
        Line::raw("QHD:                 8-12 columns"),
        Line::raw("Full HD:             6-10 columns"),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::bordered().title("Recommended column counts"));
    frame.render_widget(recommended, halves[1]);
}

/// Renders the footer: active status message, or the keybinding hints.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status_message {
        Some((msg, expiry)) if Instant::now() < *expiry => {
            Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)))
        }
        _ => Line::from(Span::styled(
            FOOTER_TEXT,
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Formats an integer with thousands separators (1234 -> "1,234").
fn format_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::DEFAULT_SEED;
    use crate::layout::{ControlState, Density, ScreenPreset};
    use crate::tui::test_utils::{find_row_with_text, render_dashboard_to_buffer, row_contains};
    use std::time::Duration;

    fn make_app() -> App {
        App::new(
            ControlState::default(),
            DEFAULT_SEED,
            Duration::from_millis(250),
        )
    }

    #[test]
    fn test_render_dashboard_default_no_panic() {
        let app = make_app();
        render_dashboard_to_buffer(&app, 120, 40);
    }

    #[test]
    fn test_render_dashboard_small_sizes_no_panic() {
        let app = make_app();
        for (w, h) in [(40, 12), (80, 3), (80, 1), (10, 2), (200, 50)] {
            render_dashboard_to_buffer(&app, w, h);
        }
    }

    #[test]
    fn test_render_dashboard_every_density_no_panic() {
        let mut app = make_app();
        for density in Density::ALL {
            app.controls.density = density;
            render_dashboard_to_buffer(&app, 120, 40);
        }
    }

    #[test]
    fn test_render_dashboard_every_preset_no_panic() {
        let mut app = make_app();
        app.controls.auto_mode = false;
        for preset in ScreenPreset::ALL {
            app.controls.preset = preset;
            render_dashboard_to_buffer(&app, 120, 40);
        }
    }

    #[test]
    fn test_header_shows_title_and_version() {
        let app = make_app();
        let buffer = render_dashboard_to_buffer(&app, 120, 40);
        assert!(row_contains(&buffer, 0, HEADER_TEXT));
        assert!(row_contains(&buffer, 0, VERSION_TEXT));
    }

    #[test]
    fn test_footer_shows_keybinding_hints() {
        let app = make_app();
        let buffer = render_dashboard_to_buffer(&app, 120, 40);
        let footer_row = buffer.area().height - 1;
        assert!(row_contains(&buffer, footer_row, "[q] Quit"));
        assert!(row_contains(&buffer, footer_row, "[1-4] Density"));
    }

    #[test]
    fn test_status_message_overrides_footer() {
        let mut app = make_app();
        app.set_status("Charts reseeded");
        let buffer = render_dashboard_to_buffer(&app, 120, 40);
        let footer_row = buffer.area().height - 1;
        assert!(row_contains(&buffer, footer_row, "Charts reseeded"));
        assert!(!row_contains(&buffer, footer_row, "[q] Quit"));
    }

    #[test]
    fn test_sidebar_visible_on_wide_terminal() {
        let app = make_app();
        let buffer = render_dashboard_to_buffer(&app, 120, 40);
        assert!(find_row_with_text(&buffer, "Controls").is_some());
        assert!(find_row_with_text(&buffer, "Automatic mode").is_some());
        assert!(find_row_with_text(&buffer, "Density: Medium").is_some());
    }

    #[test]
    fn test_sidebar_collapses_on_narrow_terminal() {
        let app = make_app();
        let buffer = render_dashboard_to_buffer(&app, 60, 40);
        assert!(find_row_with_text(&buffer, "Automatic mode").is_none());
    }

    #[test]
    fn test_sidebar_shows_resolved_readout() {
        let app = make_app();
        let buffer = render_dashboard_to_buffer(&app, 120, 40);
        assert!(find_row_with_text(&buffer, "Columns: 12").is_some());
        assert!(find_row_with_text(&buffer, "Chart:   2.5 x 3.5").is_some());
        assert!(find_row_with_text(&buffer, "Metrics: 10").is_some());
        assert!(find_row_with_text(&buffer, "Mode:    Automatic").is_some());
    }

    #[test]
    fn test_metrics_strip_rendered() {
        let app = make_app();
        let buffer = render_dashboard_to_buffer(&app, 120, 40);
        assert!(find_row_with_text(&buffer, "Responsive metrics").is_some());
        assert!(find_row_with_text(&buffer, "KPI 1").is_some());
    }

    #[test]
    fn test_tips_panels_rendered() {
        let app = make_app();
        let buffer = render_dashboard_to_buffer(&app, 120, 40);
        assert!(find_row_with_text(&buffer, "Finding your ideal setup").is_some());
        assert!(find_row_with_text(&buffer, "Recommended column counts").is_some());
    }

    #[test]
    fn test_mode_label_tracks_controls() {
        let mut app = make_app();
        assert_eq!(mode_label(&app), "Automatic");
        app.controls.auto_mode = false;
        assert_eq!(mode_label(&app), "Preset");
        app.controls.preset = ScreenPreset::Custom;
        assert_eq!(mode_label(&app), "Custom");
    }

    #[test]
    fn test_chart_rows_scales_and_clamps() {
        assert_eq!(chart_rows(2.0), 6);
        assert_eq!(chart_rows(3.5), 11);
        assert_eq!(chart_rows(5.0), 15);
        // Clamped at the bounds
        assert_eq!(chart_rows(1.0), MIN_CHART_ROWS);
        assert_eq!(chart_rows(10.0), MAX_CHART_ROWS);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(100), "100");
        assert_eq!(format_thousands(1234), "1,234");
        assert_eq!(format_thousands(9998), "9,998");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-500), "-500");
        assert_eq!(format_thousands(-1234), "-1,234");
    }
}
