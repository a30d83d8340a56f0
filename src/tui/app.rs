//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the core render loop.
//! Every accepted action mutates the control state; the layout is
//! re-resolved from scratch on each draw.

use crate::charts::data::DemoRng;
use crate::layout::{
    self, ControlState, LayoutConfig, ScreenPreset, AUTO_BASE, MANUAL_COLUMNS, MANUAL_HEIGHT,
    MANUAL_WIDTH,
};
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::ui::render_dashboard;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

/// How long hint/status messages stay visible in the footer.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(2);

/// Slider step for the chart width/height controls.
const SIZE_STEP: f64 = 0.1;

/// Sidebar controls in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Automatic mode checkbox.
    AutoMode,
    /// Resolution preset selector.
    Preset,
    /// Manual column slider.
    Columns,
    /// Manual chart-width slider.
    Width,
    /// Manual chart-height slider.
    Height,
    /// Density dial.
    Density,
}

impl Control {
    /// All controls in focus order.
    pub const ALL: [Control; 6] = [
        Control::AutoMode,
        Control::Preset,
        Control::Columns,
        Control::Width,
        Control::Height,
        Control::Density,
    ];

    /// The next control in focus order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous control in focus order, wrapping around.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Core application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Current control values, re-resolved on every draw.
    pub controls: ControlState,
    /// Sidebar control holding focus.
    pub focus: Control,
    /// Seed for the chart wall content.
    pub seed: u64,
    /// Render tick rate.
    pub tick_rate: Duration,
    /// Count of ticks processed (useful for testing/diagnostics).
    pub tick_count: u64,
    /// Temporary status message shown in footer, with expiry time.
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Creates a new App from initial control values, a wall seed and a
    /// tick rate.
    pub fn new(controls: ControlState, seed: u64, tick_rate: Duration) -> Self {
        Self {
            should_quit: false,
            controls,
            focus: Control::AutoMode,
            seed,
            tick_rate,
            tick_count: 0,
            status_message: None,
        }
    }

    /// Resolves the current control values to a rendering grid.
    ///
    /// Interactive adjustments are clamped in-domain, so resolution only
    /// fails when out-of-domain values arrive from configuration; those
    /// fall back to the automatic base with a warning.
    pub fn resolved(&self) -> LayoutConfig {
        match layout::resolve(&self.controls) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("control values rejected, using automatic base: {e}");
                LayoutConfig {
                    columns: AUTO_BASE.columns,
                    chart_width: AUTO_BASE.chart_width,
                    chart_height: AUTO_BASE.chart_height,
                }
            }
        }
    }

    /// Applies an action to the application state.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None | Action::Quit => {}
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Increase => self.adjust(1),
            Action::Decrease => self.adjust(-1),
            Action::Activate => match self.focus {
                Control::AutoMode => self.toggle_auto(),
                _ => self.adjust(1),
            },
            Action::ToggleAuto => self.toggle_auto(),
            Action::SetDensity(density) => self.controls.density = density,
            Action::Reseed => self.reseed(),
        }
    }

    /// Whether the manual sliders currently drive the layout.
    pub fn manual_enabled(&self) -> bool {
        !self.controls.auto_mode && self.controls.preset == ScreenPreset::Custom
    }

    /// Whether the preset selector currently drives the layout.
    pub fn preset_enabled(&self) -> bool {
        !self.controls.auto_mode
    }

    /// Toggles automatic mode.
    pub fn toggle_auto(&mut self) {
        self.controls.auto_mode = !self.controls.auto_mode;
    }

    /// Regenerates the whole chart wall from a fresh seed.
    pub fn reseed(&mut self) {
        self.seed = DemoRng::reseed(self.seed);
        self.set_status("Charts reseeded");
    }

    /// Adjusts the focused control by one step in `dir` (+1 or -1).
    ///
    /// Controls that the current mode does not use show a hint instead of
    /// silently changing a value that has no effect.
    fn adjust(&mut self, dir: i8) {
        match self.focus {
            Control::AutoMode => self.toggle_auto(),
            Control::Preset => {
                if !self.preset_enabled() {
                    self.set_status("Disable automatic mode [a] to choose a preset");
                    return;
                }
                self.controls.preset = if dir >= 0 {
                    self.controls.preset.next()
                } else {
                    self.controls.preset.prev()
                };
            }
            Control::Columns => {
                if !self.manual_enabled() {
                    self.hint_manual();
                    return;
                }
                let columns = self.controls.manual.columns;
                self.controls.manual.columns = if dir >= 0 {
                    (columns + 1).min(*MANUAL_COLUMNS.end())
                } else {
                    columns.saturating_sub(1).max(*MANUAL_COLUMNS.start())
                };
            }
            Control::Width => {
                if !self.manual_enabled() {
                    self.hint_manual();
                    return;
                }
                self.controls.manual.width =
                    step_tenth(self.controls.manual.width, dir, MANUAL_WIDTH);
            }
            Control::Height => {
                if !self.manual_enabled() {
                    self.hint_manual();
                    return;
                }
                self.controls.manual.height =
                    step_tenth(self.controls.manual.height, dir, MANUAL_HEIGHT);
            }
            Control::Density => {
                self.controls.density = if dir >= 0 {
                    self.controls.density.next()
                } else {
                    self.controls.density.prev()
                };
            }
        }
    }

    fn hint_manual(&mut self) {
        self.set_status("Select the Custom preset to use the sliders");
    }

    /// Shows a transient footer message.
    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some((message.to_string(), Instant::now() + STATUS_MESSAGE_TTL));
    }

    /// Clears the status message if its expiry time has passed.
    pub fn expire_status_message(&mut self) {
        if let Some((_, expiry)) = &self.status_message {
            if Instant::now() >= *expiry {
                self.status_message = None;
            }
        }
    }

    /// Runs the TUI application: sets up terminal, enters event loop,
    /// restores on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    /// Main event loop: processes events and redraws.
    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal =
            Terminal::new(backend).expect("failed to create ratatui terminal instance");
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();

        loop {
            match event_handler.next(&mut reader).await? {
                Event::Key(key) => {
                    let action = handle_key_event(key);
                    if action == Action::Quit {
                        self.should_quit = true;
                        return Ok(());
                    }
                    self.apply(action);
                }
                Event::Tick => {
                    self.tick_count += 1;
                    self.expire_status_message();
                }
                Event::Resize(_, _) => {}
            }

            terminal.draw(|frame| render_dashboard(frame, self))?;
        }
    }
}

/// Steps a slider value by [`SIZE_STEP`], rounding to one decimal and
/// clamping to the given range.
///
/// Rounding keeps repeated steps from accumulating float drift
/// (2.5 + 0.1 stays 2.6, not 2.6000000000000005).
fn step_tenth(value: f64, dir: i8, range: RangeInclusive<f64>) -> f64 {
    let stepped = if dir >= 0 {
        value + SIZE_STEP
    } else {
        value - SIZE_STEP
    };
    let rounded = (stepped * 10.0).round() / 10.0;
    rounded.clamp(*range.start(), *range.end())
}

/// Enables raw mode and switches to the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::DEFAULT_SEED;
    use crate::layout::{Density, ManualSize};

    fn make_app() -> App {
        App::new(
            ControlState::default(),
            DEFAULT_SEED,
            Duration::from_millis(250),
        )
    }

    fn make_custom_app() -> App {
        let mut app = make_app();
        app.controls.auto_mode = false;
        app.controls.preset = ScreenPreset::Custom;
        app
    }

    #[test]
    fn test_focus_cycle_covers_all_controls() {
        let mut focus = Control::AutoMode;
        for expected in Control::ALL.iter().skip(1) {
            focus = focus.next();
            assert_eq!(focus, *expected);
        }
        assert_eq!(focus.next(), Control::AutoMode);
    }

    #[test]
    fn test_focus_prev_is_inverse_of_next() {
        for control in Control::ALL {
            assert_eq!(control.next().prev(), control);
        }
    }

    #[test]
    fn test_apply_focus_actions() {
        let mut app = make_app();
        app.apply(Action::FocusNext);
        assert_eq!(app.focus, Control::Preset);
        app.apply(Action::FocusPrev);
        assert_eq!(app.focus, Control::AutoMode);
    }

    #[test]
    fn test_toggle_auto() {
        let mut app = make_app();
        assert!(app.controls.auto_mode);
        app.apply(Action::ToggleAuto);
        assert!(!app.controls.auto_mode);
        app.apply(Action::ToggleAuto);
        assert!(app.controls.auto_mode);
    }

    #[test]
    fn test_activate_on_auto_mode_toggles() {
        let mut app = make_app();
        app.focus = Control::AutoMode;
        app.apply(Action::Activate);
        assert!(!app.controls.auto_mode);
    }

    #[test]
    fn test_preset_adjust_blocked_in_auto_mode() {
        let mut app = make_app();
        app.focus = Control::Preset;
        let before = app.controls.preset;
        app.apply(Action::Increase);
        assert_eq!(app.controls.preset, before);
        assert!(app.status_message.is_some(), "hint should be shown");
    }

    #[test]
    fn test_preset_cycles_in_manual_mode() {
        let mut app = make_app();
        app.controls.auto_mode = false;
        app.focus = Control::Preset;
        app.apply(Action::Increase);
        assert_eq!(app.controls.preset, ScreenPreset::UltraWide2560x1080);
        app.apply(Action::Decrease);
        assert_eq!(app.controls.preset, ScreenPreset::UltraWide3440x1440);
    }

    #[test]
    fn test_sliders_blocked_unless_custom() {
        let mut app = make_app();
        app.controls.auto_mode = false;
        app.controls.preset = ScreenPreset::Qhd2560x1440;
        app.focus = Control::Columns;
        let before = app.controls.manual;
        app.apply(Action::Increase);
        assert_eq!(app.controls.manual, before);
        assert!(app.status_message.is_some(), "hint should be shown");
    }

    #[test]
    fn test_columns_slider_steps_and_clamps() {
        let mut app = make_custom_app();
        app.focus = Control::Columns;
        app.apply(Action::Increase);
        assert_eq!(app.controls.manual.columns, 13);

        app.controls.manual.columns = 20;
        app.apply(Action::Increase);
        assert_eq!(app.controls.manual.columns, 20, "clamped at upper bound");

        app.controls.manual.columns = 4;
        app.apply(Action::Decrease);
        assert_eq!(app.controls.manual.columns, 4, "clamped at lower bound");
    }

    #[test]
    fn test_width_slider_steps_by_tenth() {
        let mut app = make_custom_app();
        app.focus = Control::Width;
        app.apply(Action::Increase);
        assert_eq!(app.controls.manual.width, 2.6);
        app.apply(Action::Decrease);
        assert_eq!(app.controls.manual.width, 2.5);
    }

    #[test]
    fn test_height_slider_clamps_to_domain() {
        let mut app = make_custom_app();
        app.focus = Control::Height;
        app.controls.manual.height = 5.0;
        app.apply(Action::Increase);
        assert_eq!(app.controls.manual.height, 5.0);
        app.controls.manual.height = 2.0;
        app.apply(Action::Decrease);
        assert_eq!(app.controls.manual.height, 2.0);
    }

    #[test]
    fn test_density_dial_cycles_and_shortcuts() {
        let mut app = make_app();
        app.focus = Control::Density;
        app.apply(Action::Increase);
        assert_eq!(app.controls.density, Density::High);
        app.apply(Action::Decrease);
        assert_eq!(app.controls.density, Density::Medium);

        app.apply(Action::SetDensity(Density::Max));
        assert_eq!(app.controls.density, Density::Max);
    }

    #[test]
    fn test_reseed_changes_seed_and_reports() {
        let mut app = make_app();
        let before = app.seed;
        app.apply(Action::Reseed);
        assert_ne!(app.seed, before);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_resolved_uses_resolver() {
        let app = make_app();
        let config = app.resolved();
        assert_eq!(config.columns, 12);
        assert_eq!(config.chart_width, 2.5);
        assert_eq!(config.chart_height, 3.5);
    }

    #[test]
    fn test_resolved_falls_back_on_invalid_config_values() {
        let mut app = make_custom_app();
        // Out-of-domain values can only arrive via the config file
        app.controls.manual = ManualSize {
            columns: 99,
            width: 9.0,
            height: 9.0,
        };
        let config = app.resolved();
        assert_eq!(config.columns, 12);
        assert_eq!(config.chart_width, 2.5);
    }

    #[test]
    fn test_step_tenth_rounds_float_drift() {
        let mut value = 1.5;
        for _ in 0..25 {
            value = step_tenth(value, 1, MANUAL_WIDTH);
        }
        assert_eq!(value, 4.0, "25 steps from 1.5 land exactly on the cap");
    }

    #[test]
    fn test_status_message_expiry() {
        let mut app = make_app();
        app.status_message = Some(("stale".to_string(), Instant::now() - Duration::from_secs(1)));
        app.expire_status_message();
        assert!(app.status_message.is_none());
    }
}
