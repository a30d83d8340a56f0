//! Event handling for the TUI.
//!
//! Wraps crossterm events and adds a tick variant for periodic UI refresh.

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

use crate::layout::Density;

/// Application-level event variants.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI refresh.
    Tick,
}

/// Event handler that merges terminal input events with periodic ticks.
pub struct EventHandler {
    /// Tick interval duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new EventHandler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, returning either a terminal event or a tick.
    ///
    /// Uses `tokio::select!` to race between crossterm input and the tick timer.
    pub async fn next(&self, reader: &mut EventStream) -> std::io::Result<Event> {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) => return Ok(Event::Key(key)),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore mouse, focus, paste events
                        Some(Ok(_)) => continue,
                        None => return Err(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

/// Action produced by handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action to take.
    None,
    /// Quit the application.
    Quit,
    /// Move sidebar focus down.
    FocusNext,
    /// Move sidebar focus up.
    FocusPrev,
    /// Increase (or cycle forward) the focused control.
    Increase,
    /// Decrease (or cycle backward) the focused control.
    Decrease,
    /// Activate the focused control (toggle / cycle forward).
    Activate,
    /// Toggle automatic mode regardless of focus.
    ToggleAuto,
    /// Select a density directly.
    SetDensity(Density),
    /// Regenerate all chart content from a fresh seed.
    Reseed,
}

/// Maps a key event to an action.
pub fn handle_key_event(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Action::FocusNext,
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Char('l') | KeyCode::Right => Action::Increase,
        KeyCode::Char('h') | KeyCode::Left => Action::Decrease,
        KeyCode::Char(' ') | KeyCode::Enter => Action::Activate,
        KeyCode::Char('a') => Action::ToggleAuto,
        KeyCode::Char('1') => Action::SetDensity(Density::Low),
        KeyCode::Char('2') => Action::SetDensity(Density::Medium),
        KeyCode::Char('3') => Action::SetDensity(Density::High),
        KeyCode::Char('4') => Action::SetDensity(Density::Max),
        KeyCode::Char('r') => Action::Reseed,
        _ => Action::None,
    }
}
