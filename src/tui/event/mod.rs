//! Event handling for the TUI.
//!
//! Wraps crossterm events and adds a tick variant for periodic UI refresh.

use crate::tui::app::App;
use crate::CardsPerRow;
use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyModifiers, MouseEvent,
};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

/// Application-level event variants.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
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
                        Some(Ok(CrosstermEvent::Mouse(mouse))) => return Ok(Event::Mouse(mouse)),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore focus, paste events
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

/// Direction for keyboard-driven card moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Toward the start of the display order.
    Left,
    /// Toward the end of the display order.
    Right,
}

/// Action produced by handling a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action to take.
    None,
    /// Quit the application.
    Quit,
    /// Add or remove the card with the given id from the dashboard.
    ToggleCard(String),
    /// Replace the selection with the recommended cards.
    ApplyPreset,
    /// Change the column preset.
    SetColumns(CardsPerRow),
    /// Toggle between one and two rows.
    ToggleRows,
    /// Cycle the density preset.
    CycleDensity,
    /// Move the selected visible card one position.
    MoveSelected(MoveDirection),
    /// Dismiss the first-run tour overlay.
    DismissTour,
}

/// Handles a key event by dispatching to the appropriate app method or action.
///
/// Navigation and panel toggling mutate the app directly; everything that
/// touches the dashboard configuration is returned as an [`Action`] and
/// applied by the event loop through the store.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    // Global: quit always works
    match key.code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Action::Quit,
        _ => {}
    }

    // The tour overlay consumes the next keypress
    if app.show_tour {
        return Action::DismissTour;
    }

    match key.code {
        KeyCode::Char('c') => {
            app.toggle_customizer();
            Action::None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
            Action::None
        }
        KeyCode::Char(' ') | KeyCode::Enter if app.customizer_open => {
            match app.catalog_card_id(app.selected) {
                Some(id) => Action::ToggleCard(id),
                None => Action::None,
            }
        }
        KeyCode::Char('a') => Action::ApplyPreset,
        KeyCode::Char('2') => Action::SetColumns(CardsPerRow::Two),
        KeyCode::Char('3') => Action::SetColumns(CardsPerRow::Three),
        KeyCode::Char('4') => Action::SetColumns(CardsPerRow::Four),
        KeyCode::Char('r') => Action::ToggleRows,
        KeyCode::Char('d') => Action::CycleDensity,
        KeyCode::Char('[') if !app.customizer_open => Action::MoveSelected(MoveDirection::Left),
        KeyCode::Char(']') if !app.customizer_open => Action::MoveSelected(MoveDirection::Right),
        KeyCode::Esc => {
            app.escape();
            Action::None
        }
        _ => Action::None,
    }
}
