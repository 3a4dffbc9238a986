//! Shared test utilities for TUI testing with ratatui TestBackend.
//!
//! Provides helper functions for creating test apps and terminals and
//! for extracting buffer content for assertions.

#![cfg(test)]

use crate::registry::CardRegistry;
use crate::store::{ConfigStore, MemoryStorage};
use crate::tui::app::App;
use crate::tui::ui::render_dashboard;
use crate::DashboardConfig;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::time::Duration;

/// Creates an App over in-memory storage with the builtin catalog and
/// the tour disabled.
pub fn test_app() -> App {
    let store = ConfigStore::open(Box::new(MemoryStorage::new()), DashboardConfig::default());
    App::new(
        store,
        CardRegistry::builtin(),
        Duration::from_millis(250),
        false,
    )
}

/// Creates a Terminal with TestBackend at the specified dimensions.
pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}

/// Renders the full dashboard into a buffer of the given size.
pub fn render_dashboard_to_buffer(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = test_terminal(width, height);
    terminal
        .draw(|frame| render_dashboard(frame, app))
        .expect("draw failed");
    terminal.backend().buffer().clone()
}

/// Extracts all text from a specific row in the buffer as a single String.
pub fn row_text(buffer: &Buffer, row: u16) -> String {
    let area = buffer.area();
    if row >= area.height {
        return String::new();
    }
    (0..area.width)
        .map(|col| {
            buffer
                .cell((col, row))
                .map(|cell| cell.symbol())
                .unwrap_or(" ")
        })
        .collect()
}

/// Checks if a specific row contains the given substring.
pub fn row_contains(buffer: &Buffer, row: u16, text: &str) -> bool {
    row_text(buffer, row).contains(text)
}

/// Finds the first row index that contains the given text, or None if not found.
pub fn find_row_with_text(buffer: &Buffer, text: &str) -> Option<u16> {
    let area = buffer.area();
    for row in 0..area.height {
        if row_contains(buffer, row, text) {
            return Some(row);
        }
    }
    None
}
