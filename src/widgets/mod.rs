//! Widget components for the dashboard TUI.
//!
//! The only widget of substance is [`KpiTile`], which renders one card of
//! the dashboard grid. Color mappings live here so the customizer panel
//! and the grid agree on category accents.

pub mod kpi_tile;

pub use kpi_tile::KpiTile;

use ratatui::style::Color;

use crate::{CardCategory, Trend};

/// Accent color for a card category.
pub fn category_color(category: CardCategory) -> Color {
    match category {
        CardCategory::Membership => Color::Cyan,
        CardCategory::Attendance => Color::Green,
        CardCategory::Giving => Color::Yellow,
        CardCategory::Engagement => Color::Magenta,
        CardCategory::Events => Color::Blue,
    }
}

/// Color for a trend direction.
pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
        Trend::Flat => Color::DarkGray,
    }
}
