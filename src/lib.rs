//! ChurchAfrica Dashboard library
//!
//! This crate provides the core engines behind the ChurchAfrica KPI
//! dashboard: the card registry, the persisted dashboard configuration
//! store, the layout engine, and the drag-reorder engine. The `cad`
//! binary layers a terminal consumer on top; everything here is usable
//! headless.
//!
//! # Architecture
//!
//! The dashboard state flows one way:
//!
//! ```text
//! CardRegistry -> layout engine (visible slice) -> TUI render
//! drag/key gestures -> reorder engine -> ConfigStore -> state file
//! ```
//!
//! `DashboardConfig` is owned exclusively by [`store::ConfigStore`];
//! consumers receive read-only snapshots and request mutation through the
//! store's `update`. All engine operations are synchronous and complete
//! within one event-handler tick.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Application configuration (TOML file) including XDG path resolution.
pub mod config;

/// Layout engine: slot capacity, card toggling, grid geometry.
pub mod layout;

/// Card registry: the static catalog of KPI card definitions.
pub mod registry;

/// Reorder engine: drag state machine and splice-move ordering.
pub mod reorder;

/// Configuration store and durable key-value storage backends.
pub mod store;

/// TUI module providing the terminal user interface for the dashboard.
pub mod tui;

/// Widget components for rendering KPI card tiles.
pub mod widgets;

/// Metric category for a KPI card.
///
/// The category set is closed: card definitions are validated against it
/// at registry construction, never at access time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCategory {
    /// Congregation size and member lifecycle metrics.
    Membership,
    /// Service attendance and check-in metrics.
    Attendance,
    /// Tithes, offerings, and pledge metrics.
    Giving,
    /// Small-group and volunteer participation metrics.
    Engagement,
    /// Upcoming events and registration metrics.
    Events,
}

impl fmt::Display for CardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CardCategory::Membership => "membership",
            CardCategory::Attendance => "attendance",
            CardCategory::Giving => "giving",
            CardCategory::Engagement => "engagement",
            CardCategory::Events => "events",
        };
        write!(f, "{}", s)
    }
}

/// Error type for parsing CardCategory from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid card category: {}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for CardCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "membership" => Ok(CardCategory::Membership),
            "attendance" => Ok(CardCategory::Attendance),
            "giving" => Ok(CardCategory::Giving),
            "engagement" => Ok(CardCategory::Engagement),
            "events" => Ok(CardCategory::Events),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Direction of a KPI's period-over-period movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Metric increased since the previous period.
    Up,
    /// Metric decreased since the previous period.
    Down,
    /// Metric is unchanged.
    Flat,
}

impl Trend {
    /// Returns the glyph rendered next to the delta figure.
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Flat => "→",
        }
    }
}

/// Spacing preset for the card grid.
///
/// Affects tile height and gap only; it has no data-model effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    /// Tight tiles, no gap.
    Compact,
    /// Default spacing.
    Standard,
    /// Tall tiles with generous gaps.
    Comfortable,
}

impl Density {
    /// Returns the next density in the cycle order used by the `d` key.
    pub fn cycle(self) -> Density {
        match self {
            Density::Compact => Density::Standard,
            Density::Standard => Density::Comfortable,
            Density::Comfortable => Density::Compact,
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Density::Compact => "compact",
            Density::Standard => "standard",
            Density::Comfortable => "comfortable",
        };
        write!(f, "{}", s)
    }
}

/// Error for integer-coded layout enums outside their closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{value} is not a valid {field}")]
pub struct InvalidLayoutValue {
    /// Name of the field being parsed ("cardsPerRow" or "rowCount").
    pub field: &'static str,
    /// The rejected value.
    pub value: u8,
}

/// Number of card columns in the dashboard grid.
///
/// Serialized as the integer 2, 3, or 4 so the persisted JSON matches the
/// `{"cardsPerRow":3,...}` storage layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CardsPerRow {
    /// Two columns.
    Two,
    /// Three columns.
    Three,
    /// Four columns.
    Four,
}

impl CardsPerRow {
    /// Returns the column count as a plain number.
    pub fn count(self) -> usize {
        match self {
            CardsPerRow::Two => 2,
            CardsPerRow::Three => 3,
            CardsPerRow::Four => 4,
        }
    }
}

impl From<CardsPerRow> for u8 {
    fn from(value: CardsPerRow) -> u8 {
        value.count() as u8
    }
}

impl TryFrom<u8> for CardsPerRow {
    type Error = InvalidLayoutValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(CardsPerRow::Two),
            3 => Ok(CardsPerRow::Three),
            4 => Ok(CardsPerRow::Four),
            _ => Err(InvalidLayoutValue {
                field: "cardsPerRow",
                value,
            }),
        }
    }
}

/// Number of card rows in the dashboard grid.
///
/// Serialized as the integer 1 or 2, matching the storage layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RowCount {
    /// Single row.
    One,
    /// Two rows.
    Two,
}

impl RowCount {
    /// Returns the row count as a plain number.
    pub fn count(self) -> usize {
        match self {
            RowCount::One => 1,
            RowCount::Two => 2,
        }
    }

    /// Returns the other row count, used by the `r` key to toggle.
    pub fn toggle(self) -> RowCount {
        match self {
            RowCount::One => RowCount::Two,
            RowCount::Two => RowCount::One,
        }
    }
}

impl From<RowCount> for u8 {
    fn from(value: RowCount) -> u8 {
        value.count() as u8
    }
}

impl TryFrom<u8> for RowCount {
    type Error = InvalidLayoutValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(RowCount::One),
            2 => Ok(RowCount::Two),
            _ => Err(InvalidLayoutValue {
                field: "rowCount",
                value,
            }),
        }
    }
}

/// The user's dashboard layout selection, one per user.
///
/// Persisted as JSON under the `churchafrica-dashboard-config` storage key
/// with camelCase field names:
///
/// ```json
/// {"cardsPerRow":3,"rowCount":2,"density":"standard","visibleCards":["total-members"]}
/// ```
///
/// Invariant: `visible_cards.len() <= cards_per_row x row_count` after any
/// insert through [`layout::toggle_card`]. Capacity-reducing layout
/// changes do not retro-truncate the list; display truncation is handled
/// by [`layout::display_cards`] without mutating stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// Columns in the card grid.
    pub cards_per_row: CardsPerRow,
    /// Rows in the card grid.
    pub row_count: RowCount,
    /// Grid spacing preset.
    pub density: Density,
    /// Ordered ids of the cards the user selected. Insertion order is
    /// display order; duplicates are forbidden.
    pub visible_cards: Vec<String>,
}

impl Default for DashboardConfig {
    /// The starter layout used when nothing valid is stored: a 3x2 grid at
    /// standard density showing the first six cards of the builtin catalog.
    fn default() -> Self {
        Self {
            cards_per_row: CardsPerRow::Three,
            row_count: RowCount::Two,
            density: Density::Standard,
            visible_cards: registry::STARTER_CARD_IDS
                .iter()
                .map(|id| id.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests;
