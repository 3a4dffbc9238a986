//! Slot capacity, card toggling, and grid geometry.

use ratatui::layout::Constraint;
use thiserror::Error;

use crate::registry::CardRegistry;
use crate::{CardsPerRow, DashboardConfig, Density};

/// Errors raised by layout mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Adding another card would exceed `cardsPerRow x rowCount`.
    ///
    /// Surfaced to the user as a recoverable rejection: remove a card or
    /// grow the grid first.
    #[error("dashboard is full: all {capacity} card slots are in use")]
    MaxSlotsExceeded {
        /// The capacity that was hit.
        capacity: usize,
    },
}

/// Count of card slots the configured grid offers.
pub fn visible_slots(config: &DashboardConfig) -> usize {
    config.cards_per_row.count() * config.row_count.count()
}

/// Adds or removes `card_id` from the visible selection.
///
/// Removal always succeeds. Insertion appends at the end of the display
/// order and is rejected with [`LayoutError::MaxSlotsExceeded`] when all
/// slots are in use; the input config is never mutated either way.
pub fn toggle_card(
    config: &DashboardConfig,
    card_id: &str,
) -> Result<DashboardConfig, LayoutError> {
    let mut updated = config.clone();
    if let Some(pos) = updated.visible_cards.iter().position(|id| id == card_id) {
        updated.visible_cards.remove(pos);
        return Ok(updated);
    }

    let capacity = visible_slots(config);
    if updated.visible_cards.len() >= capacity {
        return Err(LayoutError::MaxSlotsExceeded { capacity });
    }
    updated.visible_cards.push(card_id.to_string());
    Ok(updated)
}

/// Pure mapping from the column preset to equal-width grid constraints.
pub fn grid_columns(cards_per_row: CardsPerRow) -> Vec<Constraint> {
    let columns = cards_per_row.count() as u32;
    (0..columns).map(|_| Constraint::Ratio(1, columns)).collect()
}

/// Replaces the visible selection with the recommended cards.
///
/// Takes up to [`visible_slots`] cards flagged `recommended`, in registry
/// order. This is a destructive overwrite; the previous selection is not
/// merged.
pub fn apply_ai_preset(config: &DashboardConfig, registry: &CardRegistry) -> DashboardConfig {
    let mut updated = config.clone();
    updated.visible_cards = registry
        .recommended()
        .take(visible_slots(config))
        .map(|card| card.id.to_string())
        .collect();
    updated
}

/// The slice of `visible_cards` that fits the configured grid.
///
/// When a layout change shrinks capacity below the current selection, the
/// stored list is kept intact and only the display is truncated; growing
/// the grid again reveals the hidden tail in its original order.
pub fn display_cards(config: &DashboardConfig) -> &[String] {
    let end = visible_slots(config).min(config.visible_cards.len());
    &config.visible_cards[..end]
}

/// Tile height in terminal rows for a density preset.
pub fn card_height(density: Density) -> u16 {
    match density {
        Density::Compact => 4,
        Density::Standard => 5,
        Density::Comfortable => 7,
    }
}

/// Gap between tiles in terminal cells for a density preset.
pub fn card_gap(density: Density) -> u16 {
    match density {
        Density::Compact => 0,
        Density::Standard => 1,
        Density::Comfortable => 2,
    }
}
