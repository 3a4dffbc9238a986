//! Layout engine for the dashboard card grid.
//!
//! Pure functions over [`DashboardConfig`](crate::DashboardConfig): slot
//! capacity, card toggling with capacity enforcement, the recommended
//! preset, display truncation, and the geometry mappings consumed by the
//! grid renderer.

mod engine;

pub use engine::{
    apply_ai_preset, card_gap, card_height, display_cards, grid_columns, toggle_card,
    visible_slots, LayoutError,
};
