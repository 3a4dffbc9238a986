//! Reorder engine for the dashboard card grid.
//!
//! Reordering is a pure splice-move over the card order plus a small,
//! explicit drag state machine. Every hover during a drag produces a new
//! order snapshot in the preview [`CardOrder`]; only the drop commits the
//! preview to the configuration store, and an abandoned drag is a no-op.

mod drag;

pub use drag::{hover_commits, DragState};

/// Moves the element at `drag_index` to `hover_index`, preserving all
/// other relative positions.
///
/// Indices must be in bounds (`0 <= index < order.len()`); the caller
/// guarantees this via hit-testing, and out-of-bounds input is a
/// programming error that panics like any slice index.
pub fn move_card(order: &[String], drag_index: usize, hover_index: usize) -> Vec<String> {
    let mut reordered = order.to_vec();
    let card = reordered.remove(drag_index);
    reordered.insert(hover_index, card);
    reordered
}

/// Session-local card ordering mirroring `visibleCards`.
///
/// Kept separate from the stored configuration so drag previews can
/// reorder freely before committing. [`CardOrder::resync`] reconciles the
/// mirror after any visibility change: retained ids keep their relative
/// order, removed ids are dropped, and new ids are appended at the end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardOrder {
    ids: Vec<String>,
}

impl CardOrder {
    /// Creates an order mirroring the given visible-card list.
    pub fn new(visible: &[String]) -> Self {
        Self {
            ids: visible.to_vec(),
        }
    }

    /// The current ordering.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Count of ordered ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when no cards are ordered.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Position of `id` in the ordering, if present.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|existing| existing == id)
    }

    /// Applies a splice-move in place. See [`move_card`] for the contract.
    pub fn move_card(&mut self, drag_index: usize, hover_index: usize) {
        self.ids = move_card(&self.ids, drag_index, hover_index);
    }

    /// Reconciles the ordering against an updated visible-card list.
    pub fn resync(&mut self, visible: &[String]) {
        self.ids.retain(|id| visible.contains(id));
        for id in visible {
            if !self.ids.contains(id) {
                self.ids.push(id.clone());
            }
        }
    }
}
