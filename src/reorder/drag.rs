//! Drag state machine and the hover-commit heuristic.

use ratatui::layout::Rect;

/// State of an in-progress card drag.
///
/// Exactly two states and two transitions: `begin` enters `Dragging`,
/// `complete`/`cancel` return to `Idle`. No intermediate state is ever
/// persisted; the preview order lives in
/// [`CardOrder`](super::CardOrder) until the drop commits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A card is being dragged.
    Dragging {
        /// Current display index of the dragged card.
        drag_index: usize,
    },
}

impl DragState {
    /// Starts a drag from `index`. Returns `false` (and does nothing) if
    /// a drag is already in progress.
    pub fn begin(&mut self, index: usize) -> bool {
        match self {
            DragState::Idle => {
                *self = DragState::Dragging { drag_index: index };
                true
            }
            DragState::Dragging { .. } => false,
        }
    }

    /// Current index of the dragged card, if dragging.
    pub fn drag_index(&self) -> Option<usize> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { drag_index } => Some(*drag_index),
        }
    }

    /// Returns `true` while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Updates the dragged card's index after a committed hover move.
    ///
    /// The dragged card travels with the pointer: once a move commits,
    /// the card lives at the hover index and further midpoint tests are
    /// relative to that position. No-op when idle.
    pub fn retarget(&mut self, index: usize) {
        if let DragState::Dragging { drag_index } = self {
            *drag_index = index;
        }
    }

    /// Ends the drag (drop on a valid target), returning the final index
    /// of the dragged card.
    pub fn complete(&mut self) -> Option<usize> {
        let index = self.drag_index();
        *self = DragState::Idle;
        index
    }

    /// Abandons the drag with no commit.
    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }
}

/// Midpoint-crossing hover-commit heuristic.
///
/// A move from `drag_index` toward `hover_index` commits only once the
/// pointer crosses the vertical midpoint of the hovered tile in the
/// direction of travel: moving down commits below the midpoint, moving up
/// commits above it. Hovering the dragged card itself never commits.
/// This keeps the order stable when the pointer jitters near a tile edge.
pub fn hover_commits(
    drag_index: usize,
    hover_index: usize,
    pointer_row: u16,
    target: Rect,
) -> bool {
    if drag_index == hover_index {
        return false;
    }
    let midpoint = target.y + target.height / 2;
    if hover_index > drag_index {
        pointer_row > midpoint
    } else {
        pointer_row < midpoint
    }
}
