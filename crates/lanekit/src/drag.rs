//! Gesture-side drag session tracking.
//!
//! The board itself is gesture-agnostic; [`DragController`] is the piece
//! a gesture layer (pointer tracking, collision detection) talks to. It
//! owns the transient per-drag state: which card is in flight and whether
//! the "drop here for a new lane" preview should be shown. The preview
//! flag is raised on drag start and lowered on every drag-end path —
//! including the ones that end in a no-op — so a stale preview can never
//! outlive its gesture.
//!
//! # Example
//!
//! ```
//! use lanekit::drag::DragController;
//! use lanekit::model::{BoardModel, DropTarget, Relocation};
//!
//! let board: BoardModel<&str> = BoardModel::new();
//! board.add_lane("only card");
//! let card = board.lanes()[0].cards()[0].id().clone();
//!
//! let mut drag = DragController::new();
//! drag.drag_started(card.as_str());
//! assert!(drag.drop_preview_visible());
//!
//! let outcome = drag.drag_ended(&board, DropTarget::NewLane);
//! assert!(matches!(outcome, Relocation::Spawned { .. }));
//! assert!(!drag.drop_preview_visible());
//! ```

use crate::model::{BoardModel, DropTarget, IgnoreReason, Relocation};

/// Phase of the drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No drag is active.
    #[default]
    Idle,
    /// A card is in flight.
    Dragging,
}

/// Tracks one drag gesture from start to completion.
///
/// There is typically one controller per board view. It holds no
/// reference to the board; the board is passed to
/// [`drag_ended`](Self::drag_ended) so several views can share one model.
#[derive(Debug, Default)]
pub struct DragController {
    phase: DragPhase,
    active_card: Option<String>,
    drop_preview: bool,
}

impl DragController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current drag phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// `true` while a card is in flight.
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Id of the card in flight, if any.
    pub fn active_card(&self) -> Option<&str> {
        self.active_card.as_deref()
    }

    /// Whether the renderer should show the new-lane drop preview.
    pub fn drop_preview_visible(&self) -> bool {
        self.drop_preview
    }

    /// Records a drag start reported by the gesture layer.
    ///
    /// Starting a new drag while one is active replaces the old session;
    /// the gesture layer is the single writer and its latest report wins.
    pub fn drag_started(&mut self, card_id: impl Into<String>) {
        let card_id = card_id.into();
        tracing::trace!(target: "lanekit::drag", card = %card_id, "drag started");
        self.phase = DragPhase::Dragging;
        self.active_card = Some(card_id);
        self.drop_preview = true;
    }

    /// Completes the drag: relocates the active card per `drop` and
    /// resets the session.
    ///
    /// The preview flag and phase are reset no matter how the relocation
    /// turns out; a drag-end without a matching drag-start is absorbed as
    /// [`Relocation::Ignored`].
    pub fn drag_ended<T>(&mut self, board: &BoardModel<T>, drop: DropTarget<'_>) -> Relocation {
        let outcome = match self.active_card.take() {
            Some(card) => board.relocate(&card, drop),
            None => {
                tracing::debug!(target: "lanekit::drag", "drag end without active drag");
                Relocation::Ignored(IgnoreReason::NoActiveDrag)
            }
        };
        self.reset();
        outcome
    }

    /// Abandons the session without touching the board.
    pub fn cancel(&mut self) {
        tracing::trace!(target: "lanekit::drag", "drag cancelled");
        self.reset();
    }

    fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.active_card = None;
        self.drop_preview = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Card, Lane};

    fn one_card_board() -> BoardModel<&'static str> {
        BoardModel::from_lanes(vec![
            Lane::with_id_and_cards("r1", vec![Card::with_id("i1", "x")]).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_drag_lifecycle() {
        let board = one_card_board();
        let mut drag = DragController::new();

        assert_eq!(drag.phase(), DragPhase::Idle);
        assert!(!drag.drop_preview_visible());

        drag.drag_started("i1");
        assert!(drag.is_dragging());
        assert_eq!(drag.active_card(), Some("i1"));
        assert!(drag.drop_preview_visible());

        let outcome = drag.drag_ended(&board, DropTarget::NewLane);
        assert!(matches!(outcome, Relocation::Spawned { .. }));
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert_eq!(drag.active_card(), None);
        assert!(!drag.drop_preview_visible());
    }

    #[test]
    fn test_preview_cleared_on_noop_paths() {
        let board = one_card_board();
        let mut drag = DragController::new();

        // Stale card.
        drag.drag_started("vanished");
        let outcome = drag.drag_ended(&board, DropTarget::Id("r1"));
        assert_eq!(outcome, Relocation::Ignored(IgnoreReason::StaleCard));
        assert!(!drag.drop_preview_visible());

        // Cancelled drop.
        drag.drag_started("i1");
        let outcome = drag.drag_ended(&board, DropTarget::Cancelled);
        assert_eq!(outcome, Relocation::Ignored(IgnoreReason::Cancelled));
        assert!(!drag.drop_preview_visible());

        // Self drop.
        drag.drag_started("i1");
        let outcome = drag.drag_ended(&board, DropTarget::Id("r1"));
        assert_eq!(outcome, Relocation::Unchanged);
        assert!(!drag.drop_preview_visible());
    }

    #[test]
    fn test_drag_end_without_start() {
        let board = one_card_board();
        let mut drag = DragController::new();

        let outcome = drag.drag_ended(&board, DropTarget::Id("r1"));
        assert_eq!(outcome, Relocation::Ignored(IgnoreReason::NoActiveDrag));
        assert_eq!(board.card_count(), 1);
    }

    #[test]
    fn test_cancel_resets_without_board_access() {
        let mut drag = DragController::new();
        drag.drag_started("i1");
        drag.cancel();

        assert_eq!(drag.phase(), DragPhase::Idle);
        assert_eq!(drag.active_card(), None);
        assert!(!drag.drop_preview_visible());
    }

    #[test]
    fn test_restarted_drag_replaces_session() {
        let mut drag = DragController::new();
        drag.drag_started("i1");
        drag.drag_started("i2");
        assert_eq!(drag.active_card(), Some("i2"));
    }
}
