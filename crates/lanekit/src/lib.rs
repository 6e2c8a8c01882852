//! lanekit — an ordered board of lanes and cards that stays consistent
//! while cards are relocated by drag gestures.
//!
//! The crate is a model layer only. Rendering, pointer tracking and
//! collision detection live in external collaborators: a gesture layer
//! reports drag starts and completed drops as opaque ids, a render layer
//! reads the board and listens to its signals. lanekit turns each
//! completed drop into the next consistent board state — no orphaned
//! cards, no empty lanes, ids preserved across every move.
//!
//! # Example
//!
//! ```
//! use lanekit::prelude::*;
//!
//! let board: BoardModel<String> = BoardModel::new();
//! board.add_lane("write the docs".to_string());
//! let target = board.add_lane("review the PR".to_string());
//!
//! // The gesture layer hands back the ids it registered for rendering.
//! let card = board.lanes()[0].cards()[0].id().clone();
//!
//! let mut drag = DragController::new();
//! drag.drag_started(card.as_str());
//! let outcome = drag.drag_ended(&board, DropTarget::Id(target.as_str()));
//!
//! assert!(matches!(outcome, Relocation::Moved { .. }));
//! assert_eq!(board.lane_count(), 1);
//! ```
//!
//! # Crates
//!
//! - `lanekit` (this crate): the board model and drag plumbing
//! - `lanekit-core`: the signal/slot foundation, re-exported here

pub mod drag;
pub mod model;
pub mod prelude;

pub use drag::{DragController, DragPhase};
pub use model::{
    BoardError, BoardModel, BoardOptions, BoardSignals, Card, CardId, CardMove, DropTarget,
    IgnoreReason, Lane, LaneId, Relocation,
};

pub use lanekit_core::{ConnectionGuard, ConnectionId, Signal};

/// Log target names used across the crate, for building `tracing` filter
/// directives.
pub mod targets {
    /// Board model transactions.
    pub const BOARD: &str = "lanekit::board";
    /// Drag session tracking.
    pub const DRAG: &str = "lanekit::drag";
}
