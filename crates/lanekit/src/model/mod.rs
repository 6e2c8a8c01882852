//! The board model: lanes, cards, and the relocation engine.
//!
//! A board is a two-level ordered collection — lanes in display order,
//! each holding cards in display order — that stays internally consistent
//! while cards are relocated by drag gestures. The model enforces three
//! invariants after every operation:
//!
//! 1. every card id is unique across the whole board;
//! 2. every lane id is unique;
//! 3. no lane is ever empty (a lane is created around its first card and
//!    deleted when its last card leaves).
//!
//! # Core Types
//!
//! - [`Card`] / [`CardId`]: the unit being relocated, with an opaque
//!   caller-owned payload
//! - [`Lane`] / [`LaneId`]: an ordered card container
//! - [`BoardModel`]: the lane sequence, single source of truth
//! - [`DropTarget`] / [`Relocation`]: input and outcome of the relocation
//!   engine
//! - [`BoardSignals`]: change notifications for the render collaborator
//!
//! # Example
//!
//! ```
//! use lanekit::model::{BoardModel, DropTarget};
//!
//! let board: BoardModel<&str> = BoardModel::new();
//! board.add_lane("triage");
//! board.add_lane("in progress");
//!
//! let (card, lane) = {
//!     let lanes = board.lanes();
//!     (lanes[0].cards()[0].id().clone(), lanes[1].id().clone())
//! };
//!
//! board.relocate(card.as_str(), DropTarget::Id(lane.as_str()));
//! assert_eq!(board.lanes()[0].len(), 2);
//! ```

mod board;
mod card;
mod lane;
mod relocate;
mod signals;

pub use board::{BoardError, BoardModel, BoardOptions};
pub use card::{Card, CardId};
pub use lane::{Lane, LaneId};
pub use relocate::{DropTarget, IgnoreReason, Relocation};
pub use signals::{BoardSignals, CardMove};
