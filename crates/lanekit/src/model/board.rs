//! The board: single source of truth for lanes and cards.
//!
//! `BoardModel<T>` owns the ordered lane sequence behind a `RwLock` and
//! exposes `&self` mutators, each of which is one atomic write
//! transaction. Readers (the render collaborator) take the read guard via
//! [`BoardModel::lanes`] and therefore never observe a half-applied
//! transition. Change notifications fire after the transaction commits
//! and the lock is released, so a slot may freely read the board.

use std::collections::HashSet;

use parking_lot::RwLock;
use thiserror::Error;

use super::card::CardId;
use super::lane::{Lane, LaneId};
use super::signals::BoardSignals;

/// Errors surfaced when caller-supplied board data violates the board
/// invariants.
///
/// The relocation engine itself never produces these: it absorbs every
/// drag-layer anomaly as a no-op. They arise only from restore paths
/// ([`BoardModel::from_lanes`], [`BoardModel::set_lanes`]) and from
/// explicit [`BoardModel::validate`] calls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The same card id appears more than once across the board.
    #[error("card id {0} appears more than once on the board")]
    DuplicateCardId(CardId),

    /// The same lane id appears more than once.
    #[error("lane id {0} appears more than once on the board")]
    DuplicateLaneId(LaneId),

    /// A lane with no cards was supplied.
    #[error("lane {0} has no cards")]
    EmptyLane(LaneId),
}

/// Behavior knobs for [`BoardModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOptions {
    /// Spawn a new lane when a drop id resolves to neither a lane nor a
    /// card. Gesture layers that report
    /// [`DropTarget::NewLane`](super::DropTarget::NewLane) explicitly may
    /// want this off so stray ids become no-ops instead.
    pub spawn_lane_on_unresolved_drop: bool,

    /// Splice a card to a new position when it is dropped onto another
    /// card in its own lane. When off, every same-lane drop is a no-op.
    pub reorder_within_lane: bool,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            spawn_lane_on_unresolved_drop: true,
            reorder_within_lane: true,
        }
    }
}

/// An ordered board of lanes of cards, relocatable by drag gestures.
///
/// The board is the single source of truth: the render collaborator holds
/// read-only views per render and requests every mutation through the
/// board's methods. See [`relocate`](BoardModel::relocate) for the drag
/// transition rules.
///
/// # Example
///
/// ```
/// use lanekit::model::{BoardModel, DropTarget, Relocation};
///
/// let board: BoardModel<String> = BoardModel::new();
/// let first = board.add_lane("write docs".to_string());
/// let second = board.add_lane("review".to_string());
///
/// let card = board.lanes()[0].cards()[0].id().clone();
/// let outcome = board.relocate(card.as_str(), DropTarget::Id(second.as_str()));
///
/// assert!(matches!(outcome, Relocation::Moved { .. }));
/// // The first lane lost its only card and is gone.
/// assert_eq!(board.lane_count(), 1);
/// # let _ = first;
/// ```
pub struct BoardModel<T> {
    pub(crate) lanes: RwLock<Vec<Lane<T>>>,
    pub(crate) options: BoardOptions,
    signals: BoardSignals,
}

impl<T> Default for BoardModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BoardModel<T> {
    /// Creates an empty board with default options.
    pub fn new() -> Self {
        Self::with_options(BoardOptions::default())
    }

    /// Creates an empty board with the given options.
    pub fn with_options(options: BoardOptions) -> Self {
        Self {
            lanes: RwLock::new(Vec::new()),
            options,
            signals: BoardSignals::new(),
        }
    }

    /// Creates a board from existing lanes, validating the invariants.
    pub fn from_lanes(lanes: Vec<Lane<T>>) -> Result<Self, BoardError> {
        validate_lanes(&lanes)?;
        Ok(Self {
            lanes: RwLock::new(lanes),
            options: BoardOptions::default(),
            signals: BoardSignals::new(),
        })
    }

    /// The options this board was created with.
    pub fn options(&self) -> BoardOptions {
        self.options
    }

    /// The signals emitted by this board.
    pub fn signals(&self) -> &BoardSignals {
        &self.signals
    }

    /// Number of lanes on the board.
    pub fn lane_count(&self) -> usize {
        self.lanes.read().len()
    }

    /// Total number of cards across all lanes.
    pub fn card_count(&self) -> usize {
        self.lanes.read().iter().map(Lane::len).sum()
    }

    /// `true` if the board has no lanes.
    pub fn is_empty(&self) -> bool {
        self.lanes.read().is_empty()
    }

    /// Read-only access to the lanes in display order.
    ///
    /// The returned guard blocks writers while held; drop it before
    /// requesting a mutation.
    pub fn lanes(&self) -> impl std::ops::Deref<Target = Vec<Lane<T>>> + '_ {
        self.lanes.read()
    }

    /// The lane ids in display order.
    pub fn lane_ids(&self) -> Vec<LaneId> {
        self.lanes.read().iter().map(|lane| lane.id().clone()).collect()
    }

    /// `true` if a card with the given raw id exists anywhere on the board.
    pub fn contains_card(&self, card_id: &str) -> bool {
        lane_position_of_card(&self.lanes.read(), card_id).is_some()
    }

    /// Id of the lane containing the given card, if any.
    pub fn lane_of_card(&self, card_id: &str) -> Option<LaneId> {
        let lanes = self.lanes.read();
        lane_position_of_card(&lanes, card_id).map(|(index, _)| lanes[index].id().clone())
    }

    /// Appends a new lane seeded with one fresh card around `content`.
    ///
    /// This is the explicit "add lane" action; lanes spawned implicitly by
    /// a relocation go through [`relocate`](BoardModel::relocate) instead.
    pub fn add_lane(&self, content: T) -> LaneId {
        let lane = Lane::new(content);
        let id = lane.id().clone();
        let index;
        {
            let mut lanes = self.lanes.write();
            index = lanes.len();
            lanes.push(lane);
        }
        tracing::debug!(target: "lanekit::board", lane = %id, index, "lane added");
        self.signals.lane_inserted.emit((index, id.clone()));
        id
    }

    /// Removes all lanes.
    pub fn clear(&self) {
        self.lanes.write().clear();
        self.signals.board_reset.emit(());
    }

    /// Replaces the whole board, validating the invariants first.
    ///
    /// On error the board is left untouched.
    pub fn set_lanes(&self, lanes: Vec<Lane<T>>) -> Result<(), BoardError> {
        validate_lanes(&lanes)?;
        *self.lanes.write() = lanes;
        self.signals.board_reset.emit(());
        Ok(())
    }

    /// Checks the board invariants: unique card ids, unique lane ids, no
    /// empty lane.
    pub fn validate(&self) -> Result<(), BoardError> {
        validate_lanes(&self.lanes.read())
    }
}

impl<T: Clone> BoardModel<T> {
    /// A deep copy of the lanes, for callers that need an owned snapshot.
    pub fn snapshot(&self) -> Vec<Lane<T>> {
        self.lanes.read().clone()
    }
}

/// Position of the lane whose id matches `raw`, if any.
pub(crate) fn lane_position_by_id<T>(lanes: &[Lane<T>], raw: &str) -> Option<usize> {
    lanes.iter().position(|lane| lane.id().as_str() == raw)
}

/// Position of the lane containing the card with id `raw`, plus the
/// card's position within that lane.
pub(crate) fn lane_position_of_card<T>(lanes: &[Lane<T>], raw: &str) -> Option<(usize, usize)> {
    lanes
        .iter()
        .enumerate()
        .find_map(|(index, lane)| lane.position_of(raw).map(|pos| (index, pos)))
}

/// Deletes the lane at `index` if it has no cards left, returning its id.
///
/// Invoked after every relocation that takes a card out of a lane;
/// "empty" is not a state a lane can rest in.
pub(crate) fn remove_lane_if_empty<T>(lanes: &mut Vec<Lane<T>>, index: usize) -> Option<LaneId> {
    if lanes[index].is_empty() {
        let gone = lanes.remove(index);
        Some(gone.id().clone())
    } else {
        None
    }
}

/// Checks the board invariants over a lane slice.
pub(crate) fn validate_lanes<T>(lanes: &[Lane<T>]) -> Result<(), BoardError> {
    let mut lane_ids = HashSet::new();
    let mut card_ids = HashSet::new();

    for lane in lanes {
        if lane.is_empty() {
            return Err(BoardError::EmptyLane(lane.id().clone()));
        }
        if !lane_ids.insert(lane.id().as_str()) {
            return Err(BoardError::DuplicateLaneId(lane.id().clone()));
        }
        for card in lane.cards() {
            if !card_ids.insert(card.id().as_str()) {
                return Err(BoardError::DuplicateCardId(card.id().clone()));
            }
        }
    }

    Ok(())
}
