//! Change notifications for the board model.
//!
//! The render collaborator connects to these signals to stay synchronized
//! with the board. Every signal fires after the transaction that caused
//! it has committed and the board lock has been released, so a slot may
//! freely read the board (or request the next mutation).

use lanekit_core::Signal;

use super::card::CardId;
use super::lane::LaneId;

/// Description of a completed relocation, carried by
/// [`BoardSignals::card_relocated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMove {
    /// The card that moved.
    pub card: CardId,
    /// Lane the card left.
    pub from: LaneId,
    /// Lane the card ended up in. Equals `from` for an intra-lane splice;
    /// names a fresh lane when `spawned_lane` is set.
    pub to: LaneId,
    /// Final position of the card within `to`.
    pub to_index: usize,
    /// Whether `to` was created by this relocation.
    pub spawned_lane: bool,
    /// Whether `from` was deleted because the card was its last occupant.
    pub removed_source: bool,
}

/// Signals emitted by [`BoardModel`](super::BoardModel).
///
/// For a relocation that changes lane structure, the structural signals
/// fire first in the order the transaction applied them (insertion, then
/// removal), followed by one [`card_relocated`](Self::card_relocated)
/// summary.
pub struct BoardSignals {
    /// A lane was appended to the board.
    /// Args: (index the lane now occupies, lane id).
    pub lane_inserted: Signal<(usize, LaneId)>,

    /// A lane was deleted after losing its last card.
    /// Args: (index the lane occupied, lane id).
    pub lane_removed: Signal<(usize, LaneId)>,

    /// A card changed lane or position; one emission per relocation that
    /// changed anything.
    pub card_relocated: Signal<CardMove>,

    /// The whole board was replaced or cleared.
    pub board_reset: Signal<()>,
}

impl Default for BoardSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardSignals {
    /// Creates a new set of board signals.
    pub fn new() -> Self {
        Self {
            lane_inserted: Signal::new(),
            lane_removed: Signal::new(),
            card_relocated: Signal::new(),
            board_reset: Signal::new(),
        }
    }
}
