//! Lanes: ordered card containers.
//!
//! A lane is never empty. It is created around its first card and deleted
//! by the board as soon as its last card leaves; "empty" exists only
//! transiently inside a relocation transaction.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::card::Card;

/// Counter for generating unique lane ids.
static LANE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier of a [`Lane`], unique across the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneId(String);

impl LaneId {
    /// Generates a fresh unique id.
    pub fn generate() -> Self {
        Self(format!(
            "lane-{}",
            LANE_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
        ))
    }

    /// The id as a raw string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for LaneId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for LaneId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

/// An ordered container of cards; the first level of the board.
///
/// Card order is insertion order and doubles as display order for the
/// render collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane<T> {
    id: LaneId,
    cards: Vec<Card<T>>,
}

impl<T> Lane<T> {
    /// Creates a lane seeded with one fresh card around `content`.
    pub fn new(content: T) -> Self {
        Self::with_card(Card::new(content))
    }

    /// Creates a lane around an existing card.
    ///
    /// This is the path a relocation takes when it spawns a lane for the
    /// moved card.
    pub fn with_card(card: Card<T>) -> Self {
        Self {
            id: LaneId::generate(),
            cards: vec![card],
        }
    }

    /// Builds a lane from existing cards.
    ///
    /// Returns `None` for an empty vector: a lane is never created empty.
    pub fn with_cards(cards: Vec<Card<T>>) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        Some(Self {
            id: LaneId::generate(),
            cards,
        })
    }

    /// Builds a lane with an externally assigned id.
    ///
    /// Intended for callers restoring a board from their own snapshot;
    /// returns `None` for an empty card vector.
    pub fn with_id_and_cards(id: impl Into<LaneId>, cards: Vec<Card<T>>) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        Some(Self {
            id: id.into(),
            cards,
        })
    }

    /// The lane's identifier.
    pub fn id(&self) -> &LaneId {
        &self.id
    }

    /// The cards in display order.
    pub fn cards(&self) -> &[Card<T>] {
        &self.cards
    }

    /// Number of cards in the lane.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// `true` when the lane holds no cards.
    ///
    /// Outside a board transaction this is never observed; the board
    /// deletes a lane before the state in which this returns `true` can
    /// escape.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Position of the card with the given raw id, if present.
    pub fn position_of(&self, card_id: &str) -> Option<usize> {
        self.cards
            .iter()
            .position(|card| card.id().as_str() == card_id)
    }

    /// Board-internal mutable access for relocation transactions.
    pub(crate) fn cards_mut(&mut self) -> &mut Vec<Card<T>> {
        &mut self.cards
    }
}
