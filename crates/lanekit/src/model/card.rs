//! Cards: the unit being relocated.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique card ids.
static CARD_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier of a [`Card`], unique across the whole board.
///
/// Generated ids come from a process-wide monotonic counter, so two cards
/// created in the same process never collide. Ids restored from an
/// external source via `From` are accepted as-is; their uniqueness is the
/// caller's contract and is checked by
/// [`BoardModel::validate`](super::BoardModel::validate).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(String);

impl CardId {
    /// Generates a fresh unique id.
    pub fn generate() -> Self {
        Self(format!(
            "card-{}",
            CARD_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
        ))
    }

    /// The id as a raw string slice, the form gesture layers traffic in.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CardId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for CardId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

/// A draggable unit carrying an opaque, caller-owned payload.
///
/// The board never inspects or mutates `content`; it only moves cards
/// between lanes. The id is fixed at creation and preserved across every
/// relocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card<T> {
    id: CardId,
    content: T,
}

impl<T> Card<T> {
    /// Creates a card with a fresh unique id around the given payload.
    pub fn new(content: T) -> Self {
        Self {
            id: CardId::generate(),
            content,
        }
    }

    /// Creates a card with an externally assigned id.
    ///
    /// Intended for callers restoring a board from their own snapshot.
    pub fn with_id(id: impl Into<CardId>, content: T) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }

    /// The card's identifier.
    pub fn id(&self) -> &CardId {
        &self.id
    }

    /// Borrows the payload.
    pub fn content(&self) -> &T {
        &self.content
    }

    /// Mutably borrows the payload.
    pub fn content_mut(&mut self) -> &mut T {
        &mut self.content
    }

    /// Consumes the card, returning the payload.
    pub fn into_content(self) -> T {
        self.content
    }
}
