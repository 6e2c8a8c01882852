//! The relocation engine: drag-completed board transitions.
//!
//! A completed drag is reported as a pair of opaque identifiers — the
//! moved card's id and a [`DropTarget`]. One call to
//! [`BoardModel::relocate`] turns that report into the next board state,
//! as a single atomic transaction:
//!
//! - drop on another lane moves the card to the end of that lane;
//! - drop that resolves to no lane spawns a fresh lane at the end of the
//!   board, seeded with the card;
//! - a lane losing its last card is deleted in the same transaction;
//! - drop on a card in the same lane splices the card to that position
//!   (when enabled via [`BoardOptions::reorder_within_lane`]).
//!
//! The engine never raises an error toward the gesture layer: stale and
//! unresolvable reports are absorbed as no-ops and show up only in the
//! returned [`Relocation`] and the debug log.
//!
//! [`BoardOptions::reorder_within_lane`]: super::BoardOptions::reorder_within_lane

use super::board::{
    BoardModel, lane_position_by_id, lane_position_of_card, remove_lane_if_empty,
};
use super::card::CardId;
use super::lane::{Lane, LaneId};
use super::signals::CardMove;

/// Where a completed drag landed, as reported by the gesture collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget<'a> {
    /// An opaque id from the collision layer.
    ///
    /// The engine re-derives the destination lane itself: lane-id lookup
    /// first, then card-id lookup (resolving to the lane containing that
    /// card). An id matching neither spawns a new lane when
    /// [`BoardOptions::spawn_lane_on_unresolved_drop`] is set.
    ///
    /// [`BoardOptions::spawn_lane_on_unresolved_drop`]: super::BoardOptions::spawn_lane_on_unresolved_drop
    Id(&'a str),

    /// Explicit request to move the card into a freshly spawned lane.
    NewLane,

    /// The drag ended without a drop; the board is left untouched.
    Cancelled,
}

/// Why a relocation left the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The drag was cancelled by the gesture layer.
    Cancelled,

    /// The moved card no longer exists on the board (stale event).
    StaleCard,

    /// The drop id matched neither a lane nor a card, and spawning on
    /// unresolved drops is disabled.
    UnresolvedTarget,

    /// Drag-end arrived without a matching drag-start.
    NoActiveDrag,
}

/// Outcome of a [`BoardModel::relocate`] call.
///
/// Relocation never fails: anomalies are absorbed and reported as
/// [`Relocation::Ignored`], and the gesture layer may discard the value
/// entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relocation {
    /// The card was appended to another existing lane.
    Moved {
        /// The moved card.
        card: CardId,
        /// Lane the card left (deleted if the card was its last).
        from: LaneId,
        /// Lane the card was appended to.
        to: LaneId,
    },

    /// The card was moved into a lane spawned by this call.
    Spawned {
        /// The moved card.
        card: CardId,
        /// The freshly created lane, appended at the end of the board.
        lane: LaneId,
    },

    /// The card changed position within its own lane.
    Reordered {
        /// The moved card.
        card: CardId,
        /// The lane the card stayed in.
        lane: LaneId,
        /// Position before the splice.
        from: usize,
        /// Position after the splice.
        to: usize,
    },

    /// The card was dropped on its own lane; nothing changed.
    Unchanged,

    /// Nothing happened; see the reason.
    Ignored(IgnoreReason),
}

impl Relocation {
    /// `true` when the call left the board unchanged.
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Unchanged | Self::Ignored(_))
    }
}

/// Destination of a drop after id resolution.
enum Resolved {
    /// An existing lane; `card_pos` is set when the drop id named a card
    /// rather than the lane itself.
    Lane { index: usize, card_pos: Option<usize> },
    /// No existing lane; seed a new one with the moved card.
    Spawn,
}

impl<T> BoardModel<T> {
    /// Applies a completed drag gesture and returns what happened.
    ///
    /// `card_id` is the id of the card that was dragged; `drop` is where
    /// the gesture layer says it landed. The whole transition is one
    /// write transaction: readers observe either the previous board or
    /// the finished one, never an intermediate state. Signals fire after
    /// the transaction commits, in the order the changes were applied
    /// (lane inserted, lane removed, card relocated).
    ///
    /// A card id that no longer exists makes the call a no-op — drag
    /// reports can outlive the cards they refer to, and the engine
    /// swallows such events rather than surfacing an error.
    pub fn relocate(&self, card_id: &str, drop: DropTarget<'_>) -> Relocation {
        let mut inserted: Option<(usize, LaneId)> = None;
        let mut removed: Option<(usize, LaneId)> = None;
        let mut card_move: Option<CardMove> = None;
        let outcome: Relocation;

        {
            let mut lanes = self.lanes.write();

            let Some((source, card_pos)) = lane_position_of_card(&lanes, card_id) else {
                tracing::debug!(
                    target: "lanekit::board",
                    card = card_id,
                    "relocate ignored: card no longer exists"
                );
                return Relocation::Ignored(IgnoreReason::StaleCard);
            };

            let resolved = match drop {
                DropTarget::Cancelled => {
                    tracing::trace!(target: "lanekit::board", card = card_id, "drag cancelled");
                    return Relocation::Ignored(IgnoreReason::Cancelled);
                }
                DropTarget::NewLane => Resolved::Spawn,
                DropTarget::Id(raw) => {
                    if let Some(index) = lane_position_by_id(&lanes, raw) {
                        Resolved::Lane {
                            index,
                            card_pos: None,
                        }
                    } else if let Some((index, pos)) = lane_position_of_card(&lanes, raw) {
                        Resolved::Lane {
                            index,
                            card_pos: Some(pos),
                        }
                    } else if self.options.spawn_lane_on_unresolved_drop {
                        Resolved::Spawn
                    } else {
                        tracing::debug!(
                            target: "lanekit::board",
                            card = card_id,
                            drop_id = raw,
                            "relocate ignored: unresolved drop target"
                        );
                        return Relocation::Ignored(IgnoreReason::UnresolvedTarget);
                    }
                }
            };

            match resolved {
                Resolved::Spawn => {
                    let card = lanes[source].cards_mut().remove(card_pos);
                    let moved = card.id().clone();
                    let from = lanes[source].id().clone();

                    // New lane goes to the end of the board first; only
                    // then is the emptied source deleted, so the relative
                    // order of every untouched lane is preserved.
                    let lane = Lane::with_card(card);
                    let lane_id = lane.id().clone();
                    lanes.push(lane);

                    let removed_source = match remove_lane_if_empty(&mut lanes, source) {
                        Some(id) => {
                            removed = Some((source, id));
                            true
                        }
                        None => false,
                    };

                    inserted = Some((lanes.len() - 1, lane_id.clone()));
                    card_move = Some(CardMove {
                        card: moved.clone(),
                        from,
                        to: lane_id.clone(),
                        to_index: 0,
                        spawned_lane: true,
                        removed_source,
                    });
                    outcome = Relocation::Spawned {
                        card: moved,
                        lane: lane_id,
                    };
                }

                Resolved::Lane {
                    index: target,
                    card_pos: target_card,
                } if target == source => match target_card {
                    Some(dest) if self.options.reorder_within_lane && dest != card_pos => {
                        let cards = lanes[source].cards_mut();
                        let card = cards.remove(card_pos);
                        let moved = card.id().clone();
                        cards.insert(dest, card);

                        let lane_id = lanes[source].id().clone();
                        card_move = Some(CardMove {
                            card: moved.clone(),
                            from: lane_id.clone(),
                            to: lane_id.clone(),
                            to_index: dest,
                            spawned_lane: false,
                            removed_source: false,
                        });
                        outcome = Relocation::Reordered {
                            card: moved,
                            lane: lane_id,
                            from: card_pos,
                            to: dest,
                        };
                    }
                    _ => {
                        return Relocation::Unchanged;
                    }
                },

                Resolved::Lane { index: target, .. } => {
                    let card = lanes[source].cards_mut().remove(card_pos);
                    let moved = card.id().clone();
                    let from = lanes[source].id().clone();
                    let to = lanes[target].id().clone();

                    // The card always lands at the end of its destination;
                    // insertion position is never inferred from pointer
                    // coordinates.
                    lanes[target].cards_mut().push(card);
                    let to_index = lanes[target].len() - 1;

                    let removed_source = match remove_lane_if_empty(&mut lanes, source) {
                        Some(id) => {
                            removed = Some((source, id));
                            true
                        }
                        None => false,
                    };

                    card_move = Some(CardMove {
                        card: moved.clone(),
                        from: from.clone(),
                        to: to.clone(),
                        to_index,
                        spawned_lane: false,
                        removed_source,
                    });
                    outcome = Relocation::Moved {
                        card: moved,
                        from,
                        to,
                    };
                }
            }

            #[cfg(debug_assertions)]
            if let Err(err) = super::board::validate_lanes(&lanes) {
                panic!("board invariant violated after relocation: {err}");
            }
        }

        if let Some((index, id)) = inserted {
            self.signals().lane_inserted.emit((index, id));
        }
        if let Some((index, id)) = removed {
            self.signals().lane_removed.emit((index, id));
        }
        if let Some(notice) = card_move {
            tracing::debug!(
                target: "lanekit::board",
                card = %notice.card,
                from = %notice.from,
                to = %notice.to,
                "card relocated"
            );
            self.signals().card_relocated.emit(notice);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoardOptions, Card};

    fn board_rows(rows: &[(&str, &[&str])]) -> BoardModel<&'static str> {
        let lanes = rows
            .iter()
            .map(|(lane_id, card_ids)| {
                let cards = card_ids
                    .iter()
                    .map(|id| Card::with_id(*id, "payload"))
                    .collect();
                Lane::with_id_and_cards(*lane_id, cards).unwrap()
            })
            .collect();
        BoardModel::from_lanes(lanes).unwrap()
    }

    fn card_ids_of(board: &BoardModel<&'static str>, lane: usize) -> Vec<String> {
        board.lanes()[lane]
            .cards()
            .iter()
            .map(|card| card.id().as_str().to_owned())
            .collect()
    }

    #[test]
    fn test_unresolved_drop_spawns_lane_and_deletes_empty_source() {
        let board = board_rows(&[("r1", &["i1"])]);

        let outcome = board.relocate("i1", DropTarget::Id("nonexistent"));

        assert!(matches!(outcome, Relocation::Spawned { ref card, .. } if card.as_str() == "i1"));
        assert_eq!(board.lane_count(), 1);
        assert_ne!(board.lanes()[0].id().as_str(), "r1");
        assert_eq!(card_ids_of(&board, 0), vec!["i1"]);
    }

    #[test]
    fn test_move_to_other_lane_appends_at_end() {
        let board = board_rows(&[("r1", &["i1"]), ("r2", &["i2"])]);

        let outcome = board.relocate("i1", DropTarget::Id("r2"));

        assert_eq!(
            outcome,
            Relocation::Moved {
                card: CardId::from("i1"),
                from: LaneId::from("r1"),
                to: LaneId::from("r2"),
            }
        );
        assert_eq!(board.lane_count(), 1);
        assert_eq!(board.lanes()[0].id().as_str(), "r2");
        assert_eq!(card_ids_of(&board, 0), vec!["i2", "i1"]);
    }

    #[test]
    fn test_self_drop_is_a_noop() {
        let board = board_rows(&[("r1", &["i1"]), ("r2", &["i2"])]);
        let before = board.snapshot();

        let outcome = board.relocate("i1", DropTarget::Id("r1"));

        assert_eq!(outcome, Relocation::Unchanged);
        assert!(outcome.is_noop());
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_stale_card_is_a_noop() {
        let board = board_rows(&[("r1", &["i1"]), ("r2", &["i2"])]);
        let before = board.snapshot();

        let outcome = board.relocate("i_unknown", DropTarget::Id("r2"));

        assert_eq!(outcome, Relocation::Ignored(IgnoreReason::StaleCard));
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_cancelled_drop_is_a_noop() {
        let board = board_rows(&[("r1", &["i1"])]);
        let before = board.snapshot();

        let outcome = board.relocate("i1", DropTarget::Cancelled);

        assert_eq!(outcome, Relocation::Ignored(IgnoreReason::Cancelled));
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_explicit_new_lane_spawns_even_when_source_survives() {
        let board = board_rows(&[("r1", &["i1", "i2"])]);

        let outcome = board.relocate("i1", DropTarget::NewLane);

        assert!(matches!(outcome, Relocation::Spawned { .. }));
        assert_eq!(board.lane_count(), 2);
        assert_eq!(board.lanes()[0].id().as_str(), "r1");
        assert_eq!(card_ids_of(&board, 0), vec!["i2"]);
        assert_eq!(card_ids_of(&board, 1), vec!["i1"]);
    }

    #[test]
    fn test_unresolved_drop_with_spawning_disabled_is_a_noop() {
        let board = BoardModel::with_options(BoardOptions {
            spawn_lane_on_unresolved_drop: false,
            ..BoardOptions::default()
        });
        board
            .set_lanes(vec![
                Lane::with_id_and_cards("r1", vec![Card::with_id("i1", ())]).unwrap(),
            ])
            .unwrap();
        let before = board.snapshot();

        let outcome = board.relocate("i1", DropTarget::Id("nowhere"));

        assert_eq!(outcome, Relocation::Ignored(IgnoreReason::UnresolvedTarget));
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_drop_on_card_resolves_to_its_lane() {
        let board = board_rows(&[("r1", &["i1"]), ("r2", &["i2", "i3"])]);

        // The collision layer reported a card id; the engine maps it to
        // the containing lane and still appends at the end.
        let outcome = board.relocate("i1", DropTarget::Id("i2"));

        assert!(matches!(outcome, Relocation::Moved { ref to, .. } if to.as_str() == "r2"));
        assert_eq!(card_ids_of(&board, 0), vec!["i2", "i3", "i1"]);
    }

    #[test]
    fn test_drop_on_card_in_own_lane_splices_forward() {
        let board = board_rows(&[("r1", &["i1", "i2", "i3", "i4"])]);

        let outcome = board.relocate("i1", DropTarget::Id("i3"));

        assert_eq!(
            outcome,
            Relocation::Reordered {
                card: CardId::from("i1"),
                lane: LaneId::from("r1"),
                from: 0,
                to: 2,
            }
        );
        assert_eq!(card_ids_of(&board, 0), vec!["i2", "i3", "i1", "i4"]);
    }

    #[test]
    fn test_drop_on_card_in_own_lane_splices_backward() {
        let board = board_rows(&[("r1", &["i1", "i2", "i3", "i4"])]);

        let outcome = board.relocate("i4", DropTarget::Id("i2"));

        assert_eq!(
            outcome,
            Relocation::Reordered {
                card: CardId::from("i4"),
                lane: LaneId::from("r1"),
                from: 3,
                to: 1,
            }
        );
        assert_eq!(card_ids_of(&board, 0), vec!["i1", "i4", "i2", "i3"]);
    }

    #[test]
    fn test_drop_on_own_card_is_a_noop() {
        let board = board_rows(&[("r1", &["i1", "i2"])]);
        let before = board.snapshot();

        let outcome = board.relocate("i1", DropTarget::Id("i1"));

        assert_eq!(outcome, Relocation::Unchanged);
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_reordering_can_be_disabled() {
        let board = BoardModel::with_options(BoardOptions {
            reorder_within_lane: false,
            ..BoardOptions::default()
        });
        board
            .set_lanes(vec![
                Lane::with_id_and_cards(
                    "r1",
                    vec![Card::with_id("i1", ()), Card::with_id("i2", ())],
                )
                .unwrap(),
            ])
            .unwrap();
        let before = board.snapshot();

        let outcome = board.relocate("i1", DropTarget::Id("i2"));

        assert_eq!(outcome, Relocation::Unchanged);
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_index_accounting_when_source_precedes_target() {
        let board = board_rows(&[("r1", &["i1"]), ("r2", &["i2"]), ("r3", &["i3"])]);

        board.relocate("i1", DropTarget::Id("r3"));

        assert_eq!(board.lane_count(), 2);
        assert_eq!(board.lanes()[0].id().as_str(), "r2");
        assert_eq!(board.lanes()[1].id().as_str(), "r3");
        assert_eq!(card_ids_of(&board, 1), vec!["i3", "i1"]);
    }

    #[test]
    fn test_card_count_is_conserved() {
        let board = board_rows(&[("r1", &["i1", "i2"]), ("r2", &["i3"])]);
        assert_eq!(board.card_count(), 3);

        board.relocate("i1", DropTarget::Id("r2"));
        assert_eq!(board.card_count(), 3);

        board.relocate("i2", DropTarget::NewLane);
        assert_eq!(board.card_count(), 3);

        board.relocate("i3", DropTarget::Id("zzz"));
        assert_eq!(board.card_count(), 3);
    }

    #[test]
    fn test_moved_card_keeps_id_and_content() {
        let lanes = vec![
            Lane::with_id_and_cards("r1", vec![Card::with_id("i1", "precious payload")]).unwrap(),
            Lane::with_id_and_cards("r2", vec![Card::with_id("i2", "other")]).unwrap(),
        ];
        let board = BoardModel::from_lanes(lanes).unwrap();

        board.relocate("i1", DropTarget::Id("r2"));

        let lanes = board.lanes();
        let card = &lanes[0].cards()[1];
        assert_eq!(card.id().as_str(), "i1");
        assert_eq!(*card.content(), "precious payload");
    }

    #[test]
    fn test_invariants_hold_after_a_burst_of_relocations() {
        let board = board_rows(&[
            ("r1", &["i1", "i2"]),
            ("r2", &["i3"]),
            ("r3", &["i4", "i5", "i6"]),
        ]);

        board.relocate("i3", DropTarget::Id("r1"));
        board.relocate("i1", DropTarget::NewLane);
        board.relocate("i5", DropTarget::Id("i2"));
        board.relocate("i6", DropTarget::Id("does-not-exist"));
        board.relocate("i4", DropTarget::Id("r3"));
        board.relocate("gone", DropTarget::Id("r3"));

        assert!(board.validate().is_ok());
        assert_eq!(board.card_count(), 6);
    }
}
