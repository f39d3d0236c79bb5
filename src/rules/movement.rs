//! Move legality.
//!
//! Sliding moves follow the board's adjacency: a piece may step to any
//! directly connected empty intersection. The adjacency already encodes
//! the two geometric subtleties — scans skip lattice points that are not
//! intersections, and nothing connects across the center gap on
//! multi-ring boards — so legality here never re-derives geometry (see
//! `board::topology`).
//!
//! The flying exception is the one rule that bypasses adjacency: a player
//! down to three pieces may relocate to any empty intersection. It only
//! applies from three rings up; on 1- and 2-ring boards the geometry is
//! tight enough that flying would unbalance (or trivialize) the endgame.

use crate::board::{BoardTopology, OwnershipStore};
use crate::core::{PlayerId, Position};

/// Flying-rule threshold in total pieces (on board + in hand).
const FLYING_PIECE_COUNT: u32 = 3;

/// Smallest board on which the flying rule applies.
const FLYING_MIN_RINGS: i32 = 3;

/// May a player with `total_pieces` pieces fly on a `ring_count` board?
#[must_use]
pub fn may_fly(total_pieces: u32, ring_count: i32) -> bool {
    total_pieces <= FLYING_PIECE_COUNT && ring_count >= FLYING_MIN_RINGS
}

/// Move legality over a borrowed topology.
#[derive(Clone, Copy, Debug)]
pub struct MoveRules<'a> {
    topology: &'a BoardTopology,
}

impl<'a> MoveRules<'a> {
    /// Create a legality engine for a topology.
    #[must_use]
    pub fn new(topology: &'a BoardTopology) -> Self {
        Self { topology }
    }

    /// Legal destinations for a piece at `from`.
    ///
    /// With `flying` set, every empty intersection qualifies; otherwise
    /// the empty adjacent intersections do. Results are in a stable
    /// order. Read-only: calling twice without board mutation yields
    /// identical results.
    #[must_use]
    pub fn available_moves(
        &self,
        store: &OwnershipStore,
        from: Position,
        flying: bool,
    ) -> Vec<Position> {
        if flying {
            return self
                .topology
                .positions()
                .iter()
                .copied()
                .filter(|&p| !store.is_occupied(p))
                .collect();
        }

        self.topology
            .neighbors(from)
            .iter()
            .copied()
            .filter(|&p| !store.is_occupied(p))
            .collect()
    }

    /// Can `player` move at all?
    ///
    /// True iff some piece of `player` has at least one legal
    /// destination. A player with no legal move on their turn is blocked
    /// and loses.
    #[must_use]
    pub fn has_any_legal_move(
        &self,
        store: &OwnershipStore,
        player: PlayerId,
        flying: bool,
    ) -> bool {
        store
            .positions_owned_by(player)
            .into_iter()
            .any(|pos| !self.available_moves(store, pos, flying).is_empty())
    }
}
