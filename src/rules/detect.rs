//! Mill detection.
//!
//! Works over the precomputed line catalog: a position is part of a mill
//! for a player iff some catalog line through it has all three members
//! owned by that player. Mill formation is a pure boolean OR across the
//! lines through one position — no ordering or tie-break is needed, and
//! a move can only form a mill at its destination, so callers check the
//! just-occupied position and nothing else.

use crate::board::{MillCatalog, OwnershipStore};
use crate::core::{PlayerId, Position};

/// Detector over a borrowed catalog. Stateless between calls; ownership
/// is read from the store passed to each query.
#[derive(Clone, Copy, Debug)]
pub struct MillDetector<'a> {
    catalog: &'a MillCatalog,
}

impl<'a> MillDetector<'a> {
    /// Create a detector for a catalog.
    #[must_use]
    pub fn new(catalog: &'a MillCatalog) -> Self {
        Self { catalog }
    }

    /// Is `pos` part of a line fully owned by `player`?
    ///
    /// Called with a just-occupied position to decide whether a placement
    /// or move formed a mill, and with an arbitrary occupied position to
    /// decide whether a piece is protected from capture.
    #[must_use]
    pub fn is_mill(&self, store: &OwnershipStore, pos: Position, player: PlayerId) -> bool {
        self.catalog.lines_through(pos).any(|line| {
            line.positions()
                .iter()
                .all(|&p| store.is_owned_by(p, player))
        })
    }

    /// Is every piece `owner` has on the board part of some mill?
    ///
    /// When true, the capture protection rule is waived and any of the
    /// owner's pieces may be removed. Vacuously true for a player with no
    /// pieces on the board.
    #[must_use]
    pub fn all_in_mills(&self, store: &OwnershipStore, owner: PlayerId) -> bool {
        store
            .positions_owned_by(owner)
            .into_iter()
            .all(|pos| self.is_mill(store, pos, owner))
    }
}
