//! Piece ownership store.
//!
//! The single source of truth for what is standing on the board: a map
//! from occupied position to owning player. Absence means empty. This is
//! a pure data container — placement, movement, and capture legality are
//! all enforced by callers before mutation, which keeps the store
//! trivially testable and reusable by the mill detector and the move
//! legality engine.
//!
//! Backed by a persistent map so snapshots clone in O(1).

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Position};

/// Map from occupied position to owning player.
///
/// Serialized as a sorted list of `(position, owner)` pairs so snapshots
/// are byte-stable and survive formats that require string map keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(Position, PlayerId)>", into = "Vec<(Position, PlayerId)>")]
pub struct OwnershipStore {
    owners: ImHashMap<Position, PlayerId>,
}

impl From<Vec<(Position, PlayerId)>> for OwnershipStore {
    fn from(pairs: Vec<(Position, PlayerId)>) -> Self {
        Self {
            owners: pairs.into_iter().collect(),
        }
    }
}

impl From<OwnershipStore> for Vec<(Position, PlayerId)> {
    fn from(store: OwnershipStore) -> Self {
        let mut pairs: Vec<_> = store.iter().collect();
        pairs.sort();
        pairs
    }
}

impl OwnershipStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `player` as the owner of `pos`, replacing any previous
    /// owner. No validation: callers check legality first.
    pub fn set(&mut self, pos: Position, player: PlayerId) {
        self.owners.insert(pos, player);
    }

    /// Clear `pos`. Removing an empty position is a no-op.
    pub fn remove(&mut self, pos: Position) {
        self.owners.remove(&pos);
    }

    /// The owner of `pos`, or `None` if empty.
    #[must_use]
    pub fn owner_of(&self, pos: Position) -> Option<PlayerId> {
        self.owners.get(&pos).copied()
    }

    /// Is a piece standing on `pos`?
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.owners.contains_key(&pos)
    }

    /// Is `pos` owned by `player`?
    #[must_use]
    pub fn is_owned_by(&self, pos: Position, player: PlayerId) -> bool {
        self.owner_of(pos) == Some(player)
    }

    /// Number of occupied positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Is the board empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Iterate over `(position, owner)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, PlayerId)> + '_ {
        self.owners.iter().map(|(&p, &o)| (p, o))
    }

    /// The positions owned by `player`, sorted for deterministic
    /// iteration.
    #[must_use]
    pub fn positions_owned_by(&self, player: PlayerId) -> Vec<Position> {
        let mut positions: Vec<Position> = self
            .iter()
            .filter(|&(_, owner)| owner == player)
            .map(|(pos, _)| pos)
            .collect();
        positions.sort();
        positions
    }

    /// Number of pieces `player` has on the board.
    #[must_use]
    pub fn count_owned_by(&self, player: PlayerId) -> usize {
        self.iter().filter(|&(_, owner)| owner == player).count()
    }
}
