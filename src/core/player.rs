//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two seats. Seats are fixed: the first
//! player is `PlayerId(0)`, the second `PlayerId(1)`.
//!
//! ## PlayerState
//!
//! Piece bookkeeping for one player: how many pieces are on the board,
//! how many are still in hand, and the allotment (`3 * ring_count`).
//!
//! ## PlayerPair
//!
//! Two-slot per-player storage indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier for a two-seat game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The first seat.
    pub const ONE: PlayerId = PlayerId(0);
    /// The second seat.
    pub const TWO: PlayerId = PlayerId(1);

    /// Create a player ID. Panics on an index other than 0 or 1.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!(id < 2, "two-player game: id must be 0 or 1");
        Self(id)
    }

    /// Raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats in order.
    #[must_use]
    pub const fn both() -> [PlayerId; 2] {
        [PlayerId::ONE, PlayerId::TWO]
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Piece bookkeeping for a single player.
///
/// Invariant: `pieces_on_board + remaining_pieces <= max_pieces`. A player
/// whose total drops below 3 has lost (checked by the state machine, not
/// here).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Display name, supplied by the settings store at game start.
    pub name: String,

    /// Pieces currently standing on the board.
    pub pieces_on_board: u32,

    /// Pieces not yet placed.
    pub remaining_pieces: u32,

    /// Total allotment for this board size (`3 * ring_count`).
    pub max_pieces: u32,
}

impl PlayerState {
    /// Create a player with a full hand of `max_pieces`.
    #[must_use]
    pub fn new(name: impl Into<String>, max_pieces: u32) -> Self {
        Self {
            name: name.into(),
            pieces_on_board: 0,
            remaining_pieces: max_pieces,
            max_pieces,
        }
    }

    /// Pieces on board plus pieces in hand.
    #[must_use]
    pub const fn total_pieces(&self) -> u32 {
        self.pieces_on_board + self.remaining_pieces
    }

    /// A player whose total falls below three can no longer form a mill
    /// and has lost.
    #[must_use]
    pub const fn has_lost_by_count(&self) -> bool {
        self.total_pieces() < 3
    }
}

/// Two-slot per-player storage with `Index` access by `PlayerId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from values for seat one and seat two.
    #[must_use]
    pub fn new(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Get a reference to a player's slot.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's slot.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over `(PlayerId, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ONE.index(), 0);
        assert_eq!(PlayerId::TWO.index(), 1);
        assert_eq!(PlayerId::ONE.opponent(), PlayerId::TWO);
        assert_eq!(PlayerId::TWO.opponent(), PlayerId::ONE);
        assert_eq!(format!("{}", PlayerId::ONE), "Player 1");
    }

    #[test]
    #[should_panic(expected = "two-player game")]
    fn test_player_id_rejects_third_seat() {
        PlayerId::new(2);
    }

    #[test]
    fn test_player_state_counts() {
        let mut p = PlayerState::new("Alice", 9);
        assert_eq!(p.total_pieces(), 9);
        assert!(!p.has_lost_by_count());

        p.remaining_pieces -= 1;
        p.pieces_on_board += 1;
        assert_eq!(p.total_pieces(), 9);

        p.pieces_on_board = 2;
        p.remaining_pieces = 0;
        assert!(p.has_lost_by_count());
    }

    #[test]
    fn test_player_pair_indexing() {
        let mut pair = PlayerPair::new(10, 20);
        assert_eq!(pair[PlayerId::ONE], 10);
        assert_eq!(pair[PlayerId::TWO], 20);

        pair[PlayerId::ONE] = 15;
        assert_eq!(pair[PlayerId::ONE], 15);
    }

    #[test]
    fn test_player_pair_iter() {
        let pair = PlayerPair::new("a", "b");
        let items: Vec<_> = pair.iter().collect();
        assert_eq!(items, vec![(PlayerId::ONE, &"a"), (PlayerId::TWO, &"b")]);
    }

    #[test]
    fn test_player_state_serialization() {
        let p = PlayerState::new("Bob", 6);
        let json = serde_json::to_string(&p).unwrap();
        let back: PlayerState = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
