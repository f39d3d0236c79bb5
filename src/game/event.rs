//! Outward notifications.
//!
//! The state machine pushes events to an internal outbox as side effects
//! of successful operations; the presentation layer drains them with
//! [`crate::game::Game::take_events`] and renders accordingly. There are
//! no subscribers and no callbacks: what happens after a mill is decided
//! in exactly one place, the state machine's transition logic, and the
//! outbox merely reports it.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Position};

/// Something the presentation layer should render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The turn passed to `player`.
    TurnChanged { player: PlayerId },

    /// `player` placed a piece from hand.
    PiecePlaced { player: PlayerId, position: Position },

    /// `player` slid (or flew) a piece.
    PieceMoved {
        player: PlayerId,
        from: Position,
        to: Position,
    },

    /// `player` completed a mill and must now capture.
    MillFormed { player: PlayerId, position: Position },

    /// A piece was captured.
    PieceRemoved { position: Position, owner: PlayerId },

    /// The match ended.
    GameOver { winner: PlayerId },
}
