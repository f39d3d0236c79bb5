//! Rule violations.
//!
//! Every rejected intent maps to one of these. All are recoverable and
//! local: the game state is left untouched, the caller surfaces the
//! rejection (message, error sound) and the match continues.

use thiserror::Error;

use crate::core::Position;
use crate::game::phase::Phase;

/// Why an intent was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// The position is not an intersection of this board.
    #[error("{0} is not on the board")]
    InvalidPosition(Position),

    /// The target position already holds a piece.
    #[error("{0} is already occupied")]
    OccupiedPosition(Position),

    /// Selection of a piece the current player does not own.
    #[error("the piece at {0} does not belong to the current player")]
    NotCurrentPlayersPiece(Position),

    /// The destination is not among the selected piece's legal moves.
    #[error("{0} is not a legal destination for the selected piece")]
    IllegalMoveTarget(Position),

    /// The operation does not apply in the current phase.
    #[error("operation requires the {expected} phase, but the game is {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    /// Capture aimed at a piece inside an opponent mill while the
    /// opponent still has unprotected pieces.
    #[error("the piece at {0} is part of a mill and cannot be removed")]
    MillProtectedPiece(Position),

    /// Capture or selection aimed at an empty intersection.
    #[error("no piece at {0}")]
    NoPieceAtPosition(Position),

    /// Capture aimed at one of the capturer's own pieces.
    #[error("the piece at {0} does not belong to the opponent")]
    NotOpponentsPiece(Position),

    /// A move intent arrived with no piece selected.
    #[error("no piece is selected")]
    NoPieceSelected,
}
