//! Game phases.

use serde::{Deserialize, Serialize};

/// The phase of a match.
///
/// `Placing` until both players have emptied their hands, then `Moving`.
/// `RemovalPending` suspends normal turn progression after a mill until
/// the mover has captured an opponent piece. `GameOver` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Placing,
    Moving,
    RemovalPending,
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Placing => "Placing",
            Phase::Moving => "Moving",
            Phase::RemovalPending => "RemovalPending",
            Phase::GameOver => "GameOver",
        };
        f.write_str(name)
    }
}
