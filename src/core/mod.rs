//! Core types: positions, players, settings.
//!
//! The fundamental building blocks shared by the board, rules, and game
//! modules. Everything here is a plain value type.

pub mod player;
pub mod position;
pub mod settings;

pub use player::{PlayerId, PlayerPair, PlayerState};
pub use position::{Direction, Position, DIAGONAL_DELTAS};
pub use settings::{GameSettings, SettingsError};
