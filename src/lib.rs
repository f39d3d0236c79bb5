//! # ringmill
//!
//! Rule engine for two-player mill (morris) games on parametric N-ring
//! boards.
//!
//! ## Design Principles
//!
//! 1. **Parametric geometry**: The board is generated from a ring count,
//!    not hardcoded. Every rule — adjacency, mills, flying — is derived
//!    from the same generated topology, so they can never disagree.
//!
//! 2. **Engine, not app**: Rendering, input, audio, and menus are
//!    callers. The engine accepts intents (place, select, move, remove),
//!    answers with typed results or rule violations, and reports what
//!    happened through an event outbox.
//!
//! 3. **Explicit dependencies**: The state machine takes its topology
//!    and mill catalog at construction. No global managers.
//!
//! ## Architecture
//!
//! - **Precomputed catalogs**: Mill lines are enumerated once per board
//!   and reverse-indexed by position; detection is a lookup, not a scan.
//!
//! - **Persistent ownership map**: Snapshots clone in O(1) via `im`, so
//!   capturing a match image is cheap.
//!
//! - **Validate-then-mutate**: A rejected intent returns a
//!   `RuleViolation` and leaves the match untouched.
//!
//! ## Modules
//!
//! - `core`: positions, players, settings
//! - `board`: topology generation, mill catalog, ownership store
//! - `rules`: mill detection and move legality
//! - `game`: phases, events, errors, the state machine

pub mod board;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameSettings, PlayerId, PlayerPair, PlayerState, Position, SettingsError,
};

pub use crate::board::{
    crosses_center, BoardTopology, LineId, MillCatalog, MillLine, OwnershipStore,
    DEFAULT_RING_COUNT,
};

pub use crate::rules::{may_fly, MillDetector, MoveRules};

pub use crate::game::{
    Game, GameBuilder, GameEvent, GameSnapshot, MoveOutcome, Phase, PlaceOutcome,
    RemovalOutcome, RuleViolation,
};
