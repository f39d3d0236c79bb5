//! Rule predicates over board state.
//!
//! - `MillDetector`: does a position complete (or belong to) a mill?
//! - `MoveRules`: where may a piece go, and can a player move at all?
//!
//! Both borrow the immutable board data and read ownership per query;
//! the state machine in `game` owns the orchestration.

pub mod detect;
pub mod movement;

pub use detect::MillDetector;
pub use movement::{may_fly, MoveRules};
