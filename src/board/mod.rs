//! Board geometry and occupancy.
//!
//! ## Key Types
//!
//! - `BoardTopology`: intersections + derived adjacency for a ring count
//! - `MillCatalog` / `MillLine`: every three-in-a-row triple, indexed
//! - `OwnershipStore`: which player stands on which intersection

pub mod mills;
pub mod ownership;
pub mod topology;

pub use mills::{LineId, MillCatalog, MillLine};
pub use ownership::OwnershipStore;
pub use topology::{crosses_center, BoardTopology, Neighbors, DEFAULT_RING_COUNT};
