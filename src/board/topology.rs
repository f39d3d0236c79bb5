//! Parametric board topology.
//!
//! A board with ring count N consists of N concentric square rings. Each
//! ring `i` contributes its four corners `(±i, ±i)` and four edge
//! midpoints `(±i, 0)`, `(0, ±i)`. The midpoints of consecutive rings are
//! connected by spokes along the axes. The single-ring board additionally
//! has a center point `(0, 0)` and diagonal segments from the center to
//! the four corners.
//!
//! ## Adjacency
//!
//! Adjacency is derived from the drawn segments, not stored as an
//! independent data set: two positions are neighbors iff they are
//! consecutive intersections along a ring edge, a spoke, or (N = 1 only)
//! a diagonal. The derivation scans outward from each position one
//! lattice unit at a time, skipping lattice points that are not
//! intersections, and never connects across the center gap on multi-ring
//! boards (the physical board has no line through the middle when N > 1).
//!
//! The same scan feeds sliding-move legality, so adjacency and movement
//! can never disagree.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Direction, Position, DIAGONAL_DELTAS};

/// Ring count used when a non-positive value is supplied.
pub const DEFAULT_RING_COUNT: i32 = 3;

/// Neighbor list for one position. Four entries inline covers every
/// position except the 1-ring center (which has eight neighbors).
pub type Neighbors = SmallVec<[Position; 4]>;

/// Does a single scan step from `from` to `to` cross the center gap?
///
/// True when both endpoints sit on the same axis and lie on strictly
/// opposite sides of the origin. On multi-ring boards no segment is drawn
/// through the middle, so such a step is never connected. On the 1-ring
/// board the scan stops at the center intersection before this predicate
/// could fire, so it can be applied unconditionally.
#[must_use]
pub fn crosses_center(from: Position, to: Position) -> bool {
    (from.x == 0 && to.x == 0 && from.y * to.y < 0)
        || (from.y == 0 && to.y == 0 && from.x * to.x < 0)
}

/// The set of intersections for a given ring count, with derived
/// adjacency. Immutable after generation.
#[derive(Clone, Debug)]
pub struct BoardTopology {
    ring_count: i32,
    positions: Vec<Position>,
    adjacency: FxHashMap<Position, Neighbors>,
}

impl BoardTopology {
    /// Generate the topology for `ring_count` rings.
    ///
    /// A `ring_count <= 0` is coerced to [`DEFAULT_RING_COUNT`]; callers
    /// relying on that coercion should document it as intentional.
    #[must_use]
    pub fn generate(ring_count: i32) -> Self {
        let ring_count = if ring_count <= 0 {
            DEFAULT_RING_COUNT
        } else {
            ring_count
        };

        let positions = Self::enumerate_positions(ring_count);
        let adjacency = Self::derive_adjacency(ring_count, &positions);

        Self {
            ring_count,
            positions,
            adjacency,
        }
    }

    fn enumerate_positions(ring_count: i32) -> Vec<Position> {
        let mut positions = Vec::new();

        for i in 1..=ring_count {
            positions.extend([
                Position::new(-i, i),
                Position::new(i, i),
                Position::new(i, -i),
                Position::new(-i, -i),
            ]);
            positions.extend([
                Position::new(-i, 0),
                Position::new(i, 0),
                Position::new(0, i),
                Position::new(0, -i),
            ]);
        }

        if ring_count == 1 {
            positions.push(Position::CENTER);
        }

        positions
    }

    fn derive_adjacency(
        ring_count: i32,
        positions: &[Position],
    ) -> FxHashMap<Position, Neighbors> {
        let set: rustc_hash::FxHashSet<Position> = positions.iter().copied().collect();
        let mut adjacency = FxHashMap::default();

        for &pos in positions {
            let mut neighbors = Neighbors::new();

            // Orthogonal segments: the nearest intersection in each
            // direction, unless the scan would cross the center gap.
            for dir in Direction::ALL {
                for distance in 1..=ring_count {
                    let candidate = pos.step(dir, distance);
                    if crosses_center(pos, candidate) {
                        break;
                    }
                    if set.contains(&candidate) {
                        neighbors.push(candidate);
                        break;
                    }
                }
            }

            // Diagonal segments exist only on the 1-ring board, between
            // the center and the four corners.
            if ring_count == 1 && (pos.is_center() || pos.is_corner()) {
                for (dx, dy) in DIAGONAL_DELTAS {
                    let candidate = pos.offset(dx, dy);
                    if set.contains(&candidate) {
                        neighbors.push(candidate);
                    }
                }
            }

            adjacency.insert(pos, neighbors);
        }

        adjacency
    }

    /// The ring count this topology was generated for.
    #[must_use]
    pub fn ring_count(&self) -> i32 {
        self.ring_count
    }

    /// All intersections, in generation order (deterministic).
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of intersections: `8N` for `N > 1`, nine for `N = 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// A generated topology always has at least one ring.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Is `pos` an intersection of this board?
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.adjacency.contains_key(&pos)
    }

    /// Directly connected intersections of `pos`. Empty for positions
    /// outside the topology.
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> &[Position] {
        self.adjacency.get(&pos).map_or(&[], |n| n.as_slice())
    }
}
