//! Mill line catalog.
//!
//! A mill is three same-owner pieces on one of a finite set of collinear
//! triples. The catalog enumerates every such triple for a board once, at
//! construction, and builds a reverse index so "which lines pass through
//! position P" is an O(1) lookup. The ring count is bounded and small, so
//! finite enumeration beats runtime ray-casting: it is deterministic,
//! cheap, and directly testable.
//!
//! ## Line families
//!
//! Per ring `i`:
//! - the axis triples through the middle, `{(i,0),(0,0),(-i,0)}` and
//!   `{(0,i),(0,0),(0,-i)}`;
//! - the ring-edge triples `{(i,i),(i,0),(i,-i)}` (right edge) and its
//!   three rotations.
//!
//! For the 1-ring board only, the two diagonals through the center.
//!
//! Every candidate is kept only if all three positions exist in the
//! generating topology. On multi-ring boards there is no center point, so
//! the axis triples through the middle drop out structurally; no runtime
//! membership check is needed afterwards.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::topology::BoardTopology;
use crate::core::Position;

/// Identifier of one catalog line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub u16);

impl LineId {
    /// Create a line ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line({})", self.0)
    }
}

/// One collinear triple. All three positions are distinct and belong to
/// the generating topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MillLine {
    positions: [Position; 3],
}

impl MillLine {
    #[must_use]
    fn new(a: Position, b: Position, c: Position) -> Self {
        Self {
            positions: [a, b, c],
        }
    }

    /// The three member positions.
    #[must_use]
    pub fn positions(&self) -> &[Position; 3] {
        &self.positions
    }

    /// Does this line pass through `pos`?
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Per-position list of line ids. No intersection is on more than four
/// lines (the 1-ring center: both axes plus both diagonals).
type LineIds = SmallVec<[LineId; 4]>;

/// All mill lines for one board, with a reverse index by position.
/// Immutable after construction.
#[derive(Clone, Debug)]
pub struct MillCatalog {
    lines: Vec<MillLine>,
    by_position: FxHashMap<Position, LineIds>,
}

impl MillCatalog {
    /// Enumerate the catalog for a topology.
    ///
    /// Building from the topology (rather than a bare ring count)
    /// guarantees the catalog and board agree on which positions exist.
    #[must_use]
    pub fn build(topology: &BoardTopology) -> Self {
        let n = topology.ring_count();
        let mut candidates = Vec::new();

        for i in 1..=n {
            // Axis triples through the middle. Only complete on the
            // 1-ring board, where the center point exists.
            candidates.push(MillLine::new(
                Position::new(i, 0),
                Position::CENTER,
                Position::new(-i, 0),
            ));
            candidates.push(MillLine::new(
                Position::new(0, i),
                Position::CENTER,
                Position::new(0, -i),
            ));

            // Ring-edge triples: corner, midpoint, corner on each side.
            candidates.push(MillLine::new(
                Position::new(i, i),
                Position::new(i, 0),
                Position::new(i, -i),
            ));
            candidates.push(MillLine::new(
                Position::new(-i, i),
                Position::new(-i, 0),
                Position::new(-i, -i),
            ));
            candidates.push(MillLine::new(
                Position::new(i, i),
                Position::new(0, i),
                Position::new(-i, i),
            ));
            candidates.push(MillLine::new(
                Position::new(i, -i),
                Position::new(0, -i),
                Position::new(-i, -i),
            ));
        }

        if n == 1 {
            candidates.push(MillLine::new(
                Position::new(1, 1),
                Position::CENTER,
                Position::new(-1, -1),
            ));
            candidates.push(MillLine::new(
                Position::new(1, -1),
                Position::CENTER,
                Position::new(-1, 1),
            ));
        }

        let lines: Vec<MillLine> = candidates
            .into_iter()
            .filter(|line| line.positions().iter().all(|&p| topology.contains(p)))
            .collect();

        let mut by_position: FxHashMap<Position, LineIds> = FxHashMap::default();
        for (idx, line) in lines.iter().enumerate() {
            let id = LineId::new(idx as u16);
            for &pos in line.positions() {
                by_position.entry(pos).or_default().push(id);
            }
        }

        Self { lines, by_position }
    }

    /// All lines, in enumeration order.
    #[must_use]
    pub fn lines(&self) -> &[MillLine] {
        &self.lines
    }

    /// Number of lines in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// A catalog always has lines (every board has ring edges).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up a line by ID.
    #[must_use]
    pub fn line(&self, id: LineId) -> &MillLine {
        &self.lines[id.0 as usize]
    }

    /// The lines passing through `pos`, in enumeration order. Empty for
    /// positions on no line (or outside the topology).
    pub fn lines_through(&self, pos: Position) -> impl Iterator<Item = &MillLine> {
        self.by_position
            .get(&pos)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|&id| self.line(id))
    }
}
