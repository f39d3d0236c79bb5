//! Board coordinates and step directions.
//!
//! Positions live on an integer lattice centered on the origin. A board
//! with ring count N uses coordinates in `-N..=N`; only a subset of the
//! lattice points are actual board intersections (see `board::topology`).
//!
//! Positions are value types: created once at topology generation,
//! compared by value, hashable, never mutated.

use serde::{Deserialize, Serialize};

/// A board intersection coordinate.
///
/// `Ord` is derived so collections of positions can be sorted into a
/// deterministic order for iteration and test assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// The board center `(0, 0)`.
    ///
    /// Only an actual intersection on 1-ring boards; larger boards have
    /// no center point.
    pub const CENTER: Position = Position::new(0, 0);

    /// Create a position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position by a direction scaled by `distance`.
    #[must_use]
    pub const fn step(self, dir: Direction, distance: i32) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx * distance, self.y + dy * distance)
    }

    /// Offset this position by a raw `(dx, dy)` delta.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Is this the board center?
    #[must_use]
    pub const fn is_center(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Is this a ring corner (`(±i, ±i)` for some `i > 0`)?
    #[must_use]
    pub const fn is_corner(self) -> bool {
        self.x != 0 && self.x.abs() == self.y.abs()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four orthogonal step directions used for sliding moves
/// and adjacency scans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// All four orthogonal directions, in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// The unit lattice delta for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
        }
    }
}

/// The four diagonal unit deltas. Diagonal edges exist only on 1-ring
/// boards, between the center and the four corners.
pub const DIAGONAL_DELTAS: [(i32, i32); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];
