//! Grid geometry: the [`Cell`] coordinate and distance helpers.
//!
//! Cells are addressed as (row, column), row growing down and column growing
//! right. Coordinates are signed so that out-of-grid input can be represented
//! and rejected instead of wrapping.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A (row, column) grid coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Unit offsets in neighbour order: up, down, left, right.
    pub const DIRECTIONS: [Cell; 4] = [
        Self::new(-1, 0),
        Self::new(1, 0),
        Self::new(0, -1),
        Self::new(0, 1),
    ];

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four orthogonal neighbours, in [`DIRECTIONS`](Self::DIRECTIONS) order.
    ///
    /// Neighbours may lie outside any particular grid; bounds are the
    /// caller's concern.
    #[inline]
    pub fn neighbors_4(self) -> [Cell; 4] {
        Self::DIRECTIONS.map(|d| self + d)
    }

    /// Whether `other` is exactly one step away along exactly one axis.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        manhattan(self, other) == 1
    }
}

// --- trait impls for Cell ---

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Distances
// ---------------------------------------------------------------------------

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
