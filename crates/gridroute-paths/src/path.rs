use std::collections::HashSet;

use gridroute_core::{Cell, Grid};

/// A route from start to end, both included.
///
/// Consecutive cells are orthogonally adjacent. A path is never empty; a
/// query with no route yields [`PathError::NotFound`](crate::PathError::NotFound)
/// instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path(Vec<Cell>);

impl Path {
    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        debug_assert!(!cells.is_empty());
        Self(cells)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.0
    }

    /// Number of cells, endpoints included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of steps, i.e. `len() - 1`.
    pub fn edges(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Cell> {
        self.0.first().copied()
    }

    pub fn end(&self) -> Option<Cell> {
        self.0.last().copied()
    }

    /// Whether the path is a simple, obstacle-free, in-bounds walk of
    /// orthogonal unit steps on `grid`.
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        let cells_ok = self.0.iter().all(|&c| grid.passable(c) && seen.insert(c));
        let steps_ok = self.0.windows(2).all(|w| w[0].is_adjacent(w[1]));
        !self.0.is_empty() && cells_ok && steps_ok
    }
}

impl AsRef<[Cell]> for Path {
    fn as_ref(&self) -> &[Cell] {
        &self.0
    }
}

impl From<Path> for Vec<Cell> {
    fn from(p: Path) -> Self {
        p.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Work counters reported alongside a found path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells entered (exhaustive) or dequeued (breadth-first).
    pub expansions: u64,
}
