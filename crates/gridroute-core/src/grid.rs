//! The square search grid: a side length plus a set of blocked cells.
//!
//! The grid owns no per-cell storage. A cell is traversable when it is in
//! bounds and not in the obstacle set.

use std::collections::HashSet;

use crate::geom::Cell;

/// Side length used when the caller does not choose one.
pub const GRID_SIZE: i32 = 20;

/// Largest side length the searches accept. Per-call buffers hold one entry
/// per cell, so this caps them at about a million entries.
pub const MAX_GRID_SIZE: i32 = 1024;

/// A `size` × `size` grid with point obstacles.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: i32,
    obstacles: HashSet<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::open(GRID_SIZE)
    }
}

impl Grid {
    /// Create a grid of the given side length with the given obstacles.
    ///
    /// Duplicate and out-of-bounds obstacles are accepted; the latter can
    /// never be stepped on anyway.
    pub fn new(size: i32, obstacles: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            size,
            obstacles: obstacles.into_iter().collect(),
        }
    }

    /// Create an obstacle-free grid.
    pub fn open(size: i32) -> Self {
        Self {
            size,
            obstacles: HashSet::new(),
        }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of cells (`size²`, zero for a degenerate grid).
    #[inline]
    pub fn len(&self) -> usize {
        let s = self.size.max(0) as usize;
        s * s
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The obstacle set.
    pub fn obstacles(&self) -> &HashSet<Cell> {
        &self.obstacles
    }

    /// Mark `c` as blocked. Returns `false` if it already was.
    pub fn block(&mut self, c: Cell) -> bool {
        self.obstacles.insert(c)
    }

    /// Whether `c` lies inside `[0, size)` on both axes.
    #[inline]
    pub fn in_bounds(&self, c: Cell) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.size && c.col < self.size
    }

    /// Whether `c` is in the obstacle set.
    #[inline]
    pub fn is_obstacle(&self, c: Cell) -> bool {
        self.obstacles.contains(&c)
    }

    /// Whether a route may step on `c`.
    #[inline]
    pub fn passable(&self, c: Cell) -> bool {
        self.in_bounds(c) && !self.is_obstacle(c)
    }

    /// Passable orthogonal neighbours of `c`, in up, down, left, right order.
    pub fn neighbors(&self, c: Cell) -> impl Iterator<Item = Cell> + '_ {
        c.neighbors_4().into_iter().filter(|&n| self.passable(n))
    }

    // -----------------------------------------------------------------------
    // Flat indexing for per-call search buffers
    // -----------------------------------------------------------------------

    /// Convert a cell to a row-major flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Cell) -> Option<usize> {
        if !self.in_bounds(c) {
            return None;
        }
        Some(c.row as usize * self.size as usize + c.col as usize)
    }

    /// Convert a flat index back to a cell.
    #[inline]
    pub fn cell(&self, idx: usize) -> Cell {
        let s = self.size.max(1) as usize;
        Cell::new((idx / s) as i32, (idx % s) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_half_open() {
        let g = Grid::open(20);
        assert!(g.in_bounds(Cell::new(0, 0)));
        assert!(g.in_bounds(Cell::new(19, 19)));
        assert!(!g.in_bounds(Cell::new(20, 0)));
        assert!(!g.in_bounds(Cell::new(0, -1)));
    }

    #[test]
    fn obstacles_block_passage() {
        let g = Grid::new(5, [Cell::new(1, 1), Cell::new(1, 1), Cell::new(9, 9)]);
        assert_eq!(g.obstacles().len(), 2);
        assert!(g.is_obstacle(Cell::new(1, 1)));
        assert!(!g.passable(Cell::new(1, 1)));
        assert!(g.passable(Cell::new(1, 2)));
        // out-of-bounds obstacle is recorded but irrelevant
        assert!(!g.passable(Cell::new(9, 9)));
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let mut g = Grid::open(3);
        g.block(Cell::new(0, 1));
        let ns: Vec<Cell> = g.neighbors(Cell::new(0, 0)).collect();
        assert_eq!(ns, vec![Cell::new(1, 0)]);
        let ns: Vec<Cell> = g.neighbors(Cell::new(1, 1)).collect();
        assert_eq!(ns, vec![Cell::new(2, 1), Cell::new(1, 0), Cell::new(1, 2)]);
    }

    #[test]
    fn index_round_trips_every_cell() {
        let g = Grid::open(4);
        assert_eq!(g.len(), 16);
        for i in 0..g.len() {
            assert_eq!(g.index(g.cell(i)), Some(i));
        }
        assert_eq!(g.index(Cell::new(4, 0)), None);
    }

    #[test]
    fn degenerate_grid_is_empty() {
        let g = Grid::open(0);
        assert!(g.is_empty());
        assert!(!g.in_bounds(Cell::ZERO));
        assert_eq!(Grid::open(-3).len(), 0);
    }

    #[test]
    fn default_uses_fixed_size() {
        assert_eq!(Grid::default().size(), GRID_SIZE);
    }
}
