//! Flood-fill reachability and distance-to-goal maps.

use std::collections::VecDeque;

use gridroute_core::{Cell, Grid, MAX_GRID_SIZE};

use crate::bfs::UNREACHABLE;

/// Every passable cell connected to `from` by orthogonal steps, `from`
/// included. Empty if `from` itself is not passable.
pub fn reachable_from(grid: &Grid, from: Cell) -> Vec<Cell> {
    let mut result = Vec::new();
    flood(grid, from, |c| {
        result.push(c);
        false
    });
    result
}

/// Whether `to` can be reached from `from` on `grid`.
pub fn connected(grid: &Grid, from: Cell, to: Cell) -> bool {
    flood(grid, from, |c| c == to)
}

/// Edge count of the shortest route from every cell to `goal`, indexed by
/// [`Grid::index`]. Blocked and disconnected cells hold [`UNREACHABLE`].
///
/// Moves are symmetric, so this is a breadth-first search outward from
/// `goal`. Empty for grids larger than [`MAX_GRID_SIZE`].
pub fn distances_to(grid: &Grid, goal: Cell) -> Vec<i32> {
    if grid.size() > MAX_GRID_SIZE {
        return Vec::new();
    }
    let mut dist = vec![UNREACHABLE; grid.len()];
    let Some(gi) = grid.index(goal).filter(|_| grid.passable(goal)) else {
        return dist;
    };
    dist[gi] = 0;
    let mut queue = VecDeque::from([goal]);

    while let Some(c) = queue.pop_front() {
        let Some(ci) = grid.index(c) else {
            continue;
        };
        let next = dist[ci] + 1;
        for n in grid.neighbors(c) {
            let Some(ni) = grid.index(n) else {
                continue;
            };
            if dist[ni] == UNREACHABLE {
                dist[ni] = next;
                queue.push_back(n);
            }
        }
    }
    dist
}

/// Iterative DFS from `from`, calling `visit` on each newly labelled cell.
/// Stops early and returns `true` once `visit` does.
fn flood(grid: &Grid, from: Cell, mut visit: impl FnMut(Cell) -> bool) -> bool {
    if !grid.passable(from) || grid.size() > MAX_GRID_SIZE {
        return false;
    }
    let mut seen = vec![false; grid.len()];
    let mut stack = Vec::new();
    if let Some(si) = grid.index(from) {
        seen[si] = true;
        stack.push(from);
    }
    if visit(from) {
        return true;
    }

    while let Some(c) = stack.pop() {
        for n in grid.neighbors(c) {
            let Some(ni) = grid.index(n) else {
                continue;
            };
            if seen[ni] {
                continue;
            }
            seen[ni] = true;
            if visit(n) {
                return true;
            }
            stack.push(n);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_is_one_component() {
        let g = Grid::open(5);
        assert_eq!(reachable_from(&g, Cell::new(2, 2)).len(), 25);
        assert!(connected(&g, Cell::new(0, 0), Cell::new(4, 4)));
    }

    #[test]
    fn wall_splits_grid() {
        // Column 2 is fully blocked.
        let g = Grid::new(5, (0..5).map(|r| Cell::new(r, 2)));
        let left = reachable_from(&g, Cell::new(0, 0));
        assert_eq!(left.len(), 10);
        assert!(left.iter().all(|c| c.col < 2));
        assert!(!connected(&g, Cell::new(0, 0), Cell::new(0, 4)));
        assert!(connected(&g, Cell::new(0, 3), Cell::new(4, 4)));
    }

    #[test]
    fn distances_follow_detours() {
        // Column 1 blocked except the bottom row.
        let g = Grid::new(3, [Cell::new(0, 1), Cell::new(1, 1)]);
        let d = distances_to(&g, Cell::new(0, 2));
        let at = |r, c| d[g.index(Cell::new(r, c)).unwrap()];
        assert_eq!(at(0, 2), 0);
        assert_eq!(at(2, 1), 3);
        assert_eq!(at(0, 0), 6);
        assert_eq!(at(0, 1), UNREACHABLE);
    }

    #[test]
    fn oversized_grid_is_never_allocated() {
        let g = Grid::open(i32::MAX);
        assert!(distances_to(&g, Cell::ZERO).is_empty());
        assert!(reachable_from(&g, Cell::ZERO).is_empty());
        assert!(!connected(&g, Cell::ZERO, Cell::new(0, 1)));
    }

    #[test]
    fn blocked_origin_reaches_nothing() {
        let g = Grid::new(3, [Cell::new(1, 1)]);
        assert!(reachable_from(&g, Cell::new(1, 1)).is_empty());
        assert!(!connected(&g, Cell::new(1, 1), Cell::new(1, 1)));
        assert!(connected(&g, Cell::new(0, 0), Cell::new(0, 0)));
    }
}
