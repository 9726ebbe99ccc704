//! Exhaustive depth-first search with backtracking and bound pruning.
//!
//! The search enumerates simple paths from the start, trying neighbours
//! nearest the goal (by Manhattan distance) first, and keeps the first path
//! of each strictly shorter length it finds. Any branch that cannot beat the
//! best length known so far is cut, using the exact obstacle-aware distance
//! to the goal as the lower bound on what remains. The result is a shortest
//! path by edge count; among equally short paths, the one reached first in
//! this order wins.
//!
//! The descent uses an explicit frame stack, so depth is bounded by the heap
//! rather than the call stack.

use gridroute_core::{Cell, Grid, manhattan};
use log::{debug, trace, warn};

use crate::bfs::UNREACHABLE;
use crate::budget::SearchBudget;
use crate::error::{PathError, Result, validate};
use crate::path::{Path, SearchStats};
use crate::reach::distances_to;

/// One level of the descent: a cell on the current path and the neighbours
/// still to try from it.
struct Frame {
    cell: Cell,
    order: [Cell; 4],
    next: usize,
}

impl Frame {
    fn new(cell: Cell, goal: Cell) -> Self {
        // Stable sort of a frame-local copy: ties keep up, down, left, right.
        let mut order = cell.neighbors_4();
        order.sort_by_key(|&n| manhattan(n, goal));
        Self {
            cell,
            order,
            next: 0,
        }
    }

    /// Next neighbour worth descending into, if any remain.
    fn advance(&mut self, grid: &Grid, on_path: &[bool]) -> Option<Cell> {
        while let Some(&n) = self.order.get(self.next) {
            self.next += 1;
            let Some(ni) = grid.index(n) else {
                continue;
            };
            if !on_path[ni] && !grid.is_obstacle(n) {
                return Some(n);
            }
        }
        None
    }
}

/// Find a shortest path from `start` to `end` by exhaustive backtracking.
///
/// Fails with [`PathError::InvalidInput`] for out-of-bounds or blocked
/// endpoints, [`PathError::NotFound`] when `end` is unreachable, and
/// [`PathError::ResourceExceeded`] when `budget` runs out first.
pub fn exhaustive_search(
    grid: &Grid,
    start: Cell,
    end: Cell,
    budget: &SearchBudget,
) -> Result<Path> {
    exhaustive_search_with_stats(grid, start, end, budget).map(|(path, _)| path)
}

/// Like [`exhaustive_search`], also reporting how many cells were entered.
pub fn exhaustive_search_with_stats(
    grid: &Grid,
    start: Cell,
    end: Cell,
    budget: &SearchBudget,
) -> Result<(Path, SearchStats)> {
    validate(grid, start, end)?;
    debug!(
        "exhaustive search {start} -> {end} on {0}x{0} grid with {1} obstacles",
        grid.size(),
        grid.obstacles().len()
    );

    // Exact obstacle-aware distance to the goal. Cells already on the path
    // can only lengthen a route, so this never overestimates what is left.
    let to_goal = distances_to(grid, end);
    let Some(shortest) = grid
        .index(start)
        .map(|si| to_goal[si])
        .filter(|&d| d != UNREACHABLE)
    else {
        debug!("exhaustive search: {end} unreachable from {start}");
        return Err(PathError::NotFound);
    };

    let mut meter = budget.meter();
    let mut on_path = vec![false; grid.len()];
    let mut frames: Vec<Frame> = Vec::new();
    let mut best: Option<Vec<Cell>> = None;
    // A branch survives only if it can still finish in fewer than `bound`
    // edges. Seeding one past the true distance keeps exactly the branches
    // that could end in a shortest path, so the first such path in
    // descent order is still the one kept.
    let mut bound = shortest as usize + 1;
    let mut pending = Some(start);

    loop {
        if let Some(cell) = pending.take() {
            if let Err(e) = meter.tick() {
                warn!("exhaustive search {start} -> {end} gave up: {e}");
                return Err(e);
            }
            let depth = frames.len();

            if cell == end {
                if depth < bound {
                    let mut path: Vec<Cell> = frames.iter().map(|f| f.cell).collect();
                    path.push(cell);
                    trace!(
                        "new best path of {depth} edges after {} expansions",
                        meter.expansions()
                    );
                    bound = depth;
                    best = Some(path);
                }
                continue;
            }

            let remaining = grid.index(cell).map_or(UNREACHABLE, |ci| to_goal[ci]);
            if remaining == UNREACHABLE || depth + remaining as usize >= bound {
                continue;
            }

            if let Some(ci) = grid.index(cell) {
                on_path[ci] = true;
            }
            frames.push(Frame::new(cell, end));
            continue;
        }

        let Some(top) = frames.last_mut() else {
            break;
        };
        match top.advance(grid, &on_path) {
            Some(n) => pending = Some(n),
            None => {
                let cell = top.cell;
                if let Some(ci) = grid.index(cell) {
                    on_path[ci] = false;
                }
                frames.pop();
            }
        }
    }

    let stats = SearchStats {
        expansions: meter.expansions(),
    };
    match best {
        Some(cells) => {
            debug!(
                "exhaustive search found {} edges in {} expansions ({:?})",
                cells.len() - 1,
                stats.expansions,
                meter.elapsed()
            );
            Ok((Path::from_cells(cells), stats))
        }
        None => Err(PathError::NotFound),
    }
}
