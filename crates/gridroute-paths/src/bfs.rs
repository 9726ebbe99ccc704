use std::collections::VecDeque;

use gridroute_core::{Cell, Grid};
use log::debug;

use crate::error::{PathError, Result, validate};
use crate::path::{Path, SearchStats};

/// Sentinel distance for cells the search has not reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Find a shortest path from `start` to `end` by breadth-first search.
///
/// Every step costs 1, so this is Dijkstra's algorithm with a FIFO queue in
/// place of a priority queue. Neighbours are tried up, down, left, right; the
/// first route to reach a cell is the one kept.
pub fn breadth_first_search(grid: &Grid, start: Cell, end: Cell) -> Result<Path> {
    breadth_first_search_with_stats(grid, start, end).map(|(path, _)| path)
}

/// Like [`breadth_first_search`], also reporting how many cells were dequeued.
pub fn breadth_first_search_with_stats(
    grid: &Grid,
    start: Cell,
    end: Cell,
) -> Result<(Path, SearchStats)> {
    validate(grid, start, end)?;
    debug!(
        "breadth-first search {start} -> {end} on {0}x{0} grid with {1} obstacles",
        grid.size(),
        grid.obstacles().len()
    );

    let mut dist = vec![UNREACHABLE; grid.len()];
    // Predecessors are stored by value, indexed by the cell they lead to.
    let mut parent: Vec<Option<Cell>> = vec![None; grid.len()];
    let mut queue: VecDeque<Cell> = VecDeque::new();
    let mut stats = SearchStats::default();

    let (Some(si), Some(goal)) = (grid.index(start), grid.index(end)) else {
        return Err(PathError::NotFound);
    };
    dist[si] = 0;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        stats.expansions += 1;
        if current == end {
            break;
        }
        let Some(ci) = grid.index(current) else {
            continue;
        };
        let next = dist[ci] + 1;

        for n in grid.neighbors(current) {
            let Some(ni) = grid.index(n) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = next;
            parent[ni] = Some(current);
            queue.push_back(n);
        }
    }

    if dist[goal] == UNREACHABLE {
        debug!("breadth-first search: {end} unreachable after {} expansions", stats.expansions);
        return Err(PathError::NotFound);
    }

    // Walk predecessors back from the goal.
    let mut cells = Vec::with_capacity(dist[goal] as usize + 1);
    let mut c = end;
    cells.push(c);
    while c != start {
        let Some(prev) = grid.index(c).and_then(|i| parent[i]) else {
            return Err(PathError::NotFound);
        };
        cells.push(prev);
        c = prev;
    }
    cells.reverse();

    debug!(
        "breadth-first search found {} edges in {} expansions",
        cells.len() - 1,
        stats.expansions
    );
    Ok((Path::from_cells(cells), stats))
}
