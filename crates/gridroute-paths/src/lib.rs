//! Shortest-path search on bounded grids with point obstacles.
//!
//! Two interchangeable strategies answer the same query, "route from
//! `start` to `end` avoiding obstacles, moving orthogonally":
//!
//! - **Exhaustive** backtracking with bound pruning ([`exhaustive_search`]),
//!   limited by a [`SearchBudget`]
//! - **Breadth-first** search, i.e. unit-weight Dijkstra ([`breadth_first_search`])
//!
//! Both return the shortest route by edge count as a [`Path`], or a
//! [`PathError`] telling invalid input, an unreachable end and an exhausted
//! budget apart. Every call works on its own buffers, so searches may run
//! concurrently without coordination.
//!
//! With the `serde` feature, the [`wire`] module provides the JSON request
//! and response shapes used by front ends.

mod bfs;
mod budget;
mod error;
mod exhaustive;
mod path;
mod reach;
mod strategy;
#[cfg(feature = "serde")]
pub mod wire;

pub use bfs::{UNREACHABLE, breadth_first_search, breadth_first_search_with_stats};
pub use budget::{CancelToken, DEFAULT_MAX_EXPANSIONS, SearchBudget};
pub use error::{Endpoint, InvalidInput, PathError, Result};
pub use exhaustive::{exhaustive_search, exhaustive_search_with_stats};
pub use gridroute_core::{Cell, GRID_SIZE, Grid, MAX_GRID_SIZE, manhattan};
pub use path::{Path, SearchStats};
pub use reach::{connected, distances_to, reachable_from};
pub use strategy::{ParseStrategyError, Strategy};

/// Shortest path by exhaustive search on a `grid_size` × `grid_size` grid,
/// under the default [`SearchBudget`].
pub fn find_shortest_path_exhaustive(
    start: Cell,
    end: Cell,
    obstacles: &[Cell],
    grid_size: i32,
) -> Result<Path> {
    let grid = Grid::new(grid_size, obstacles.iter().copied());
    exhaustive_search(&grid, start, end, &SearchBudget::default())
}

/// Shortest path by breadth-first search on a `grid_size` × `grid_size` grid.
pub fn find_shortest_path_bfs(
    start: Cell,
    end: Cell,
    obstacles: &[Cell],
    grid_size: i32,
) -> Result<Path> {
    let grid = Grid::new(grid_size, obstacles.iter().copied());
    breadth_first_search(&grid, start, end)
}
