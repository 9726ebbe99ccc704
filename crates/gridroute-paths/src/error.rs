use std::time::Duration;

use gridroute_core::{Cell, Grid, MAX_GRID_SIZE};
use thiserror::Error;

/// Why a request was rejected before any search ran.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("grid size must be between 1 and {MAX_GRID_SIZE}, got {0}")]
    GridSize(i32),

    #[error("{which} cell {cell} is outside the {size}x{size} grid")]
    OutOfBounds {
        which: Endpoint,
        cell: Cell,
        size: i32,
    },

    #[error("{which} cell {cell} is an obstacle")]
    Blocked { which: Endpoint, cell: Cell },
}

/// Which end of the route an [`InvalidInput`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Error produced when a path query does not yield a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("no path between start and end")]
    NotFound,

    #[error("search budget exhausted after {expansions} expansions in {elapsed:?}")]
    ResourceExceeded { expansions: u64, elapsed: Duration },
}

impl PathError {
    /// Whether the end is simply unreachable, as opposed to a failed query.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Result of a path query.
pub type Result<T> = std::result::Result<T, PathError>;

/// Reject grids and endpoints no search can start from.
pub(crate) fn validate(grid: &Grid, start: Cell, end: Cell) -> Result<()> {
    let size = grid.size();
    if !(1..=MAX_GRID_SIZE).contains(&size) {
        return Err(InvalidInput::GridSize(size).into());
    }
    for (which, cell) in [(Endpoint::Start, start), (Endpoint::End, end)] {
        if !grid.in_bounds(cell) {
            return Err(InvalidInput::OutOfBounds { which, cell, size }.into());
        }
        if grid.is_obstacle(cell) {
            return Err(InvalidInput::Blocked { which, cell }.into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_bounds_end() {
        let g = Grid::open(20);
        let err = validate(&g, Cell::new(0, 0), Cell::new(0, 20)).unwrap_err();
        assert_eq!(
            err,
            PathError::InvalidInput(InvalidInput::OutOfBounds {
                which: Endpoint::End,
                cell: Cell::new(0, 20),
                size: 20,
            })
        );
        assert_eq!(
            err.to_string(),
            "invalid input: end cell (0, 20) is outside the 20x20 grid"
        );
    }

    #[test]
    fn rejects_blocked_start() {
        let g = Grid::new(20, [Cell::new(3, 3)]);
        let err = validate(&g, Cell::new(3, 3), Cell::new(0, 0)).unwrap_err();
        assert!(matches!(
            err,
            PathError::InvalidInput(InvalidInput::Blocked {
                which: Endpoint::Start,
                ..
            })
        ));
    }

    #[test]
    fn rejects_empty_grid() {
        let g = Grid::open(0);
        let err = validate(&g, Cell::ZERO, Cell::ZERO).unwrap_err();
        assert_eq!(err, PathError::InvalidInput(InvalidInput::GridSize(0)));
    }

    #[test]
    fn rejects_oversized_grid() {
        let g = Grid::open(i32::MAX);
        let err = validate(&g, Cell::ZERO, Cell::new(0, 1)).unwrap_err();
        assert_eq!(err, PathError::InvalidInput(InvalidInput::GridSize(i32::MAX)));
        let largest = Grid::open(MAX_GRID_SIZE);
        assert!(validate(&largest, Cell::ZERO, Cell::new(0, 1)).is_ok());
    }

    #[test]
    fn accepts_free_endpoints() {
        let g = Grid::new(5, [Cell::new(2, 2)]);
        assert!(validate(&g, Cell::new(0, 0), Cell::new(4, 4)).is_ok());
        assert!(!PathError::NotFound.to_string().is_empty());
        assert!(PathError::NotFound.is_not_found());
    }
}
