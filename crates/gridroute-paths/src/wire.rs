//! JSON request/response shapes spoken by path-finding front ends.
//!
//! A request carries the two endpoints and the obstacle list; the grid size
//! is fixed by the serving side. A response carries the path, empty when no
//! route exists.

use gridroute_core::{Cell, Grid};
use serde::{Deserialize, Serialize};

use crate::budget::SearchBudget;
use crate::error::{PathError, Result};
use crate::path::Path;
use crate::strategy::Strategy;

/// Body of a path request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRequest {
    pub start: Cell,
    pub end: Cell,
    #[serde(default)]
    pub obstacles: Vec<Cell>,
}

impl PathRequest {
    /// Build the grid this request describes at the given side length.
    pub fn grid(&self, size: i32) -> Grid {
        Grid::new(size, self.obstacles.iter().copied())
    }

    /// Answer the request with `strategy` on a `size` × `size` grid.
    ///
    /// An unreachable end yields an empty path; invalid input and an
    /// exhausted budget are returned as errors.
    pub fn solve(
        &self,
        strategy: Strategy,
        size: i32,
        budget: &SearchBudget,
    ) -> Result<PathResponse> {
        let grid = self.grid(size);
        PathResponse::from_outcome(strategy.find_path(&grid, self.start, self.end, budget))
    }
}

/// Body of a path response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResponse {
    pub path: Vec<Cell>,
}

impl PathResponse {
    /// Map a search outcome onto the wire: `NotFound` becomes an empty path.
    pub fn from_outcome(outcome: Result<Path>) -> Result<Self> {
        match outcome {
            Ok(path) => Ok(Self {
                path: path.into_cells(),
            }),
            Err(PathError::NotFound) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInput;

    #[test]
    fn decodes_legacy_request_shape() {
        let body = r#"{
            "start": {"row": 0, "col": 0},
            "end": {"row": 0, "col": 3},
            "obstacles": [{"row": 0, "col": 1}, {"row": 0, "col": 2}]
        }"#;
        let req: PathRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.start, Cell::new(0, 0));
        assert_eq!(req.end, Cell::new(0, 3));
        assert_eq!(req.obstacles.len(), 2);

        let resp = req
            .solve(Strategy::BreadthFirst, 20, &SearchBudget::default())
            .unwrap();
        assert_eq!(resp.path.len(), 6);
    }

    #[test]
    fn obstacles_default_to_empty() {
        let body = r#"{"start": {"row": 1, "col": 1}, "end": {"row": 1, "col": 2}}"#;
        let req: PathRequest = serde_json::from_str(body).unwrap();
        assert!(req.obstacles.is_empty());
    }

    #[test]
    fn unreachable_end_encodes_as_empty_path() {
        let req = PathRequest {
            start: Cell::new(5, 5),
            end: Cell::new(0, 0),
            obstacles: Cell::new(5, 5).neighbors_4().to_vec(),
        };
        for s in Strategy::ALL {
            let resp = req.solve(s, 20, &SearchBudget::default()).unwrap();
            assert_eq!(serde_json::to_string(&resp).unwrap(), r#"{"path":[]}"#);
        }
    }

    #[test]
    fn encodes_path_cells_in_order() {
        let req = PathRequest {
            start: Cell::new(0, 0),
            end: Cell::new(0, 2),
            obstacles: Vec::new(),
        };
        let resp = req
            .solve(Strategy::Exhaustive, 20, &SearchBudget::default())
            .unwrap();
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"path":[{"row":0,"col":0},{"row":0,"col":1},{"row":0,"col":2}]}"#
        );
    }

    #[test]
    fn invalid_input_is_not_an_empty_path() {
        let req = PathRequest {
            start: Cell::new(0, 0),
            end: Cell::new(25, 0),
            obstacles: Vec::new(),
        };
        let err = req
            .solve(Strategy::BreadthFirst, 20, &SearchBudget::default())
            .unwrap_err();
        assert!(matches!(
            err,
            PathError::InvalidInput(InvalidInput::OutOfBounds { .. })
        ));
    }

    #[test]
    fn budget_deserializes_with_defaults() {
        let b: SearchBudget = serde_json::from_str(r#"{"max_expansions": 10}"#).unwrap();
        assert_eq!(b.max_expansions, Some(10));
        assert!(b.timeout.is_none());
        let d: SearchBudget = serde_json::from_str("{}").unwrap();
        assert_eq!(d.max_expansions, SearchBudget::default().max_expansions);
    }
}
