use std::fmt;
use std::str::FromStr;

use gridroute_core::{Cell, Grid};

use crate::bfs::breadth_first_search_with_stats;
use crate::budget::SearchBudget;
use crate::error::Result;
use crate::exhaustive::exhaustive_search_with_stats;
use crate::path::{Path, SearchStats};

/// Which search engine answers a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Depth-first backtracking with bound pruning ("dfs").
    #[cfg_attr(feature = "serde", serde(rename = "dfs", alias = "exhaustive"))]
    Exhaustive,
    /// Breadth-first search, i.e. unit-weight Dijkstra ("dijkstra").
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "dijkstra", alias = "bfs"))]
    BreadthFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Exhaustive, Strategy::BreadthFirst];

    /// Short name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Exhaustive => "dfs",
            Self::BreadthFirst => "dijkstra",
        }
    }

    /// HTTP route the strategy was historically served on.
    pub fn route(self) -> &'static str {
        match self {
            Self::Exhaustive => "/find-path-dfs",
            Self::BreadthFirst => "/find-path-dijkstra",
        }
    }

    /// Run this strategy. `budget` only constrains the exhaustive search;
    /// breadth-first search is bounded by the grid itself.
    pub fn find_path(
        self,
        grid: &Grid,
        start: Cell,
        end: Cell,
        budget: &SearchBudget,
    ) -> Result<Path> {
        self.find_path_with_stats(grid, start, end, budget)
            .map(|(path, _)| path)
    }

    pub fn find_path_with_stats(
        self,
        grid: &Grid,
        start: Cell,
        end: Cell,
        budget: &SearchBudget,
    ) -> Result<(Path, SearchStats)> {
        match self {
            Self::Exhaustive => exhaustive_search_with_stats(grid, start, end, budget),
            Self::BreadthFirst => breadth_first_search_with_stats(grid, start, end),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy {0:?} (expected dfs, exhaustive, dijkstra or bfs)")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "exhaustive" => Ok(Self::Exhaustive),
            "dijkstra" | "bfs" => Ok(Self::BreadthFirst),
            _ => Err(ParseStrategyError(s.to_owned())),
        }
    }
}
