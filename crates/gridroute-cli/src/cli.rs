//! Argument parsing and the request → response loop.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use gridroute_paths::wire::PathRequest;
use gridroute_paths::{DEFAULT_MAX_EXPANSIONS, GRID_SIZE, SearchBudget, Strategy};
use log::info;

/// Find a route across a grid with obstacles.
///
/// Reads a JSON request `{"start": {row, col}, "end": {row, col},
/// "obstacles": [...]}` and prints `{"path": [...]}`; the path is empty when
/// no route exists.
#[derive(Debug, Parser)]
#[command(name = "gridroute", version)]
pub struct Cli {
    /// Search strategy: dfs (exhaustive backtracking) or dijkstra (breadth-first).
    #[arg(default_value_t = Strategy::BreadthFirst)]
    pub strategy: Strategy,

    /// Read the request from this file instead of stdin.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Side length of the square grid.
    #[arg(long, default_value_t = GRID_SIZE)]
    pub grid_size: i32,

    /// Give up an exhaustive search after this many cell expansions.
    #[arg(long, env = "GRIDROUTE_MAX_EXPANSIONS", default_value_t = DEFAULT_MAX_EXPANSIONS)]
    pub max_expansions: u64,

    /// Give up an exhaustive search after this many milliseconds.
    #[arg(long, env = "GRIDROUTE_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    /// Pretty-print the response.
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    pub fn budget(&self) -> SearchBudget {
        let budget = SearchBudget::unlimited().with_max_expansions(self.max_expansions);
        match self.timeout_ms {
            Some(ms) => budget.with_timeout(Duration::from_millis(ms)),
            None => budget,
        }
    }
}

/// Answer one request read from `input`, writing the response to `output`.
pub fn run(cli: &Cli, input: impl Read, mut output: impl Write) -> anyhow::Result<()> {
    let request: PathRequest =
        serde_json::from_reader(input).context("failed to decode path request")?;
    info!(
        "{} request {} -> {} with {} obstacles",
        cli.strategy,
        request.start,
        request.end,
        request.obstacles.len()
    );

    let response = request
        .solve(cli.strategy, cli.grid_size, &cli.budget())
        .with_context(|| format!("{} search failed", cli.strategy))?;
    info!("{} response with {} cells", cli.strategy, response.path.len());

    if cli.pretty {
        serde_json::to_writer_pretty(&mut output, &response)?;
    } else {
        serde_json::to_writer(&mut output, &response)?;
    }
    writeln!(output)?;
    Ok(())
}
