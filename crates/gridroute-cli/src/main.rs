//! gridroute: answer one path request from a file or stdin.

mod cli;

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    // stdout carries the response, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout().lock();
    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open request file {}", path.display()))?;
            run(&cli, BufReader::new(file), stdout)
        }
        None => run(&cli, io::stdin().lock(), stdout),
    }
}
