//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading the input file failed
    #[error("Failed to read input {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solutions::SolverError),
}
