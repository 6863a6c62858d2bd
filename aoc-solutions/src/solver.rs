//! Core puzzle trait and error types.

use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The simulation or search ended without producing an answer
    #[error("No solution: {0}")]
    NoSolution(String),
}

/// Error type for running a solver end to end
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}

/// A single day's puzzle: one parse, two parts.
///
/// # Example
///
/// ```
/// use aoc_solutions::{ParseError, Puzzle, SolveError};
///
/// struct Sum;
///
/// impl Puzzle for Sum {
///     type Parsed = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
///
///     fn part1(parsed: &Self::Parsed) -> Result<String, SolveError> {
///         Ok(parsed.iter().sum::<i64>().to_string())
///     }
///
///     fn part2(parsed: &Self::Parsed) -> Result<String, SolveError> {
///         Ok(parsed.iter().product::<i64>().to_string())
///     }
/// }
/// ```
pub trait Puzzle {
    /// Parsed form of the raw input, shared by both parts.
    type Parsed;

    /// Parse the raw input.
    fn parse(input: &str) -> Result<Self::Parsed, ParseError>;

    /// Answer for part 1.
    fn part1(parsed: &Self::Parsed) -> Result<String, SolveError>;

    /// Answer for part 2.
    fn part2(parsed: &Self::Parsed) -> Result<String, SolveError>;
}

/// Parses once and solves both parts in order.
pub fn solve_both<P: Puzzle>(input: &str) -> Result<Vec<String>, SolverError> {
    let parsed = P::parse(input)?;
    Ok(vec![P::part1(&parsed)?, P::part2(&parsed)?])
}
