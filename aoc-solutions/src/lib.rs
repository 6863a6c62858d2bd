//! Advent of Code puzzle solutions
//!
//! Each solution implements the [`Puzzle`] trait: parse the raw input once,
//! then answer both parts from the parsed form. The solutions lean on the
//! `seq-view` crate wherever they walk adjacent elements of a sequence —
//! rope knots, rock-scan polylines, sorted projection heights.

pub mod solver;
pub mod year_2022;

pub use solver::{ParseError, Puzzle, SolveError, SolverError};

use solver::solve_both;

/// Runs the solver registered for `year`/`day` on `input`, returning one
/// answer string per part.
pub fn run(year: u16, day: u8, input: &str) -> Result<Vec<String>, SolverError> {
    match (year, day) {
        (2022, 9) => solve_both::<year_2022::day_9::RopeBridge>(input),
        (2022, 14) => solve_both::<year_2022::day_14::RegolithReservoir>(input),
        (2022, 18) => solve_both::<year_2022::day_18::BoilingBoulders>(input),
        _ => Err(SolverError::NotFound(year, day)),
    }
}
