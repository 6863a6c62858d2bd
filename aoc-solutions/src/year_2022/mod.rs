//! Solutions for Advent of Code 2022.

pub mod day_9;
pub mod day_14;
pub mod day_18;
