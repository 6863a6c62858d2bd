//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solution runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run an Advent of Code solution", version)]
pub struct Args {
    /// Year of the puzzle
    #[arg(short, long)]
    pub year: u16,

    /// Day of the puzzle
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Path to the puzzle input file
    #[arg(short, long)]
    pub input: PathBuf,
}
