//! AOC CLI - runs a single day's solution against an input file

mod cli;
mod error;

use clap::Parser;
use cli::Args;
use error::CliError;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let input = std::fs::read_to_string(&args.input).map_err(|source| CliError::ReadInput {
        path: args.input.clone(),
        source,
    })?;

    let answers = aoc_solutions::run(args.year, args.day, &input)?;
    for (part, answer) in answers.iter().enumerate() {
        println!("{}/day{:02} part {}: {}", args.year, args.day, part + 1, answer);
    }

    Ok(())
}
