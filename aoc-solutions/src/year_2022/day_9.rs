//! Day 9: Rope Bridge.
//!
//! A rope of knots follows head motions on a grid; every knot trails the one
//! before it under the adjacency rule. The follower relaxation runs over
//! `pairwise_mut`, which walks each (leader, follower) pair of the rope with
//! mutable access so a knot's correction is in place before the next pair is
//! visited.

use std::collections::HashSet;

use anyhow::anyhow;
use seq_view::pairwise_mut;

use crate::solver::{ParseError, Puzzle, SolveError};

pub struct RopeBridge;

type Coor = (i32, i32);

#[derive(Debug, Clone, Copy)]
pub struct Motion {
    step: Coor,
    amount: u32,
}

impl Puzzle for RopeBridge {
    type Parsed = Vec<Motion>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_motion(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect()
    }

    fn part1(motions: &Self::Parsed) -> Result<String, SolveError> {
        Ok(tail_visited(motions, 2).to_string())
    }

    fn part2(motions: &Self::Parsed) -> Result<String, SolveError> {
        Ok(tail_visited(motions, 10).to_string())
    }
}

fn parse_motion(line: &str) -> Result<Motion, anyhow::Error> {
    let (dir, amount) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected '<dir> <amount>'"))?;

    let step = match dir {
        "R" => (1, 0),
        "L" => (-1, 0),
        "U" => (0, 1),
        "D" => (0, -1),
        other => return Err(anyhow!("unknown direction {:?}", other)),
    };

    Ok(Motion {
        step,
        amount: amount.parse()?,
    })
}

fn tail_visited(motions: &[Motion], knot_count: usize) -> usize {
    let mut rope: Vec<Coor> = vec![(0, 0); knot_count];
    let mut visited: HashSet<Coor> = HashSet::new();
    visited.insert((0, 0));

    for motion in motions {
        for _ in 0..motion.amount {
            rope[0].0 += motion.step.0;
            rope[0].1 += motion.step.1;

            pairwise_mut(&mut rope, |leader, follower| {
                let x_diff = leader.0 - follower.0;
                let y_diff = leader.1 - follower.1;

                if x_diff.abs() > 1 {
                    if y_diff != 0 {
                        follower.1 += y_diff.signum();
                    }
                    follower.0 += x_diff.signum();
                } else if y_diff.abs() > 1 {
                    if x_diff != 0 {
                        follower.0 += x_diff.signum();
                    }
                    follower.1 += y_diff.signum();
                }
            });

            visited.insert(rope[knot_count - 1]);
        }
    }

    visited.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
R 4
U 4
L 3
D 1
R 4
D 1
L 5
R 2
";

    const LARGER_SAMPLE: &str = "\
R 5
U 8
L 8
D 3
R 17
D 10
L 25
U 20
";

    #[test]
    fn part1_sample() {
        let motions = RopeBridge::parse(SAMPLE).unwrap();
        assert_eq!(RopeBridge::part1(&motions).unwrap(), "13");
    }

    #[test]
    fn part2_short_sample() {
        let motions = RopeBridge::parse(SAMPLE).unwrap();
        assert_eq!(RopeBridge::part2(&motions).unwrap(), "1");
    }

    #[test]
    fn part2_larger_sample() {
        let motions = RopeBridge::parse(LARGER_SAMPLE).unwrap();
        assert_eq!(RopeBridge::part2(&motions).unwrap(), "36");
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(RopeBridge::parse("R x").is_err());
        assert!(RopeBridge::parse("Q 3").is_err());
        assert!(RopeBridge::parse("R3").is_err());
    }
}
