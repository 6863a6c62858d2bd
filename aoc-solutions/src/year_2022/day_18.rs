//! Day 18: Boiling Boulders.
//!
//! Surface area of a cloud of unit cubes. Part 1 projects the cubes onto
//! each axis plane and, per projection column, counts the gaps between
//! consecutive sorted heights — a pairwise view over each sorted run. Part 2
//! flood-fills the bounding box from outside and counts only faces touching
//! water.

use std::collections::{HashSet, VecDeque};

use anyhow::{Context, anyhow};
use itertools::Itertools;
use seq_view::pairwise;

use crate::solver::{ParseError, Puzzle, SolveError};

pub struct BoilingBoulders;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    x: i32,
    y: i32,
    z: i32,
}

impl Cube {
    fn neighbors(self) -> [Cube; 6] {
        let Cube { x, y, z } = self;
        [
            Cube { x: x + 1, y, z },
            Cube { x: x - 1, y, z },
            Cube { x, y: y + 1, z },
            Cube { x, y: y - 1, z },
            Cube { x, y, z: z + 1 },
            Cube { x, y, z: z - 1 },
        ]
    }
}

impl Puzzle for BoilingBoulders {
    type Parsed = Vec<Cube>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_cube(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect()
    }

    fn part1(droplets: &Self::Parsed) -> Result<String, SolveError> {
        let area = directed_surface(droplets, |c| ((c.y, c.z), c.x))
            + directed_surface(droplets, |c| ((c.x, c.z), c.y))
            + directed_surface(droplets, |c| ((c.x, c.y), c.z));
        Ok(area.to_string())
    }

    fn part2(droplets: &Self::Parsed) -> Result<String, SolveError> {
        let lava: HashSet<Cube> = droplets.iter().copied().collect();
        let water = flood_fill(&lava)?;

        let area = lava
            .iter()
            .flat_map(|cube| cube.neighbors())
            .filter(|neighbor| !lava.contains(neighbor) && water.contains(neighbor))
            .count();

        Ok(area.to_string())
    }
}

fn parse_cube(line: &str) -> Result<Cube, anyhow::Error> {
    let (x, y, z) = line
        .split(',')
        .map(|n| n.parse::<i32>().with_context(|| format!("bad coordinate {:?}", n)))
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected 'x,y,z', got {:?}", line))?;
    Ok(Cube {
        x: x?,
        y: y?,
        z: z?,
    })
}

/// Surface area seen along one axis, doubled for the two face directions.
///
/// Each projection column holds the sorted heights of the cubes stacked
/// along the axis; every adjacent pair of heights that is not consecutive
/// contributes one concave face on top of the column's outer one.
fn directed_surface<F>(droplets: &[Cube], proj: F) -> usize
where
    F: Fn(&Cube) -> ((i32, i32), i32),
{
    let columns = droplets.iter().map(proj).into_group_map();

    let mut area = columns.len();
    for mut heights in columns.into_values() {
        heights.sort_unstable();
        area += pairwise(&heights)
            .pairs()
            .filter(|(low, high)| **high - **low != 1)
            .count();
    }

    area * 2
}

/// BFS over the droplet's bounding box (padded by one) from a corner,
/// collecting every cell reachable by water.
fn flood_fill(lava: &HashSet<Cube>) -> Result<HashSet<Cube>, SolveError> {
    let bounds = |axis: fn(&Cube) -> i32| {
        lava.iter()
            .map(axis)
            .minmax()
            .into_option()
            .ok_or_else(|| SolveError::NoSolution("no droplets scanned".into()))
    };

    let (min_x, max_x) = bounds(|c| c.x)?;
    let (min_y, max_y) = bounds(|c| c.y)?;
    let (min_z, max_z) = bounds(|c| c.z)?;

    let in_bounds = |c: &Cube| {
        (min_x - 1..=max_x + 1).contains(&c.x)
            && (min_y - 1..=max_y + 1).contains(&c.y)
            && (min_z - 1..=max_z + 1).contains(&c.z)
    };

    let corner = Cube {
        x: min_x - 1,
        y: min_y - 1,
        z: min_z - 1,
    };

    let mut water = HashSet::new();
    let mut queue = VecDeque::from([corner]);
    while let Some(current) = queue.pop_front() {
        if !water.insert(current) {
            continue;
        }
        for neighbor in current.neighbors() {
            if !lava.contains(&neighbor) && !water.contains(&neighbor) && in_bounds(&neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    Ok(water)
}
