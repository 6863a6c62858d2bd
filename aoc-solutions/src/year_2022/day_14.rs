//! Day 14: Regolith Reservoir.
//!
//! The input is a set of rock polylines; sand pours in from (500, 0) one
//! unit at a time. The polylines are rasterized segment by segment with the
//! pairwise view over each scan's points.

use std::collections::HashSet;

use anyhow::{Context, anyhow};
use seq_view::pairwise;

use crate::solver::{ParseError, Puzzle, SolveError};

pub struct RegolithReservoir;

type Coor = (i32, i32);

const SAND_SOURCE: Coor = (500, 0);

impl Puzzle for RegolithReservoir {
    type Parsed = Vec<Vec<Coor>>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_scan(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect()
    }

    fn part1(scans: &Self::Parsed) -> Result<String, SolveError> {
        let rocks = rasterize(scans);
        let max_y = rock_bottom(&rocks)?;

        let mut occupied = rocks;
        let mut resting = 0usize;
        while let Some(rest) = drop_sand(&occupied, max_y, None) {
            occupied.insert(rest);
            resting += 1;
        }

        Ok(resting.to_string())
    }

    fn part2(scans: &Self::Parsed) -> Result<String, SolveError> {
        let rocks = rasterize(scans);
        let floor = rock_bottom(&rocks)? + 2;

        let mut occupied = rocks;
        let mut resting = 0usize;
        while !occupied.contains(&SAND_SOURCE) {
            match drop_sand(&occupied, floor, Some(floor)) {
                Some(rest) => {
                    occupied.insert(rest);
                    resting += 1;
                }
                None => break,
            }
        }

        Ok(resting.to_string())
    }
}

fn parse_scan(line: &str) -> Result<Vec<Coor>, anyhow::Error> {
    line.split(" -> ")
        .map(|point| {
            let (x, y) = point
                .split_once(',')
                .ok_or_else(|| anyhow!("expected 'x,y', got {:?}", point))?;
            Ok((
                x.parse().with_context(|| format!("bad x in {:?}", point))?,
                y.parse().with_context(|| format!("bad y in {:?}", point))?,
            ))
        })
        .collect()
}

/// Expands each scan's polyline into the set of rock cells, walking the
/// segment endpoints as adjacent pairs.
fn rasterize(scans: &[Vec<Coor>]) -> HashSet<Coor> {
    let mut rocks = HashSet::new();

    for scan in scans {
        for (start, end) in pairwise(scan.as_slice()).pairs() {
            let (x_lo, x_hi) = (start.0.min(end.0), start.0.max(end.0));
            let (y_lo, y_hi) = (start.1.min(end.1), start.1.max(end.1));
            // Segments are axis-aligned, so one of the two ranges is a
            // single cell.
            for x in x_lo..=x_hi {
                for y in y_lo..=y_hi {
                    rocks.insert((x, y));
                }
            }
        }

        // A lone point is still a rock cell even though it forms no pair.
        if let [only] = scan.as_slice() {
            rocks.insert(*only);
        }
    }

    rocks
}

fn rock_bottom(rocks: &HashSet<Coor>) -> Result<i32, SolveError> {
    rocks
        .iter()
        .map(|&(_, y)| y)
        .max()
        .ok_or_else(|| SolveError::NoSolution("scan contains no rock".into()))
}

/// Drops one sand unit from the source. Returns its resting cell, or `None`
/// once it falls past `max_y` with no floor in play.
fn drop_sand(occupied: &HashSet<Coor>, max_y: i32, floor: Option<i32>) -> Option<Coor> {
    let blocked =
        |x: i32, y: i32| occupied.contains(&(x, y)) || floor.is_some_and(|level| y >= level);

    let (mut x, mut y) = SAND_SOURCE;
    loop {
        if floor.is_none() && y > max_y {
            return None;
        }

        if !blocked(x, y + 1) {
            y += 1;
        } else if !blocked(x - 1, y + 1) {
            x -= 1;
            y += 1;
        } else if !blocked(x + 1, y + 1) {
            x += 1;
            y += 1;
        } else {
            return Some((x, y));
        }
    }
}
