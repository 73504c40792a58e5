use advent_framework::parsing::parse_grid;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::DMatrix;
use thiserror::Error;

use crate::grid::{Coord, find_all};

#[solution_runner(
    name = "2024 Day 20: Race Condition",
    parsed = Racetrack,
    part_one = Day20,
    part_two = Day20
)]
impl super::AdventOfCode2024<20> {}

/*
Input is a racetrack map: `#` walls, `.` track, the start `S` and the end `E`. There is a single
path from start to end, one step per picosecond.

Once per race a program may cheat, passing through walls for a limited time. A cheat starts on
track, ends on track, and is identified by its start and end positions only.
*/

const MINIMUM_SAVING: usize = 100;

/// Track positions in race order, from start to end.
struct Racetrack(Vec<Coord>);

#[derive(Error, Debug)]
enum RacetrackError {
    #[error("unexpected map character '{0}'")]
    UnexpectedCell(char),

    #[error("expected exactly one '{0}'")]
    MarkerCount(char),

    #[error("the track does not lead from start to end")]
    BrokenTrack,
}

impl ParseData for Racetrack {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let map = parse_grid(input, |c| match c {
            '#' | '.' | 'S' | 'E' => Ok(c),
            other => Err(RacetrackError::UnexpectedCell(other).into()),
        })?;
        let single = |marker: char| -> Result<Coord, RacetrackError> {
            let found: Vec<_> = find_all(&map, &marker).collect();
            match found.as_slice() {
                [coord] => Ok(*coord),
                _ => Err(RacetrackError::MarkerCount(marker)),
            }
        };
        let (start, end) = (single('S')?, single('E')?);

        let shape = map.shape();
        let mut visited: DMatrix<bool> = map.map(|c| c == '#');
        visited[start.index()] = true;
        let mut track = vec![start];
        let mut position = start;
        while position != end {
            position = position
                .neighbors_within(shape)
                .find(|neighbor| !visited[neighbor.index()])
                .ok_or(RacetrackError::BrokenTrack)?;
            visited[position.index()] = true;
            track.push(position);
        }
        Ok(Self(track))
    }
}

impl Racetrack {
    /// Count cheats of at most `max_duration` picoseconds saving at least `min_saving`.
    fn count_cheats(&self, max_duration: usize, min_saving: usize) -> usize {
        let track = &self.0;
        let mut count = 0;
        for (from_time, &from) in track.iter().enumerate() {
            // shorter jumps can't save enough
            for (offset, &to) in track[from_time..].iter().enumerate().skip(min_saving) {
                let distance = from.manhattan(to);
                if distance <= max_duration && offset - distance >= min_saving {
                    count += 1;
                }
            }
        }
        count
    }
}

/*
For part 1, cheats last at most 2 picoseconds. Count the cheats that save at least 100
picoseconds.
*/

struct Day20;

impl Solution<PartOne> for Day20 {
    type Input = Racetrack;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.count_cheats(2, MINIMUM_SAVING))
    }
}

/*
For part 2, cheats last at most 20 picoseconds.
*/

impl Solution<PartTwo> for Day20 {
    type Input = Racetrack;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.count_cheats(20, MINIMUM_SAVING))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Racetrack::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.0.len(), 85);
        assert_eq!(parsed.count_cheats(2, 20), 5);
        assert_eq!(parsed.count_cheats(2, 64), 1);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Racetrack::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.count_cheats(20, 50), 285);
        assert_eq!(parsed.count_cheats(20, 76), 3);
        assert_eq!(parsed.count_cheats(20, 74), 7);
        Ok(())
    }
}
