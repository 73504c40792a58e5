use advent_framework::parsing::parse_grid;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::DMatrix;
use thiserror::Error;

use crate::grid::{Coord, Direction, find_all};

#[solution_runner(
    name = "2024 Day 6: Guard Gallivant",
    parsed = Lab,
    part_one = Day06,
    part_two = Day06
)]
impl super::AdventOfCode2024<6> {}

/*
Input is a map of the lab. `#` is an obstruction, `.` open floor, and `^` the guard, who starts
facing north.

The guard walks forward until something is directly in front, then turns right 90 degrees. The
patrol ends when the guard walks off the map.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Open,
    Obstruction,
    Guard,
}

struct Lab {
    obstructions: DMatrix<bool>,
    start: Coord,
}

#[derive(Error, Debug)]
enum ParseLabError {
    #[error("unexpected map character '{0}'")]
    UnexpectedCell(char),

    #[error("expected exactly one guard, found {0}")]
    GuardCount(usize),
}

impl ParseData for Lab {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let cells = parse_grid(input, |c| match c {
            '.' => Ok(Cell::Open),
            '#' => Ok(Cell::Obstruction),
            '^' => Ok(Cell::Guard),
            other => Err(ParseLabError::UnexpectedCell(other).into()),
        })?;

        let guards: Vec<Coord> = find_all(&cells, &Cell::Guard).collect();
        let [start] = guards.as_slice() else {
            return Err(ParseLabError::GuardCount(guards.len()).into());
        };

        Ok(Self {
            obstructions: cells.map(|cell| cell == Cell::Obstruction),
            start: *start,
        })
    }
}

type GuardState = (Coord, Direction);

fn direction_bit(direction: Direction) -> u8 {
    match direction {
        Direction::North => 1,
        Direction::East => 2,
        Direction::South => 4,
        Direction::West => 8,
    }
}

impl Lab {
    /// The guard's next state, or `None` once the guard leaves the map. `extra` is an added
    /// obstruction.
    fn next_state(
        &self,
        (position, facing): GuardState,
        extra: Option<Coord>,
    ) -> Option<GuardState> {
        let ahead = position.step_within(facing, self.obstructions.shape())?;
        if self.obstructions[ahead.index()] || extra == Some(ahead) {
            Some((position, facing.turn_right()))
        } else {
            Some((ahead, facing))
        }
    }

    /// Whether a patrol from `state` with an obstruction added at `extra` never leaves the map.
    fn loops_from(&self, mut state: GuardState, extra: Coord) -> bool {
        let mut seen = DMatrix::<u8>::zeros(self.obstructions.nrows(), self.obstructions.ncols());
        loop {
            let (position, facing) = state;
            let bits = &mut seen[position.index()];
            if *bits & direction_bit(facing) != 0 {
                return true;
            }
            *bits |= direction_bit(facing);

            match self.next_state(state, Some(extra)) {
                Some(next) => state = next,
                None => return false,
            }
        }
    }
}

/*
For part 1, count the distinct positions the guard visits before leaving the map.
*/

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = Lab;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut visited = input.obstructions.map(|_| false);
        let mut state = Some((input.start, Direction::North));
        while let Some(current) = state {
            visited[current.0.index()] = true;
            state = input.next_state(current, None);
        }
        Ok(visited.iter().filter(|&&cell| cell).count())
    }
}

/*
For part 2, count the positions where adding a single new obstruction traps the guard in a loop.
The guard's starting position cannot be used.

Only cells on the original patrol can matter. Each is tried the first time the patrol reaches it,
resuming the patrol from just before that step.
*/

impl Solution<PartTwo> for Day06 {
    type Input = Lab;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut walked = input.obstructions.map(|_| false);
        walked[input.start.index()] = true;

        let mut loop_positions = 0;
        let mut state = (input.start, Direction::North);
        while let Some(next) = input.next_state(state, None) {
            let (position, _) = next;
            if position != state.0 && !walked[position.index()] {
                walked[position.index()] = true;
                if input.loops_from(state, position) {
                    loop_positions += 1;
                }
            }
            state = next;
        }

        tracing::debug!(
            candidates = walked.iter().filter(|&&cell| cell).count() - 1,
            loop_positions,
            "tried obstructions along the patrol"
        );
        Ok(loop_positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Lab::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 41);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Lab::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 6);
        Ok(())
    }

    #[test]
    fn map_without_guard_is_rejected() {
        assert!(Lab::parse("..#\n...\n").is_err());
    }
}
