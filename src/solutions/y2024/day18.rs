use std::collections::VecDeque;

use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::DMatrix;
use thiserror::Error;

use crate::grid::Coord;

#[solution_runner(
    name = "2024 Day 18: RAM Run",
    parsed = FallingBytes,
    part_one = Day18,
    part_two = Day18
)]
impl super::AdventOfCode2024<18> {}

/*
Input is a list of byte positions `X,Y`, in the order the bytes fall into memory. Memory is a
square grid of 71 by 71 cells, X across and Y down. A cell a byte lands in is corrupted and can't
be entered.

The path runs from the top left corner (0,0) to the bottom right corner, stepping orthogonally.
*/

const MEMORY_SIZE: usize = 71;
const FIRST_KILOBYTE: usize = 1024;

struct FallingBytes(Vec<Coord>);

#[derive(Error, Debug)]
enum RamRunError {
    #[error("expected a position like '5,4'")]
    MalformedPosition,

    #[error("no path to the exit")]
    NoPath,

    #[error("no byte ever cuts off the exit")]
    NeverBlocked,
}

impl ParseData for FallingBytes {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let bytes = parse_input_lines(input, |_, line| {
            let (x, y) = line
                .trim()
                .split_once(',')
                .ok_or(RamRunError::MalformedPosition)?;
            Ok(Coord::new(parse_with_context(y)?, parse_with_context(x)?))
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(bytes))
    }
}

impl FallingBytes {
    /// Fewest steps to the exit of a `size` square memory once the first `fallen` bytes are down.
    fn shortest_path(&self, size: usize, fallen: usize) -> Option<usize> {
        let mut corrupted = DMatrix::from_element(size, size, false);
        for byte in self.0.iter().take(fallen) {
            if byte.row < size && byte.col < size {
                corrupted[byte.index()] = true;
            }
        }
        let start = Coord::new(0, 0);
        let exit = Coord::new(size - 1, size - 1);
        if corrupted[start.index()] {
            return None;
        }

        let mut distances: DMatrix<Option<usize>> = DMatrix::from_element(size, size, None);
        distances[start.index()] = Some(0);
        let mut queue = VecDeque::from([start]);
        while let Some(position) = queue.pop_front() {
            let distance =
                distances[position.index()].expect("queued cells should have a distance");
            if position == exit {
                return Some(distance);
            }
            for neighbor in position.neighbors_within((size, size)) {
                if !corrupted[neighbor.index()] && distances[neighbor.index()].is_none() {
                    distances[neighbor.index()] = Some(distance + 1);
                    queue.push_back(neighbor);
                }
            }
        }
        None
    }

    /// The first byte that leaves no path to the exit. Found by binary search, since more fallen
    /// bytes never open a path.
    fn first_blocking(&self, size: usize) -> Option<Coord> {
        let mut open = 0;
        let mut blocked = self.0.len();
        if self.shortest_path(size, blocked).is_some() {
            return None;
        }
        while blocked - open > 1 {
            let middle = open + (blocked - open) / 2;
            if self.shortest_path(size, middle).is_some() {
                open = middle;
            } else {
                blocked = middle;
            }
        }
        self.0.get(blocked - 1).copied()
    }
}

/*
For part 1, simulate the first kilobyte (1024 bytes) falling, then find the minimum number of steps
to the exit.
*/

struct Day18;

impl Solution<PartOne> for Day18 {
    type Input = FallingBytes;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .shortest_path(MEMORY_SIZE, FIRST_KILOBYTE)
            .ok_or(RamRunError::NoPath)?)
    }
}

/*
For part 2, find the first byte that prevents the exit from being reachable, given as `X,Y`.
*/

impl Solution<PartTwo> for Day18 {
    type Input = FallingBytes;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let byte = input
            .first_blocking(MEMORY_SIZE)
            .ok_or(RamRunError::NeverBlocked)?;
        Ok(format!("{},{}", byte.col, byte.row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_SIZE: usize = 7;

    const EXAMPLE_INPUT: &str = r"5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = FallingBytes::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.shortest_path(EXAMPLE_SIZE, 12), Some(22));
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = FallingBytes::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.first_blocking(EXAMPLE_SIZE), Some(Coord::new(1, 6)));
        Ok(())
    }

    #[test]
    fn empty_memory_path_is_diagonal_length() -> DynamicResult<()> {
        let parsed = FallingBytes::parse("")?;
        assert_eq!(parsed.shortest_path(EXAMPLE_SIZE, 0), Some(12));
        assert_eq!(parsed.first_blocking(EXAMPLE_SIZE), None);
        Ok(())
    }
}
