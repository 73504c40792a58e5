use advent_framework::parsing::parse_grid;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use nalgebra::DMatrix;
use thiserror::Error;

use crate::grid::find_all;

#[solution_runner(
    name = "2025 Day 7: Laboratories",
    parsed = Manifold,
    part_one = Day07,
    part_two = Day07
)]
impl super::AdventOfCode2025<7> {}

/*
Input is a diagram of a tachyon manifold. A beam enters at `S` and moves down through empty space,
`.`. When it reaches a splitter, `^`, it stops and two beams continue down from the cells left and
right of the splitter.
*/

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Empty,
    Start,
    Splitter,
}

struct Manifold {
    cells: DMatrix<Cell>,
    start_col: usize,
}

#[derive(Error, Debug)]
enum ParseManifoldError {
    #[error("expected '.', '^' or 'S', found '{0}'")]
    UnexpectedCell(char),

    #[error("expected exactly one 'S' on the top row")]
    BadStart,
}

impl ParseData for Manifold {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let cells = parse_grid(input, |c| match c {
            '.' => Ok(Cell::Empty),
            'S' => Ok(Cell::Start),
            '^' => Ok(Cell::Splitter),
            other => Err(ParseManifoldError::UnexpectedCell(other).into()),
        })?;
        let starts: Vec<_> = find_all(&cells, &Cell::Start).collect();
        let start_col = match starts.as_slice() {
            [start] if start.row == 0 => start.col,
            _ => return Err(ParseManifoldError::BadStart.into()),
        };
        Ok(Self { cells, start_col })
    }
}

/// What happens to the beams on their way down.
struct BeamReport {
    splits: usize,
    /// Number of distinct paths a single particle could take.
    timelines: u64,
}

impl Manifold {
    fn trace(&self) -> BeamReport {
        let cols = self.cells.ncols();
        let mut beams = vec![0u64; cols];
        beams[self.start_col] = 1;
        let mut splits = 0;

        for row in self.cells.row_iter().skip(1) {
            let mut next = vec![0u64; cols];
            for (col, &count) in beams.iter().enumerate().filter(|&(_, &count)| count > 0) {
                if row[col] == Cell::Splitter {
                    splits += 1;
                    // beams leaving the manifold sideways are lost
                    if let Some(left) = col.checked_sub(1) {
                        next[left] += count;
                    }
                    if col + 1 < cols {
                        next[col + 1] += count;
                    }
                } else {
                    next[col] += count;
                }
            }
            beams = next;
        }

        BeamReport {
            splits,
            timelines: beams
                .into_iter()
                .checked_sum()
                .expect("timeline count should not overflow"),
        }
    }
}

/*
For part 1, count how many times the beam is split. Beams landing on the same cell merge.
*/

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = Manifold;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.trace().splits)
    }
}

/*
For part 2, the manifold is quantum: a single particle takes both paths at each splitter, each
choice creating a new timeline. Count the timelines once the particle leaves the bottom.
*/

impl Solution<PartTwo> for Day07 {
    type Input = Manifold;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.trace().timelines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r".......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Manifold::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 21);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Manifold::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 40);
        Ok(())
    }

    #[test]
    fn splitter_off_the_beam_does_nothing() -> DynamicResult<()> {
        let report = Manifold::parse("..S\n...\n^..\n")?.trace();
        assert_eq!(report.splits, 0);
        assert_eq!(report.timelines, 1);
        Ok(())
    }

    #[test]
    fn start_must_be_on_top() {
        assert!(Manifold::parse("...\n.S.\n").is_err());
    }
}
