use std::collections::{BTreeMap, HashSet};

use advent_framework::parsing::parse_grid;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use thiserror::Error;

use crate::grid::Coord;

#[solution_runner(
    name = "2024 Day 8: Resonant Collinearity",
    parsed = AntennaMap,
    part_one = Day08,
    part_two = Day08
)]
impl super::AdventOfCode2024<8> {}

/*
Input is a map of antennas. Each antenna is a letter or digit naming its frequency; `.` is empty.
Antinodes form along the line through two antennas of the same frequency.
*/

struct AntennaMap {
    shape: (usize, usize),
    /// Antenna positions grouped by frequency.
    antennas: BTreeMap<char, Vec<Coord>>,
}

#[derive(Error, Debug)]
#[error("unexpected map character '{0}'")]
struct UnexpectedCell(char);

impl ParseData for AntennaMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let grid = parse_grid(input, |c| match c {
            '.' => Ok(None),
            c if c.is_ascii_alphanumeric() => Ok(Some(c)),
            other => Err(UnexpectedCell(other).into()),
        })?;

        let mut antennas: BTreeMap<char, Vec<Coord>> = BTreeMap::new();
        for row in 0..grid.nrows() {
            for col in 0..grid.ncols() {
                if let Some(frequency) = grid[(row, col)] {
                    antennas.entry(frequency).or_default().push(Coord::new(row, col));
                }
            }
        }
        Ok(Self {
            shape: grid.shape(),
            antennas,
        })
    }
}

impl AntennaMap {
    /// Collect antinodes over every ordered pair of same-frequency antennas. `along` yields the
    /// antinodes for a pair, given the pair and the step from the first antenna to the second.
    fn count_antinodes<F, I>(&self, mut along: F) -> usize
    where
        F: FnMut(Coord, Coord, (isize, isize)) -> I,
        I: IntoIterator<Item = Coord>,
    {
        let mut antinodes = HashSet::new();
        for positions in self.antennas.values() {
            for &a in positions {
                for &b in positions {
                    if a == b {
                        continue;
                    }
                    let step = (
                        b.row as isize - a.row as isize,
                        b.col as isize - a.col as isize,
                    );
                    antinodes.extend(along(a, b, step));
                }
            }
        }
        antinodes.len()
    }
}

/*
For part 1, an antinode occurs where one antenna of a pair is twice as far away as the other. Each
pair has two, one on either side. Count the unique antinode positions within the map.

Iterating over ordered pairs covers both sides, since each pair is seen in both orders.
*/

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = AntennaMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.count_antinodes(|_, b, step| b.offset_within(step, input.shape)))
    }
}

/*
For part 2, antinodes occur at every grid position exactly in line with at least two antennas of
the same frequency, including the antennas themselves.
*/

impl Solution<PartTwo> for Day08 {
    type Input = AntennaMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.count_antinodes(|a, _, step| {
            std::iter::successors(Some(a), move |position| {
                position.offset_within(step, input.shape)
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = AntennaMap::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 14);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = AntennaMap::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 34);
        Ok(())
    }

    #[test]
    fn harmonics_include_the_antennas() -> DynamicResult<()> {
        let parsed = AntennaMap::parse("T....\n.....\n.T...\n")?;
        assert_eq!(<Day08 as Solution<PartTwo>>::solve(&parsed)?, 2);
        Ok(())
    }
}
