use advent_framework::parsing::parse_grid;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::DMatrix;

use crate::grid::{Coord, EIGHT_WAYS, find_all};

#[solution_runner(
    name = "2024 Day 4: Ceres Search",
    parsed = WordSearch,
    part_one = Day04,
    part_two = Day04
)]
impl super::AdventOfCode2024<4> {}

/*
Input is a rectangular word search of letters.
*/

struct WordSearch(DMatrix<char>);

impl ParseData for WordSearch {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        Ok(Self(parse_grid(input, Ok)?))
    }
}

impl WordSearch {
    /// Whether `word` is spelled starting at `start` and stepping by `offset`.
    fn spells(&self, word: &str, start: Coord, offset: (isize, isize)) -> bool {
        let shape = self.0.shape();
        let mut position = Some(start);
        for letter in word.chars() {
            match position {
                Some(coord) if self.0[coord.index()] == letter => {
                    position = coord.offset_within(offset, shape);
                }
                _ => return false,
            }
        }
        // stepping past the final letter may leave the grid
        true
    }
}

/*
For part 1, count every occurrence of XMAS. Words may run horizontally, vertically or diagonally,
backwards, and may overlap.
*/

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = WordSearch;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let count = find_all(&input.0, &'X')
            .map(|start| {
                EIGHT_WAYS
                    .iter()
                    .filter(|&&offset| input.spells("XMAS", start, offset))
                    .count()
            })
            .sum();
        Ok(count)
    }
}

/*
For part 2, count X shapes made of two MAS words crossing on their shared A. Each diagonal may read
forwards or backwards.
*/

impl WordSearch {
    fn is_cross_center(&self, center: Coord) -> bool {
        let shape = self.0.shape();
        let diagonal = |from: (isize, isize)| {
            let to = (-from.0, -from.1);
            match (
                center.offset_within(from, shape),
                center.offset_within(to, shape),
            ) {
                (Some(start), Some(_)) => {
                    self.spells("MAS", start, to) || self.spells("SAM", start, to)
                }
                _ => false,
            }
        };
        diagonal((-1, -1)) && diagonal((-1, 1))
    }
}

impl Solution<PartTwo> for Day04 {
    type Input = WordSearch;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(find_all(&input.0, &'A')
            .filter(|&center| input.is_cross_center(center))
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = WordSearch::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 18);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = WordSearch::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 9);
        Ok(())
    }

    #[test]
    fn words_may_end_on_the_edge() -> DynamicResult<()> {
        let parsed = WordSearch::parse("XMAS\n")?;
        assert_eq!(<Day04 as Solution<PartOne>>::solve(&parsed)?, 1);
        Ok(())
    }
}
