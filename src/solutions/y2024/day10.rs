use std::collections::HashSet;

use advent_framework::parsing::parse_grid;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::DMatrix;
use thiserror::Error;

use crate::grid::{Coord, find_all};

#[solution_runner(
    name = "2024 Day 10: Hoof It",
    parsed = TopographicMap,
    part_one = Day10,
    part_two = Day10
)]
impl super::AdventOfCode2024<10> {}

/*
Input is a topographic map of heights 0 to 9. A `.` marks impassable ground.

A hiking trail starts at height 0, ends at height 9, and climbs exactly 1 with every orthogonal
step. A trailhead is any position that starts one or more trails.
*/

type Height = Option<u32>;

struct TopographicMap(DMatrix<Height>);

#[derive(Error, Debug)]
#[error("unexpected map character '{0}'")]
struct UnexpectedCell(char);

impl ParseData for TopographicMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let heights = parse_grid(input, |c| match c {
            '.' => Ok(None),
            c => Ok(Some(c.to_digit(10).ok_or(UnexpectedCell(c))?)),
        })?;
        Ok(Self(heights))
    }
}

impl TopographicMap {
    fn trailheads(&self) -> impl Iterator<Item = Coord> + '_ {
        find_all(&self.0, &Some(0))
    }

    /// Positions one step up from `position`.
    fn uphill(&self, position: Coord) -> impl Iterator<Item = Coord> + '_ {
        let next_height = self.0[position.index()].map(|height| height + 1);
        position
            .neighbors_within(self.0.shape())
            .filter(move |neighbor| {
                next_height.is_some() && self.0[neighbor.index()] == next_height
            })
    }
}

/*
For part 1, a trailhead's score is the number of distinct height 9 positions it can reach by
trails. Sum the scores of all trailheads.
*/

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = TopographicMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let score = |trailhead: Coord| {
            let mut frontier = HashSet::from([trailhead]);
            for _ in 0..9 {
                frontier = frontier
                    .into_iter()
                    .flat_map(|position| input.uphill(position))
                    .collect();
            }
            frontier.len()
        };
        Ok(input.trailheads().map(score).sum())
    }
}

/*
For part 2, a trailhead's rating is the number of distinct trails starting from it. Sum the
ratings of all trailheads.

Trail counts are built down from the peaks: each position has as many trails as the positions one
step uphill combined.
*/

impl Solution<PartTwo> for Day10 {
    type Input = TopographicMap;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut trails = input.0.map(|height| u64::from(height == Some(9)));
        for height in (0..9).rev() {
            for position in find_all(&input.0, &Some(height)) {
                let count: u64 = input
                    .uphill(position)
                    .map(|next| trails[next.index()])
                    .sum();
                trails[position.index()] = count;
            }
        }
        Ok(input
            .trailheads()
            .map(|trailhead| trails[trailhead.index()])
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = TopographicMap::parse(EXAMPLE_INPUT)?;
        let result = <Day10 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 36);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = TopographicMap::parse(EXAMPLE_INPUT)?;
        let result = <Day10 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 81);
        Ok(())
    }

    #[test]
    fn impassable_ground_blocks_trails() -> DynamicResult<()> {
        let parsed = TopographicMap::parse(
            "...0...\n...1...\n...2...\n6543456\n7.....7\n8.....8\n9.....9\n",
        )?;
        assert_eq!(<Day10 as Solution<PartOne>>::solve(&parsed)?, 2);
        Ok(())
    }
}
