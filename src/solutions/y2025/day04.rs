use advent_framework::parsing::parse_grid;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::DMatrix;
use thiserror::Error;

use crate::grid::{Coord, find_all};

#[solution_runner(
    name = "2025 Day 4: Printing Department",
    parsed = PaperRolls,
    part_one = Day04,
    part_two = Day04
)]
impl super::AdventOfCode2025<4> {}

/*
Input is a grid of paper rolls, `@`, and empty floor, `.`.

A forklift can reach a roll when fewer than four of the eight surrounding cells hold a roll.
*/

const CROWDED: usize = 4;

struct PaperRolls(DMatrix<bool>);

#[derive(Error, Debug)]
#[error("expected '@' or '.', found '{0}'")]
struct UnexpectedCell(char);

impl ParseData for PaperRolls {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let grid = parse_grid(input, |c| match c {
            '@' => Ok(true),
            '.' => Ok(false),
            other => Err(UnexpectedCell(other).into()),
        })?;
        Ok(Self(grid))
    }
}

fn neighbor_rolls(rolls: &DMatrix<bool>, coord: Coord) -> usize {
    coord
        .adjacent_within(rolls.shape())
        .filter(|neighbor| rolls[neighbor.index()])
        .count()
}

/*
For part 1, count the rolls a forklift can reach.
*/

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = PaperRolls;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(find_all(&input.0, &true)
            .filter(|&roll| neighbor_rolls(&input.0, roll) < CROWDED)
            .count())
    }
}

/*
For part 2, reachable rolls can be removed, which may make more rolls reachable. Count how many
rolls can be removed in total.
*/

impl Solution<PartTwo> for Day04 {
    type Input = PaperRolls;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut rolls = input.0.clone();
        let mut to_check: Vec<Coord> = find_all(&rolls, &true).collect();
        let mut removed = 0;
        // removal only lowers neighbor counts, so order does not matter
        while let Some(coord) = to_check.pop() {
            if !rolls[coord.index()] || neighbor_rolls(&rolls, coord) >= CROWDED {
                continue;
            }
            rolls[coord.index()] = false;
            removed += 1;
            to_check.extend(
                coord
                    .adjacent_within(rolls.shape())
                    .filter(|neighbor| rolls[neighbor.index()]),
            );
        }
        Ok(removed)
    }
}
