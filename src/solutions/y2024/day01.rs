use std::collections::HashMap;

use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "2024 Day 1: Historian Hysteria",
    parsed = LocationLists,
    part_one = Day01,
    part_two = Day01
)]
impl super::AdventOfCode2024<1> {}

/*
Input is two lists of location ids side by side, one pair of whitespace separated numbers per line.
*/

type LocationId = u32;

#[derive(Debug)]
struct LocationLists {
    left: Vec<LocationId>,
    right: Vec<LocationId>,
}

#[derive(thiserror::Error, Debug)]
enum ParseLocationListsError {
    #[error("expected exactly two location ids on the line, found {0}")]
    ExpectedPair(usize),
}

impl ParseData for LocationLists {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let pairs: Vec<(LocationId, LocationId)> = parse_input_lines(input, |_, line| {
            let values: Vec<_> = line.split_whitespace().collect();
            let [left, right] = values.as_slice() else {
                return Err(ParseLocationListsError::ExpectedPair(values.len()).into());
            };
            Ok((parse_with_context(left)?, parse_with_context(right)?))
        })
        .collect::<Result<_, _>>()?;

        let (left, right) = pairs.into_iter().unzip();
        Ok(Self { left, right })
    }
}

/*
For part 1, pair up the smallest id of the left list with the smallest of the right, then the
second smallest of each, and so on. Sum the distances between paired ids.
*/

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = LocationLists;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut left = input.left.clone();
        let mut right = input.right.clone();
        left.sort_unstable();
        right.sort_unstable();

        let total = left
            .into_iter()
            .zip(right)
            .map(|(l, r)| u64::from(l.abs_diff(r)))
            .checked_sum()
            .expect("total distance should not overflow");
        Ok(total)
    }
}

/*
For part 2, compute a similarity score: each id in the left list is multiplied by how often it
appears in the right list, and the products are summed.
*/

impl Solution<PartTwo> for Day01 {
    type Input = LocationLists;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut right_counts: HashMap<LocationId, u64> = HashMap::new();
        for &id in &input.right {
            *right_counts.entry(id).or_default() += 1;
        }

        let score = input
            .left
            .iter()
            .map(|id| u64::from(*id) * right_counts.get(id).copied().unwrap_or(0))
            .checked_sum()
            .expect("similarity score should not overflow");
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = LocationLists::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 11);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = LocationLists::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 31);
        Ok(())
    }

    #[test]
    fn parse_rejects_single_column() {
        assert!(LocationLists::parse("3   4\n5\n").is_err());
    }
}
