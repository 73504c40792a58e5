use std::collections::HashMap;

use advent_framework::parsing::parse_with_context;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "2024 Day 11: Plutonian Pebbles",
    parsed = Stones,
    part_one = Day11,
    part_two = Day11
)]
impl super::AdventOfCode2024<11> {}

/*
Input is a single line of numbers engraved on stones.

Every blink, each stone changes by the first rule that applies:
- A stone engraved 0 becomes a stone engraved 1.
- A stone with an even number of digits splits in two, the left half of the digits on one stone
  and the right half on the other. Leading zeroes are dropped.
- Otherwise the number is multiplied by 2024.

Order is irrelevant to the count, so stones are tracked as counts per engraving.
*/

struct Stones(Vec<u64>);

impl ParseData for Stones {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let stones = input
            .split_whitespace()
            .map(parse_with_context)
            .collect::<Result<Vec<u64>, _>>()?;
        Ok(Self(stones))
    }
}

fn split_digits(stone: u64) -> Option<(u64, u64)> {
    let digits = stone.checked_ilog10()? + 1;
    (digits % 2 == 0).then(|| {
        let half = 10u64.pow(digits / 2);
        (stone / half, stone % half)
    })
}

fn blink(counts: &HashMap<u64, u64>) -> HashMap<u64, u64> {
    let mut next: HashMap<u64, u64> = HashMap::with_capacity(counts.len());
    let mut add = |stone: u64, count: u64| *next.entry(stone).or_default() += count;
    for (&stone, &count) in counts {
        if stone == 0 {
            add(1, count);
        } else if let Some((left, right)) = split_digits(stone) {
            add(left, count);
            add(right, count);
        } else {
            add(
                stone
                    .checked_mul(2024)
                    .expect("engraving should not overflow"),
                count,
            );
        }
    }
    next
}

impl Stones {
    fn count_after(&self, blinks: usize) -> u64 {
        let mut counts: HashMap<u64, u64> = HashMap::new();
        for &stone in &self.0 {
            *counts.entry(stone).or_default() += 1;
        }
        for _ in 0..blinks {
            counts = blink(&counts);
        }
        tracing::debug!(distinct = counts.len(), blinks, "finished blinking");
        counts
            .values()
            .copied()
            .checked_sum()
            .expect("stone count should not overflow")
    }
}

/*
For part 1, count the stones after blinking 25 times.
*/

struct Day11;

impl Solution<PartOne> for Day11 {
    type Input = Stones;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.count_after(25))
    }
}

/*
For part 2, count the stones after blinking 75 times.
*/

impl Solution<PartTwo> for Day11 {
    type Input = Stones;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.count_after(75))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "125 17\n";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Stones::parse(EXAMPLE_INPUT)?;
        let result = <Day11 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 55312);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Stones::parse(EXAMPLE_INPUT)?;
        let result = <Day11 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 65_601_038_650_482);
        Ok(())
    }

    #[test]
    fn six_blinks() -> DynamicResult<()> {
        let parsed = Stones::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.count_after(6), 22);
        Ok(())
    }

    #[test]
    fn splitting_drops_leading_zeroes() {
        assert_eq!(split_digits(1000), Some((10, 0)));
        assert_eq!(split_digits(2024), Some((20, 24)));
        assert_eq!(split_digits(123), None);
    }
}
