use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use advent_framework::parsing::parse_with_context;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

#[solution_runner(
    name = "2025 Day 2: Gift Shop",
    parsed = IdRanges,
    part_one = Day02,
    part_two = Day02
)]
impl super::AdventOfCode2025<2> {}

/*
Input is a comma separated list of product id ranges, like `11-22,95-115`. Both ends are inclusive.

An id is invalid when its digits are some sequence repeated, like `55`, `6464` or `123123`. Ids
never have leading zeroes.
*/

struct IdRanges(Vec<RangeInclusive<u64>>);

#[derive(Error, Debug)]
#[error("expected an id range like '11-22', found '{0}'")]
struct MalformedRange(String);

impl ParseData for IdRanges {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let ranges = input
            .split(',')
            .map(str::trim)
            .filter(|range| !range.is_empty())
            .map(|range| -> DynamicResult<RangeInclusive<u64>> {
                let (start, end) = range
                    .split_once('-')
                    .ok_or_else(|| MalformedRange(range.to_owned()))?;
                let start: u64 = parse_with_context(start)?;
                let end: u64 = parse_with_context(end)?;
                Ok(start..=end)
            })
            .collect::<DynamicResult<Vec<_>>>()?;
        Ok(Self(ranges))
    }
}

fn digit_count(number: u64) -> u32 {
    number.checked_ilog10().map_or(1, |log| log + 1)
}

impl IdRanges {
    /// Every invalid id in the ranges made of a sequence repeated a count of times that
    /// `repeats` accepts.
    fn invalid_ids(&self, repeats: impl Fn(u32) -> bool) -> BTreeSet<u64> {
        let mut invalid = BTreeSet::new();
        for range in &self.0 {
            let (low, high) = (*range.start(), *range.end());
            for length in digit_count(low)..=digit_count(high) {
                for pattern_length in (1..length).filter(|k| length % k == 0) {
                    if !repeats(length / pattern_length) {
                        continue;
                    }
                    // a pattern p repeated to `length` digits is p * 0..010..01
                    let multiplier = (10u128.pow(length) - 1) / (10u128.pow(pattern_length) - 1);
                    let multiplier = u64::try_from(multiplier)
                        .expect("multiplier should have no more digits than the id");
                    let first = 10u64.pow(pattern_length - 1).max(low.div_ceil(multiplier));
                    let last = (10u64.pow(pattern_length) - 1).min(high / multiplier);
                    invalid.extend((first..=last).map(|pattern| pattern * multiplier));
                }
            }
        }
        invalid
    }
}

fn sum_ids(ids: BTreeSet<u64>) -> u64 {
    ids.into_iter()
        .checked_sum()
        .expect("sum of invalid ids should not overflow")
}

/*
For part 1, an invalid id is a sequence repeated exactly twice. Sum the invalid ids.
*/

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = IdRanges;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sum_ids(input.invalid_ids(|repeats| repeats == 2)))
    }
}

/*
For part 2, an invalid id is a sequence repeated at least twice.
*/

impl Solution<PartTwo> for Day02 {
    type Input = IdRanges;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sum_ids(input.invalid_ids(|repeats| repeats >= 2)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
824824821-824824827,2121212118-2121212124\n";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = IdRanges::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 1_227_775_554);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = IdRanges::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 4_174_379_265);
        Ok(())
    }

    #[test]
    fn ids_repeating_several_ways_count_once() -> DynamicResult<()> {
        let parsed = IdRanges::parse("222222-222222")?;
        let ids: Vec<u64> = parsed.invalid_ids(|repeats| repeats >= 2).into_iter().collect();
        assert_eq!(ids, vec![222_222]);
        Ok(())
    }

    #[test]
    fn range_needs_a_dash() {
        assert!(IdRanges::parse("11-22,95").is_err());
    }

    #[test]
    fn twenty_digit_ids() -> DynamicResult<()> {
        let parsed = IdRanges::parse("11111111111111111110-11111111111111111112")?;
        let ids: Vec<u64> = parsed.invalid_ids(|repeats| repeats == 2).into_iter().collect();
        assert_eq!(ids, vec![11_111_111_111_111_111_111]);

        let parsed = IdRanges::parse("18446744073709551600-18446744073709551615")?;
        assert!(parsed.invalid_ids(|repeats| repeats >= 2).is_empty());
        Ok(())
    }
}
