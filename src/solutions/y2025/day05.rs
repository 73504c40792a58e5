use std::ops::RangeInclusive;

use advent_framework::parsing::{InputScanner, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

#[solution_runner(
    name = "2025 Day 5: Cafeteria",
    parsed = Inventory,
    part_one = Day05,
    part_two = Day05
)]
impl super::AdventOfCode2025<5> {}

/*
Input is a list of fresh ingredient id ranges, like `3-5`, one per line. Then, after a blank line,
the ids of the available ingredients, one per line.

Ranges are inclusive and may overlap.
*/

type IngredientId = u64;

struct Inventory {
    /// Fresh ranges merged so that they are sorted and disjoint.
    fresh: Vec<RangeInclusive<IngredientId>>,
    available: Vec<IngredientId>,
}

#[derive(Error, Debug)]
#[error("expected a fresh id range like '3-5'")]
struct MalformedRange;

/// Sort ranges and merge those that overlap or touch.
fn merge_ranges(
    mut ranges: Vec<RangeInclusive<IngredientId>>,
) -> Vec<RangeInclusive<IngredientId>> {
    ranges.sort_unstable_by_key(|range| *range.start());
    let mut merged: Vec<RangeInclusive<IngredientId>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(last) = merged.last_mut()
            && *range.start() <= last.end().saturating_add(1)
        {
            if range.end() > last.end() {
                *last = *last.start()..=*range.end();
            }
            continue;
        }
        merged.push(range);
    }
    merged
}

impl ParseData for Inventory {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);
        scanner.skip_empty();
        let ranges = scanner.collect_sequence(|_, line| {
            let (start, end) = line.trim().split_once('-').ok_or(MalformedRange)?;
            let start: IngredientId = parse_with_context(start)?;
            let end: IngredientId = parse_with_context(end)?;
            if start > end {
                return Err(MalformedRange.into());
            }
            Ok(start..=end)
        })?;
        scanner.skip_empty();
        let available = scanner
            .collect_sequence(|_, line| Ok(parse_with_context::<IngredientId>(line.trim())?))?;

        Ok(Self {
            fresh: merge_ranges(ranges),
            available,
        })
    }
}

impl Inventory {
    fn is_fresh(&self, id: IngredientId) -> bool {
        // the merged ranges are sorted, so find the last one starting at or before the id
        let index = self.fresh.partition_point(|range| *range.start() <= id);
        index > 0 && self.fresh[index - 1].contains(&id)
    }
}

/*
For part 1, count the available ingredients that are fresh.
*/

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = Inventory;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .available
            .iter()
            .filter(|&&id| input.is_fresh(id))
            .count())
    }
}

/*
For part 2, count every ingredient id the fresh ranges consider fresh.
*/

impl Solution<PartTwo> for Day05 {
    type Input = Inventory;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .fresh
            .iter()
            .map(|range| range.end() - range.start() + 1)
            .checked_sum()
            .expect("fresh id count should not overflow"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"3-5
10-14
16-20
12-18

1
5
8
11
17
32
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Inventory::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Inventory::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 14);
        Ok(())
    }

    #[test]
    fn merges_overlapping_and_touching_ranges() {
        let merged = merge_ranges(vec![10..=14, 3..=5, 16..=20, 12..=18, 6..=6, 30..=31]);
        assert_eq!(merged, vec![3..=6, 10..=20, 30..=31]);
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(Inventory::parse("5-3\n\n1\n").is_err());
    }

    #[test]
    fn single_id_range_counts_once() -> DynamicResult<()> {
        let parsed = Inventory::parse("7-7\n\n7\n")?;
        assert_eq!(<Day05 as Solution<PartOne>>::solve(&parsed)?, 1);
        assert_eq!(<Day05 as Solution<PartTwo>>::solve(&parsed)?, 1);
        Ok(())
    }
}
