use std::cmp::Ordering;
use std::collections::HashSet;

use advent_framework::parsing::{InputScanner, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

#[solution_runner(
    name = "2024 Day 5: Print Queue",
    parsed = PrintQueue,
    part_one = Day05,
    part_two = Day05
)]
impl super::AdventOfCode2024<5> {}

/*
Input is two sections separated by a blank line. The first lists page ordering rules as `X|Y`,
meaning page X must be printed before page Y when both are in an update. The second lists updates,
each a comma separated list of page numbers.
*/

type Page = u32;

struct PrintQueue {
    /// Pairs `(before, after)`.
    rules: HashSet<(Page, Page)>,
    updates: Vec<Vec<Page>>,
}

#[derive(Error, Debug)]
enum ParsePrintQueueError {
    #[error("ordering rule is missing '|'")]
    MissingBar,

    #[error("update has no pages")]
    EmptyUpdate,
}

impl ParseData for PrintQueue {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);
        scanner.skip_empty();
        let rules = scanner
            .collect_sequence(|_, line| {
                let (before, after) = line
                    .split_once('|')
                    .ok_or(ParsePrintQueueError::MissingBar)?;
                Ok((
                    parse_with_context::<Page>(before.trim())?,
                    parse_with_context::<Page>(after.trim())?,
                ))
            })?
            .into_iter()
            .collect();

        scanner.skip_empty();
        let updates = scanner.collect_sequence(|_, line| {
            let pages = line
                .split(',')
                .map(|page| parse_with_context(page.trim()))
                .collect::<Result<Vec<Page>, _>>()?;
            if pages.is_empty() {
                return Err(ParsePrintQueueError::EmptyUpdate.into());
            }
            Ok(pages)
        })?;

        Ok(Self { rules, updates })
    }
}

impl PrintQueue {
    /// Rule-derived order of two pages; pages with no rule between them compare equal.
    fn compare(&self, a: Page, b: Page) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[Page]) -> bool {
        update.is_sorted_by(|&a, &b| self.compare(a, b) != Ordering::Greater)
    }
}

fn middle_page(update: &[Page]) -> Page {
    update[update.len() / 2]
}

/*
For part 1, find the updates already in the right order and sum their middle page numbers.
*/

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = PrintQueue;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .updates
            .iter()
            .filter(|update| input.is_ordered(update))
            .map(|update| u64::from(middle_page(update)))
            .checked_sum()
            .expect("sum of middle pages should not overflow"))
    }
}

/*
For part 2, put each incorrectly ordered update into the right order, then sum the middle page
numbers of only those updates.
*/

impl Solution<PartTwo> for Day05 {
    type Input = PrintQueue;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .updates
            .iter()
            .filter(|update| !input.is_ordered(update))
            .map(|update| {
                let mut fixed = update.clone();
                fixed.sort_by(|&a, &b| input.compare(a, b));
                u64::from(middle_page(&fixed))
            })
            .checked_sum()
            .expect("sum of middle pages should not overflow"))
    }
}
