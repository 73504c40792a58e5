use advent_framework::parsing::InputScanner;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

#[solution_runner(
    name = "2024 Day 19: Linen Layout",
    parsed = Onsen,
    part_one = Day19,
    part_two = Day19
)]
impl super::AdventOfCode2024<19> {}

/*
Input is a comma separated list of available towel patterns, a blank line, then one desired design
per line. Patterns and designs are strings of stripe colours. Every pattern may be used any number
of times, and towels are laid end to end without being flipped.
*/

struct Onsen {
    patterns: Vec<String>,
    designs: Vec<String>,
}

#[derive(Error, Debug)]
#[error("missing the list of towel patterns")]
struct MissingPatterns;

impl ParseData for Onsen {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);
        scanner.skip_empty();
        let patterns = scanner
            .next_item(|_, line| {
                Ok(line
                    .split(',')
                    .map(str::trim)
                    .filter(|pattern| !pattern.is_empty())
                    .map(str::to_owned)
                    .collect::<Vec<_>>())
            })?
            .ok_or(MissingPatterns)?;
        scanner.skip_empty();
        let designs = scanner.collect_sequence(|_, line| Ok(line.trim().to_owned()))?;
        Ok(Self { patterns, designs })
    }
}

impl Onsen {
    /// Number of ways to arrange patterns into `design`, counting by prefix length.
    fn arrangements(&self, design: &str) -> u64 {
        let mut ways = vec![0u64; design.len() + 1];
        ways[0] = 1;
        for end in 1..=design.len() {
            ways[end] = self
                .patterns
                .iter()
                .filter(|pattern| design[..end].ends_with(pattern.as_str()))
                .map(|pattern| ways[end - pattern.len()])
                .checked_sum()
                .expect("arrangement count should not overflow");
        }
        ways[design.len()]
    }
}

/*
For part 1, count the designs that can be made at all.
*/

struct Day19;

impl Solution<PartOne> for Day19 {
    type Input = Onsen;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .designs
            .iter()
            .filter(|design| input.arrangements(design) > 0)
            .count())
    }
}

/*
For part 2, sum the number of different ways each design can be made.
*/

impl Solution<PartTwo> for Day19 {
    type Input = Onsen;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .designs
            .iter()
            .map(|design| input.arrangements(design))
            .checked_sum()
            .expect("arrangement total should not overflow"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrgwb
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Onsen::parse(EXAMPLE_INPUT)?;
        let result = <Day19 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 6);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Onsen::parse(EXAMPLE_INPUT)?;
        let result = <Day19 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 16);
        Ok(())
    }

    #[test]
    fn arrangements_of_single_design() -> DynamicResult<()> {
        let parsed = Onsen::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.arrangements("rrbgbr"), 6);
        assert_eq!(parsed.arrangements("ubwu"), 0);
        Ok(())
    }
}
