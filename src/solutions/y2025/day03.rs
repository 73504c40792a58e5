use advent_framework::parsing::parse_input_lines;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

#[solution_runner(
    name = "2025 Day 3: Lobby",
    parsed = Banks,
    part_one = Day03,
    part_two = Day03
)]
impl super::AdventOfCode2025<3> {}

/*
Input is one bank of batteries per line, each battery a joltage digit from 1 to 9.

Turning on some batteries of a bank makes its joltage the number formed by their digits, in the
order they appear in the bank.
*/

struct Banks(Vec<Vec<u8>>);

#[derive(Error, Debug)]
#[error("expected a battery joltage digit, found '{0}'")]
struct NotAJoltage(char);

impl ParseData for Banks {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let banks = parse_input_lines(input, |_, line| {
            line.trim()
                .chars()
                .map(|c| {
                    c.to_digit(10)
                        .and_then(|digit| u8::try_from(digit).ok())
                        .ok_or_else(|| NotAJoltage(c).into())
                })
                .collect::<DynamicResult<Vec<u8>>>()
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(banks))
    }
}

/// The largest joltage from turning on exactly `count` batteries of the bank, if it has enough.
///
/// Each digit is the largest that still leaves enough batteries after it; picking its first
/// occurrence keeps the most choice for the rest.
fn max_joltage(bank: &[u8], count: usize) -> Option<u64> {
    let mut joltage = 0;
    let mut start = 0;
    for remaining in (0..count).rev() {
        let window = bank.get(start..bank.len().checked_sub(remaining)?)?;
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, digit)| digit)?;
        joltage = joltage * 10 + u64::from(digit);
        start += offset + 1;
    }
    Some(joltage)
}

fn total_joltage(banks: &Banks, count: usize) -> u64 {
    banks
        .0
        .iter()
        .filter_map(|bank| max_joltage(bank, count))
        .checked_sum()
        .expect("total joltage should not overflow")
}

/*
For part 1, turn on exactly two batteries in each bank. Sum the largest possible joltages.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = Banks;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(total_joltage(input, 2))
    }
}

/*
For part 2, turn on exactly twelve batteries in each bank.
*/

impl Solution<PartTwo> for Day03 {
    type Input = Banks;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(total_joltage(input, 12))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"987654321111111
811111111111119
234234234234278
818181911112111
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Banks::parse(EXAMPLE_INPUT)?;
        let result = <Day03 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 357);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Banks::parse(EXAMPLE_INPUT)?;
        let result = <Day03 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 3_121_910_778_619);
        Ok(())
    }

    #[test]
    fn bank_too_small_has_no_joltage() {
        assert_eq!(max_joltage(&[9, 1], 2), Some(91));
        assert_eq!(max_joltage(&[9], 2), None);
    }

    #[test]
    fn equal_digits_take_the_earliest() {
        assert_eq!(max_joltage(&[9, 1, 9, 1], 2), Some(99));
        assert_eq!(max_joltage(&[9, 1, 9, 1], 3), Some(991));
    }
}
