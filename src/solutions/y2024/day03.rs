use advent_framework::parsing::parse_with_context;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use regex::Regex;

#[solution_runner(name = "2024 Day 3: Mull It Over", part_one = Day03, part_two = Day03)]
impl super::AdventOfCode2024<3> {}

/*
Input is corrupted program memory. Hidden inside are instructions like `mul(X,Y)`, where X and Y are
1-3 digit numbers. Anything not matching the exact form is noise.
*/

/// An instruction recovered from memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Mul(u32, u32),
    Do,
    Dont,
}

fn instruction_pattern() -> Regex {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").expect("pattern should be valid")
}

/// Scan memory for instructions in order of appearance.
fn scan_instructions(memory: &str) -> DynamicResult<Vec<Instruction>> {
    instruction_pattern()
        .captures_iter(memory)
        .map(|captures| -> DynamicResult<Instruction> {
            match (&captures[0], captures.get(1), captures.get(2)) {
                (_, Some(x), Some(y)) => Ok(Instruction::Mul(
                    parse_with_context(x.as_str())?,
                    parse_with_context(y.as_str())?,
                )),
                ("do()", _, _) => Ok(Instruction::Do),
                _ => Ok(Instruction::Dont),
            }
        })
        .collect()
}

/*
For part 1, sum the products of every `mul` instruction.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = str;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let sum = scan_instructions(input)?
            .into_iter()
            .filter_map(|instruction| match instruction {
                Instruction::Mul(x, y) => Some(u64::from(x) * u64::from(y)),
                Instruction::Do | Instruction::Dont => None,
            })
            .checked_sum()
            .expect("sum of products should not overflow");
        Ok(sum)
    }
}

/*
For part 2, `do()` enables and `don't()` disables following `mul` instructions. Only the most
recent toggle applies, and instructions start enabled.
*/

impl Solution<PartTwo> for Day03 {
    type Input = str;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut enabled = true;
        let mut products = Vec::new();
        for instruction in scan_instructions(input)? {
            match instruction {
                Instruction::Mul(x, y) if enabled => products.push(u64::from(x) * u64::from(y)),
                Instruction::Mul(..) => {}
                Instruction::Do => enabled = true,
                Instruction::Dont => enabled = false,
            }
        }
        Ok(products
            .into_iter()
            .checked_sum()
            .expect("sum of products should not overflow"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let input = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        let result = <Day03 as Solution<PartOne>>::solve(input)?;
        assert_eq!(result, 161);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let input = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        let result = <Day03 as Solution<PartTwo>>::solve(input)?;
        assert_eq!(result, 48);
        Ok(())
    }

    #[test]
    fn operands_over_three_digits_are_noise() -> DynamicResult<()> {
        assert_eq!(scan_instructions("mul(1234,5)mul(123,4)")?, vec![Instruction::Mul(123, 4)]);
        Ok(())
    }
}
