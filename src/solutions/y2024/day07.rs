use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

#[solution_runner(
    name = "2024 Day 7: Bridge Repair",
    parsed = Equations,
    part_one = Day07,
    part_two = Day07
)]
impl super::AdventOfCode2024<7> {}

/*
Input is one calibration equation per line: a test value, a colon, and the operands, like
`190: 10 19`. The operators between operands are missing. Operators are always evaluated left to
right, never by precedence.
*/

struct Equation {
    test_value: u64,
    operands: Vec<u64>,
}

struct Equations(Vec<Equation>);

#[derive(Error, Debug)]
enum ParseEquationError {
    #[error("expected ':' after the test value")]
    MissingColon,

    #[error("equation has no operands")]
    NoOperands,
}

impl ParseData for Equations {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let equations = parse_input_lines(input, |_, line| {
            let (test_value, operands) = line
                .split_once(':')
                .ok_or(ParseEquationError::MissingColon)?;
            let operands = operands
                .split_whitespace()
                .map(parse_with_context)
                .collect::<Result<Vec<u64>, _>>()?;
            if operands.is_empty() {
                return Err(ParseEquationError::NoOperands.into());
            }
            Ok(Equation {
                test_value: parse_with_context(test_value.trim())?,
                operands,
            })
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(equations))
    }
}

/// Undo `concatenate(prefix, suffix) == value`, giving the prefix.
fn strip_suffix(value: u64, suffix: u64) -> Option<u64> {
    let mut magnitude = 10;
    while magnitude <= suffix {
        magnitude *= 10;
    }
    (value % magnitude == suffix).then_some(value / magnitude)
}

impl Equation {
    /// Whether some choice of operators makes the equation true. Works backwards from the test
    /// value, undoing the last operator at each step.
    fn is_solvable(&self, allow_concatenation: bool) -> bool {
        fn reachable(target: u64, operands: &[u64], allow_concatenation: bool) -> bool {
            let Some((&last, rest)) = operands.split_last() else {
                return false;
            };
            if rest.is_empty() {
                return target == last;
            }
            (target >= last && reachable(target - last, rest, allow_concatenation))
                || (last == 0 && target == 0)
                || (last != 0
                    && target % last == 0
                    && reachable(target / last, rest, allow_concatenation))
                || (allow_concatenation
                    && strip_suffix(target, last)
                        .is_some_and(|prefix| reachable(prefix, rest, allow_concatenation)))
        }
        reachable(self.test_value, &self.operands, allow_concatenation)
    }
}

fn calibration_result(equations: &Equations, allow_concatenation: bool) -> u64 {
    equations
        .0
        .iter()
        .filter(|equation| equation.is_solvable(allow_concatenation))
        .map(|equation| equation.test_value)
        .checked_sum()
        .expect("calibration result should not overflow")
}

/*
For part 1, operators are add (`+`) and multiply (`*`). Sum the test values of the equations that
can be made true.
*/

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = Equations;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(calibration_result(input, false))
    }
}

/*
For part 2, a third operator `||` concatenates the digits of its operands, so `12 || 345` is
`12345`.
*/

impl Solution<PartTwo> for Day07 {
    type Input = Equations;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(calibration_result(input, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Equations::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3749);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Equations::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 11387);
        Ok(())
    }

    #[test]
    fn suffix_stripping() {
        assert_eq!(strip_suffix(12345, 345), Some(12));
        assert_eq!(strip_suffix(12345, 45), Some(123));
        assert_eq!(strip_suffix(12345, 44), None);
        assert_eq!(strip_suffix(100, 0), Some(10));
    }

    #[test]
    fn multiplying_by_zero_reaches_zero() -> DynamicResult<()> {
        let parsed = Equations::parse("0: 5 0\n0: 3 4 0\n5: 5 0\n")?;
        let solvable: Vec<bool> = parsed.0.iter().map(|eq| eq.is_solvable(false)).collect();
        assert_eq!(solvable, vec![true, true, true]);
        assert!(!Equations::parse("1: 5 0\n")?.0[0].is_solvable(false));
        Ok(())
    }
}
