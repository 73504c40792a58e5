use advent_framework::parsing::{InputScanner, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use regex::Regex;
use thiserror::Error;

#[solution_runner(
    name = "2024 Day 13: Claw Contraption",
    parsed = Arcade,
    part_one = Day13,
    part_two = Day13
)]
impl super::AdventOfCode2024<13> {}

/*
Input is a list of claw machines separated by blank lines, each written as:

Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Pressing A costs 3 tokens and B costs 1. A machine is won when the claw lands exactly on the prize.
*/

type Vector = (i64, i64);

#[derive(Debug, Clone, Copy)]
struct Machine {
    a: Vector,
    b: Vector,
    prize: Vector,
}

struct Arcade(Vec<Machine>);

#[derive(Error, Debug)]
enum ParseMachineError {
    #[error("expected a line starting with {0:?}")]
    ExpectedLine(&'static str),

    #[error("expected X and Y values")]
    MissingValues,
}

/// Read the next line of a machine, which starts with `label` and holds an X and Y value.
fn read_vector(
    scanner: &mut InputScanner<'_>,
    values: &Regex,
    label: &'static str,
) -> DynamicResult<Vector> {
    scanner
        .next_item(|_, line| {
            let rest = line
                .strip_prefix(label)
                .ok_or(ParseMachineError::ExpectedLine(label))?;
            let captures = values
                .captures(rest)
                .ok_or(ParseMachineError::MissingValues)?;
            Ok((
                parse_with_context(&captures[1])?,
                parse_with_context(&captures[2])?,
            ))
        })?
        .ok_or_else(|| ParseMachineError::ExpectedLine(label).into())
}

impl ParseData for Arcade {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let values = Regex::new(r"X[+=](\d+), Y[+=](\d+)").expect("pattern should be valid");
        let mut scanner = InputScanner::new(input);
        let mut machines = Vec::new();
        while scanner.skip_empty() {
            machines.push(Machine {
                a: read_vector(&mut scanner, &values, "Button A:")?,
                b: read_vector(&mut scanner, &values, "Button B:")?,
                prize: read_vector(&mut scanner, &values, "Prize:")?,
            });
        }
        Ok(Self(machines))
    }
}

impl Machine {
    /// Presses of A and B that reach the prize, if any. Solved exactly with Cramer's rule;
    /// machines whose buttons move in parallel are treated as unwinnable.
    fn presses(&self) -> Option<(i64, i64)> {
        let determinant = self.a.0 * self.b.1 - self.a.1 * self.b.0;
        if determinant == 0 {
            return None;
        }
        let a_numerator = self.prize.0 * self.b.1 - self.prize.1 * self.b.0;
        let b_numerator = self.a.0 * self.prize.1 - self.a.1 * self.prize.0;
        if a_numerator % determinant != 0 || b_numerator % determinant != 0 {
            return None;
        }
        let presses = (a_numerator / determinant, b_numerator / determinant);
        (presses.0 >= 0 && presses.1 >= 0).then_some(presses)
    }

    fn tokens(&self, press_limit: Option<i64>) -> Option<i64> {
        let (a, b) = self.presses()?;
        if press_limit.is_some_and(|limit| a > limit || b > limit) {
            return None;
        }
        Some(3 * a + b)
    }
}

/*
For part 1, each button is pressed at most 100 times. Find the fewest tokens spent to win every
winnable prize.
*/

struct Day13;

impl Solution<PartOne> for Day13 {
    type Input = Arcade;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .filter_map(|machine| machine.tokens(Some(100)))
            .checked_sum()
            .expect("token total should not overflow"))
    }
}

/*
For part 2, every prize is actually 10000000000000 further along both X and Y, and there is no
limit on presses.
*/

const PRIZE_CORRECTION: i64 = 10_000_000_000_000;

impl Solution<PartTwo> for Day13 {
    type Input = Arcade;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .filter_map(|machine| {
                Machine {
                    prize: (
                        machine.prize.0 + PRIZE_CORRECTION,
                        machine.prize.1 + PRIZE_CORRECTION,
                    ),
                    ..*machine
                }
                .tokens(None)
            })
            .checked_sum()
            .expect("token total should not overflow"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Arcade::parse(EXAMPLE_INPUT)?;
        let result = <Day13 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 480);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Arcade::parse(EXAMPLE_INPUT)?;
        let result = <Day13 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 875_318_608_908);
        Ok(())
    }

    #[test]
    fn first_machine_presses() -> DynamicResult<()> {
        let parsed = Arcade::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.0[0].presses(), Some((80, 40)));
        assert_eq!(parsed.0[1].presses(), None);
        Ok(())
    }

    #[test]
    fn missing_prize_line_is_rejected() {
        assert!(Arcade::parse("Button A: X+1, Y+2\nButton B: X+3, Y+4\n").is_err());
    }

    #[test]
    fn press_limit_applies_to_part_one_only() -> DynamicResult<()> {
        let parsed = Arcade::parse(
            "Button A: X+1, Y+0\nButton B: X+0, Y+1\nPrize: X=101, Y=5\n\n\
             Button A: X+1, Y+0\nButton B: X+0, Y+1\nPrize: X=100, Y=5\n",
        )?;
        assert_eq!(parsed.0[0].tokens(Some(100)), None);
        assert_eq!(parsed.0[0].tokens(None), Some(308));
        assert_eq!(parsed.0[1].tokens(Some(100)), Some(305));
        assert_eq!(<Day13 as Solution<PartOne>>::solve(&parsed)?, 305);
        Ok(())
    }

    #[test]
    fn parallel_buttons_are_unwinnable() -> DynamicResult<()> {
        let parsed = Arcade::parse("Button A: X+1, Y+1\nButton B: X+2, Y+2\nPrize: X=4, Y=4\n")?;
        assert_eq!(parsed.0[0].presses(), None);
        assert_eq!(<Day13 as Solution<PartOne>>::solve(&parsed)?, 0);
        Ok(())
    }
}
