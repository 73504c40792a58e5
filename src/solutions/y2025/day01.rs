use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use thiserror::Error;

#[solution_runner(
    name = "2025 Day 1: Secret Entrance",
    parsed = Rotations,
    part_one = Day01,
    part_two = Day01
)]
impl super::AdventOfCode2025<1> {}

/*
Input is a sequence of rotations of a safe's dial, one per line, like `L68` or `R48`: a direction
(left toward lower numbers, right toward higher) then a count of clicks.

The dial shows the numbers 0 through 99 in a circle and starts pointing at 50.
*/

const DIAL_SIZE: u32 = 100;
const DIAL_START: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rotation {
    Left(u32),
    Right(u32),
}

struct Rotations(Vec<Rotation>);

#[derive(Error, Debug)]
#[error("expected a rotation starting with 'L' or 'R', like 'L68'")]
struct MalformedRotation;

impl ParseData for Rotations {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rotations = parse_input_lines(input, |_, line| {
            let line = line.trim();
            let rotation = if let Some(clicks) = line.strip_prefix('L') {
                Rotation::Left(parse_with_context(clicks)?)
            } else if let Some(clicks) = line.strip_prefix('R') {
                Rotation::Right(parse_with_context(clicks)?)
            } else {
                return Err(MalformedRotation.into());
            };
            Ok(rotation)
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(rotations))
    }
}

impl Rotation {
    /// Where the dial points after the rotation, and how many clicks on the way pointed it at 0.
    fn apply(self, position: u32) -> (u32, u32) {
        match self {
            Self::Right(clicks) => (
                (position + clicks) % DIAL_SIZE,
                (position + clicks) / DIAL_SIZE,
            ),
            Self::Left(clicks) => {
                // distance to 0 going left, where a dial already at 0 needs a full turn
                let to_zero = (DIAL_SIZE - position) % DIAL_SIZE;
                (
                    (position + DIAL_SIZE - clicks % DIAL_SIZE) % DIAL_SIZE,
                    (to_zero + clicks) / DIAL_SIZE,
                )
            }
        }
    }
}

/*
For part 1, the password is the number of times the dial is left pointing at 0 after a rotation.
*/

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = Rotations;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut position = DIAL_START;
        let mut count = 0;
        for rotation in &input.0 {
            (position, _) = rotation.apply(position);
            if position == 0 {
                count += 1;
            }
        }
        Ok(count)
    }
}

/*
For part 2, count every click that leaves the dial pointing at 0, whether during a rotation or at
its end.
*/

impl Solution<PartTwo> for Day01 {
    type Input = Rotations;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut position = DIAL_START;
        let mut count = 0;
        for rotation in &input.0 {
            let (next, zeroes) = rotation.apply(position);
            position = next;
            count += zeroes;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"L68
L30
R48
L5
R60
L55
L1
L99
R14
L82
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Rotations::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Rotations::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 6);
        Ok(())
    }

    #[test]
    fn long_rotations_pass_zero_repeatedly() {
        assert_eq!(Rotation::Right(1000).apply(50), (50, 10));
        assert_eq!(Rotation::Left(1000).apply(50), (50, 10));
        assert_eq!(Rotation::Left(100).apply(0), (0, 1));
        assert_eq!(Rotation::Left(5).apply(0), (95, 0));
    }

    #[test]
    fn rotation_needs_a_direction() {
        assert!(Rotations::parse("L5\nX5\n").is_err());
    }
}
