use std::collections::HashMap;

use advent_framework::parsing::parse_input_lines;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

#[solution_runner(
    name = "2024 Day 21: Keypad Conundrum",
    parsed = DoorCodes,
    part_one = Day21,
    part_two = Day21
)]
impl super::AdventOfCode2024<21> {}

/*
Input is one door code per line, like `029A`, to be typed on a numeric keypad:

    7 8 9
    4 5 6
    1 2 3
      0 A

The numeric keypad is worked by a robot, directed from a directional keypad:

      ^ A
    < v >

That directional keypad is in turn worked by another robot, and so on, until a person presses the
last directional keypad. Every robot arm starts on `A`, and no arm may ever aim at a keypad's gap.

A code's complexity is the length of the shortest sequence the person must press, times the numeric
part of the code with leading zeroes dropped.
*/

struct Keypad {
    rows: [&'static str; 4],
}

const NUMERIC: Keypad = Keypad {
    rows: ["789", "456", "123", " 0A"],
};

const DIRECTIONAL: Keypad = Keypad {
    rows: [" ^A", "<v>", "", ""],
};

#[derive(Error, Debug)]
enum KeypadError {
    #[error("'{0}' is not a key on the keypad")]
    NoSuchKey(char),

    #[error("code has no numeric part")]
    NoNumber,
}

impl Keypad {
    fn find(&self, key: char) -> Result<(usize, usize), KeypadError> {
        self.rows
            .iter()
            .enumerate()
            .find_map(|(row, keys)| keys.find(key).map(|col| (row, col)))
            .ok_or(KeypadError::NoSuchKey(key))
    }

    /// The shortest ways to move an arm from `from` to `to` and press it: all horizontal moves then
    /// all vertical, or the other way round. Mixing the two is never shorter further up the chain.
    fn presses(&self, from: char, to: char) -> Result<Vec<String>, KeypadError> {
        let (from_row, from_col) = self.find(from)?;
        let (to_row, to_col) = self.find(to)?;
        let gap = self.find(' ')?;

        let vertical_key = if to_row > from_row { "v" } else { "^" };
        let horizontal_key = if to_col > from_col { ">" } else { "<" };
        let vertical = vertical_key.repeat(from_row.abs_diff(to_row));
        let horizontal = horizontal_key.repeat(from_col.abs_diff(to_col));

        let mut options = Vec::with_capacity(2);
        if gap != (from_row, to_col) {
            options.push(format!("{horizontal}{vertical}A"));
        }
        if gap != (to_row, from_col) {
            let option = format!("{vertical}{horizontal}A");
            if !options.contains(&option) {
                options.push(option);
            }
        }
        Ok(options)
    }
}

/// Presses counted through a chain of directional keypads, memoized by key pair and depth.
struct PressCounter {
    cache: HashMap<(char, char, usize), u64>,
}

impl PressCounter {
    fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Presses the person makes for `sequence` to be pressed on a directional keypad `depth`
    /// robots away. At depth 0 the person presses it directly.
    fn sequence(&mut self, sequence: &str, depth: usize) -> Result<u64, KeypadError> {
        if depth == 0 {
            return Ok(sequence.len() as u64);
        }
        let mut from = 'A';
        let mut total = 0;
        for to in sequence.chars() {
            total += self.step(from, to, depth)?;
            from = to;
        }
        Ok(total)
    }

    fn step(&mut self, from: char, to: char, depth: usize) -> Result<u64, KeypadError> {
        if let Some(&presses) = self.cache.get(&(from, to, depth)) {
            return Ok(presses);
        }
        let mut best = u64::MAX;
        for option in DIRECTIONAL.presses(from, to)? {
            best = best.min(self.sequence(&option, depth - 1)?);
        }
        self.cache.insert((from, to, depth), best);
        Ok(best)
    }

    /// Fewest presses to type `code` on the numeric keypad through `robots` directional keypads.
    fn code(&mut self, code: &str, robots: usize) -> Result<u64, KeypadError> {
        let mut from = 'A';
        let mut total = 0;
        for to in code.chars() {
            let mut best = u64::MAX;
            for option in NUMERIC.presses(from, to)? {
                best = best.min(self.sequence(&option, robots)?);
            }
            total += best;
            from = to;
        }
        Ok(total)
    }
}

struct DoorCodes(Vec<String>);

impl ParseData for DoorCodes {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let codes = parse_input_lines(input, |_, line| {
            let code = line.trim();
            for key in code.chars() {
                NUMERIC.find(key)?;
            }
            Ok(code.to_owned())
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(codes))
    }
}

fn numeric_part(code: &str) -> Result<u64, KeypadError> {
    let digits: String = code.chars().filter(char::is_ascii_digit).collect();
    digits.parse().map_err(|_| KeypadError::NoNumber)
}

fn total_complexity(codes: &DoorCodes, robots: usize) -> DynamicResult<u64> {
    let mut counter = PressCounter::new();
    let complexities = codes
        .0
        .iter()
        .map(|code| -> Result<u64, KeypadError> {
            Ok(counter.code(code, robots)? * numeric_part(code)?)
        })
        .collect::<Result<Vec<u64>, KeypadError>>()?;
    Ok(complexities
        .into_iter()
        .checked_sum()
        .expect("total complexity should not overflow"))
}

/*
For part 1, two robots sit between the person and the numeric keypad. Sum the complexities of the
codes.
*/

struct Day21;

impl Solution<PartOne> for Day21 {
    type Input = DoorCodes;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        total_complexity(input, 2)
    }
}

/*
For part 2, there are 25 robots with directional keypads in the chain.
*/

impl Solution<PartTwo> for Day21 {
    type Input = DoorCodes;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        total_complexity(input, 25)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"029A
980A
179A
456A
379A
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = DoorCodes::parse(EXAMPLE_INPUT)?;
        let result = <Day21 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 126_384);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = DoorCodes::parse(EXAMPLE_INPUT)?;
        let result = <Day21 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 154_115_708_116_294);
        Ok(())
    }

    #[test]
    fn presses_per_layer() -> Result<(), KeypadError> {
        let mut counter = PressCounter::new();
        assert_eq!(counter.code("029A", 0)?, 12);
        assert_eq!(counter.code("029A", 1)?, 28);
        assert_eq!(counter.code("029A", 2)?, 68);
        Ok(())
    }

    #[test]
    fn arms_avoid_the_gap() -> Result<(), KeypadError> {
        assert_eq!(NUMERIC.presses('A', '1')?, vec!["^<<A"]);
        assert_eq!(DIRECTIONAL.presses('<', 'A')?, vec![">>^A"]);
        Ok(())
    }

    #[test]
    fn codes_use_numeric_keys_only() {
        assert!(DoorCodes::parse("02BA\n").is_err());
    }
}
