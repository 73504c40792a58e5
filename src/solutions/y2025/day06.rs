use advent_framework::parsing::parse_with_context;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

use crate::checked_product::CheckedProduct;

#[solution_runner(
    name = "2025 Day 6: Trash Compactor",
    parsed = Worksheet,
    part_one = Day06,
    part_two = Day06
)]
impl super::AdventOfCode2025<6> {}

/*
Input is a math worksheet of problems arranged side by side. Each problem is a block of columns
holding numbers stacked vertically, with its operation (`+` or `*`) on the bottom line. Problems are
separated by a column of spaces only.

Digits within a problem's columns may be aligned left or right, so spacing matters.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Multiply,
}

#[derive(Debug)]
struct Problem {
    operation: Operation,
    /// The problem's text, one entry per number line, all the width of the problem.
    rows: Vec<Vec<char>>,
}

struct Worksheet(Vec<Problem>);

#[derive(Error, Debug)]
enum ParseWorksheetError {
    #[error("worksheet needs number lines and an operation line")]
    TooShort,

    #[error("expected one operation, '+' or '*', below each problem")]
    MissingOperation,

    #[error("unexpected character '{0}' in the worksheet")]
    UnexpectedCharacter(char),
}

impl ParseData for Worksheet {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let lines: Vec<Vec<char>> = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.chars().collect())
            .collect();
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);
        let cell = |row: usize, col: usize| lines[row].get(col).copied().unwrap_or(' ');

        let Some(operation_row) = lines.len().checked_sub(1).filter(|&row| row > 0) else {
            return Err(ParseWorksheetError::TooShort.into());
        };
        let is_separator = |col: usize| (0..lines.len()).all(|row| cell(row, col) == ' ');

        let mut problems = Vec::new();
        let mut start = 0;
        while start < width {
            if is_separator(start) {
                start += 1;
                continue;
            }
            let end = (start..width).find(|&col| is_separator(col)).unwrap_or(width);

            let mut operations = (start..end).map(|col| cell(operation_row, col));
            let operation = match operations.find(|&c| c != ' ') {
                Some('+') => Operation::Add,
                Some('*') => Operation::Multiply,
                Some(other) => return Err(ParseWorksheetError::UnexpectedCharacter(other).into()),
                None => return Err(ParseWorksheetError::MissingOperation.into()),
            };
            if operations.any(|c| c != ' ') {
                return Err(ParseWorksheetError::MissingOperation.into());
            }

            let rows: Vec<Vec<char>> = (0..operation_row)
                .map(|row| (start..end).map(|col| cell(row, col)).collect())
                .collect();
            if let Some(&bad) = rows
                .iter()
                .flatten()
                .find(|c| !c.is_ascii_digit() && **c != ' ')
            {
                return Err(ParseWorksheetError::UnexpectedCharacter(bad).into());
            }
            problems.push(Problem { operation, rows });
            start = end;
        }
        Ok(Self(problems))
    }
}

impl Operation {
    fn apply(self, numbers: Vec<u64>) -> u64 {
        match self {
            Self::Add => numbers
                .into_iter()
                .checked_sum()
                .expect("problem sum should not overflow"),
            Self::Multiply => numbers
                .into_iter()
                .checked_product()
                .expect("problem product should not overflow"),
        }
    }
}

fn parse_number(digits: impl Iterator<Item = char>) -> DynamicResult<Option<u64>> {
    let digits: String = digits.filter(|c| *c != ' ').collect();
    if digits.is_empty() {
        return Ok(None);
    }
    Ok(Some(parse_with_context(&digits)?))
}

impl Problem {
    /// Numbers written across, one per line.
    fn row_numbers(&self) -> DynamicResult<Vec<u64>> {
        let mut numbers = Vec::new();
        for row in &self.rows {
            numbers.extend(parse_number(row.iter().copied())?);
        }
        Ok(numbers)
    }

    /// Numbers written down, one per column with the most significant digit on top.
    fn column_numbers(&self) -> DynamicResult<Vec<u64>> {
        let width = self.rows.first().map_or(0, Vec::len);
        let mut numbers = Vec::new();
        for col in (0..width).rev() {
            numbers.extend(parse_number(self.rows.iter().map(|row| row[col]))?);
        }
        Ok(numbers)
    }
}

fn grand_total(
    worksheet: &Worksheet,
    numbers: impl Fn(&Problem) -> DynamicResult<Vec<u64>>,
) -> DynamicResult<u64> {
    let answers = worksheet
        .0
        .iter()
        .map(|problem| -> DynamicResult<u64> { Ok(problem.operation.apply(numbers(problem)?)) })
        .collect::<DynamicResult<Vec<u64>>>()?;
    Ok(answers
        .into_iter()
        .checked_sum()
        .expect("grand total should not overflow"))
}

/*
For part 1, each line of a problem is one number. Sum the answers of all problems.
*/

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = Worksheet;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        grand_total(input, Problem::row_numbers)
    }
}

/*
For part 2, the worksheet is read right to left, one column at a time. Each column of a problem is
one number, its digits read top to bottom.
*/

impl Solution<PartTwo> for Day06 {
    type Input = Worksheet;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        grand_total(input, Problem::column_numbers)
    }
}
