//! Traits and utilities shared by daily puzzle solutions.
//!
//! A day's solution is made of up to three pieces:
//!
//! 1. an optional parsed input type implementing [`ParseData`],
//! 2. a type implementing [`Solution<PartOne>`] and optionally [`Solution<PartTwo>`],
//! 3. a [`runner::SolutionRunner`] tying them together, usually generated with
//!    [`#[solution_runner]`][runner::solution_runner].
//!
//! # Examples
//!
//! ## Solving directly on the input string
//!
//! ```
//! use advent_framework::{DynamicResult, PartOne, Solution};
//!
//! struct CountLines;
//!
//! impl Solution<PartOne> for CountLines {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.lines().count())
//!     }
//! }
//!
//! assert_eq!(CountLines::solve("a\nb\nc").unwrap(), 3);
//! ```
//!
//! ## Solving on parsed data shared by both parts
//!
//! ```
//! use advent_framework::parsing::parse_input_lines;
//! use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
//!
//! struct Depths(Vec<u32>);
//!
//! impl ParseData for Depths {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let depths = parse_input_lines(input, |_, line| Ok(line.parse::<u32>()?))
//!             .collect::<Result<_, _>>()?;
//!         Ok(Self(depths))
//!     }
//! }
//!
//! struct Sonar;
//!
//! impl Solution<PartOne> for Sonar {
//!     type Input = Depths;
//!     type Output = u32;
//!
//!     fn solve(input: &Depths) -> DynamicResult<u32> {
//!         Ok(input.0.iter().sum())
//!     }
//! }
//!
//! impl Solution<PartTwo> for Sonar {
//!     type Input = Depths;
//!     type Output = usize;
//!
//!     fn solve(input: &Depths) -> DynamicResult<usize> {
//!         Ok(input.0.windows(2).filter(|pair| pair[1] > pair[0]).count())
//!     }
//! }
//!
//! let depths = Depths::parse("199\n200\n208\n210\n200").unwrap();
//! assert_eq!(<Sonar as Solution<PartOne>>::solve(&depths).unwrap(), 1017);
//! assert_eq!(<Sonar as Solution<PartTwo>>::solve(&depths).unwrap(), 3);
//! ```

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod parsing;
pub mod runner;

mod private {
    /// Seals [`Part`](super::Part) so only the two puzzle parts can exist.
    pub trait Sealed {}
}

/// A boxed error from parsing or solving, whatever its concrete type.
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result carrying a [`DynamicError`].
pub type DynamicResult<T> = Result<T, DynamicError>;

/// Identifies a puzzle by its event year and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    pub year: u16,
    pub day: u8,
}

impl PuzzleId {
    #[must_use]
    pub const fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }
}

impl Display for PuzzleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} day {}", self.year, self.day)
    }
}

/// Which of a day's two questions is being answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// A marker for the part a [`Solution<P>`] answers.
pub trait Part: private::Sealed {
    /// The [`PartKind`] this marker stands for.
    fn kind() -> PartKind;
}

/// Marks a [`Solution`] for the first question of a day.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Marks a [`Solution`] for the second question of a day.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// Solves one [`Part`] of a puzzle.
pub trait Solution<P: Part> {
    /// The input handed to [`Solution::solve`] by reference.
    ///
    /// Set to `str` to receive the raw puzzle input, or to a [`ParseData`] type to share parsing
    /// between both parts.
    type Input: ?Sized;

    /// The answer, printed through its [`Display`] impl.
    type Output: Display;

    /// Solve the part for the given input.
    ///
    /// # Errors
    ///
    /// Invalid input or an unsolvable puzzle state is returned as a [`DynamicError`].
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// Data built by parsing the raw puzzle input.
pub trait ParseData {
    /// Parse the whole puzzle input.
    ///
    /// # Errors
    ///
    /// Malformed input is returned as a [`DynamicError`].
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_id_displays_year_and_day() {
        assert_eq!(PuzzleId::new(2024, 7).to_string(), "2024 day 7");
    }

    #[test]
    fn puzzle_ids_order_by_year_then_day() {
        let mut ids = vec![
            PuzzleId::new(2025, 1),
            PuzzleId::new(2024, 25),
            PuzzleId::new(2024, 3),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                PuzzleId::new(2024, 3),
                PuzzleId::new(2024, 25),
                PuzzleId::new(2025, 1)
            ]
        );
    }

    #[test]
    fn part_kinds_display() {
        assert_eq!(PartOne::kind().to_string(), "Part 1");
        assert_eq!(PartTwo::kind().to_string(), "Part 2");
    }
}
