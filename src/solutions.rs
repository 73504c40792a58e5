//! Solutions grouped by event year.
//!
//! Each year module collects its days behind a `run_day` function and lists them in `DAYS`.
//! To add a day:
//! 1. Make a `dayNN` submodule of the year module.
//! 2. Implement [`SolutionRunner`][advent_framework::runner::SolutionRunner] for the year's
//!    `AdventOfCodeYYYY<DAY>` with `#[solution_runner]`.
//! 3. Add the day to the year's `DAYS` and its `run_day` match.

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use advent_framework::runner::OutputHandler;
use advent_framework::{DynamicResult, PuzzleId};
use thiserror::Error;

mod y2024;
mod y2025;

/// No solutions exist for a year.
#[derive(Error, Debug)]
#[error("no solutions available for year {0}")]
pub struct YearNotAvailable(u16);

/// A year exists, but not the requested day.
#[derive(Error, Debug)]
#[error("no solution available for {0}")]
pub struct DayNotAvailable(PuzzleId);

/// The days with solutions for `year`, in ascending order.
pub fn available_days(year: u16) -> &'static [u8] {
    match year {
        2024 => y2024::DAYS,
        2025 => y2025::DAYS,
        _ => &[],
    }
}

/// Run the solution for a puzzle.
///
/// # Errors
///
/// [`YearNotAvailable`] or [`DayNotAvailable`] when there is no such solution; otherwise any error
/// from parsing or solving.
pub fn run_puzzle(
    id: PuzzleId,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    let ran = match id.year {
        2024 => y2024::run_day(id.day, input, handler, timed),
        2025 => y2025::run_day(id.day, input, handler, timed),
        year => return Err(YearNotAvailable(year).into()),
    };
    ran.unwrap_or_else(|| Err(DayNotAvailable(id).into()))
}
