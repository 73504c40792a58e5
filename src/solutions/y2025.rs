//! Solutions for the 2025 event, which runs twelve days.
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule to hold the solution implementation.
//! 2. Have the submodule implement [`AdventOfCode2025<DAY>`] for its day as a [`SolutionRunner`].
//! 3. Import the submodule below `IMPORT SUBMODULES HERE`.
//! 4. Add the day to [`DAYS`] and a match case to [`run_day`], below `MATCH SOLUTIONS HERE`.

use advent_framework::DynamicResult;
use advent_framework::runner::{OutputHandler, SolutionRunner};

// --- IMPORT SUBMODULES HERE ---
mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day12;

/// A structure collecting solutions by day.
///
/// In a submodule, implement this as a [`SolutionRunner`] with
/// [`#[solution_runner]`][advent_framework::runner::solution_runner]:
///
/// ```ignore
/// #[solution_runner(name = "2025 Day 1: ...", part_one = Day01)]
/// impl super::AdventOfCode2025<1> {}
/// ```
struct AdventOfCode2025<const DAY: u8>;

/// Days with a solution, in ascending order.
pub const DAYS: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// Run the solution for `day`, or `None` if there is none.
pub fn run_day(
    day: u8,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> Option<DynamicResult<()>> {
    let result = match day {
        // --- MATCH SOLUTIONS HERE ---
        1 => AdventOfCode2025::<1>::run(input, handler, timed),
        2 => AdventOfCode2025::<2>::run(input, handler, timed),
        3 => AdventOfCode2025::<3>::run(input, handler, timed),
        4 => AdventOfCode2025::<4>::run(input, handler, timed),
        5 => AdventOfCode2025::<5>::run(input, handler, timed),
        6 => AdventOfCode2025::<6>::run(input, handler, timed),
        7 => AdventOfCode2025::<7>::run(input, handler, timed),
        8 => AdventOfCode2025::<8>::run(input, handler, timed),
        9 => AdventOfCode2025::<9>::run(input, handler, timed),
        10 => AdventOfCode2025::<10>::run(input, handler, timed),
        11 => AdventOfCode2025::<11>::run(input, handler, timed),
        12 => AdventOfCode2025::<12>::run(input, handler, timed),
        _ => return None,
    };
    Some(result)
}
