//! Solutions for the 2024 event.
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule to hold the solution implementation.
//! 2. Have the submodule implement [`AdventOfCode2024<DAY>`] for its day as a [`SolutionRunner`].
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
mod day13;
mod day14;
mod day15;
mod day16;
mod day17;
mod day18;
mod day19;
mod day20;
mod day21;
mod day22;
mod day23;
mod day24;
mod day25;

/// A structure collecting solutions by day.
///
/// In a submodule, implement this as a [`SolutionRunner`] with
/// [`#[solution_runner]`][advent_framework::runner::solution_runner]:
///
/// ```ignore
/// #[solution_runner(name = "2024 Day 1: ...", part_one = Day01)]
/// impl super::AdventOfCode2024<1> {}
/// ```
struct AdventOfCode2024<const DAY: u8>;

/// Days with a solution, in ascending order.
pub const DAYS: &[u8] = &[
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
];

/// Run the solution for `day`, or `None` if there is none.
pub fn run_day(
    day: u8,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> Option<DynamicResult<()>> {
    let result = match day {
        // --- MATCH SOLUTIONS HERE ---
        1 => AdventOfCode2024::<1>::run(input, handler, timed),
        2 => AdventOfCode2024::<2>::run(input, handler, timed),
        3 => AdventOfCode2024::<3>::run(input, handler, timed),
        4 => AdventOfCode2024::<4>::run(input, handler, timed),
        5 => AdventOfCode2024::<5>::run(input, handler, timed),
        6 => AdventOfCode2024::<6>::run(input, handler, timed),
        7 => AdventOfCode2024::<7>::run(input, handler, timed),
        8 => AdventOfCode2024::<8>::run(input, handler, timed),
        9 => AdventOfCode2024::<9>::run(input, handler, timed),
        10 => AdventOfCode2024::<10>::run(input, handler, timed),
        11 => AdventOfCode2024::<11>::run(input, handler, timed),
        12 => AdventOfCode2024::<12>::run(input, handler, timed),
        13 => AdventOfCode2024::<13>::run(input, handler, timed),
        14 => AdventOfCode2024::<14>::run(input, handler, timed),
        15 => AdventOfCode2024::<15>::run(input, handler, timed),
        16 => AdventOfCode2024::<16>::run(input, handler, timed),
        17 => AdventOfCode2024::<17>::run(input, handler, timed),
        18 => AdventOfCode2024::<18>::run(input, handler, timed),
        19 => AdventOfCode2024::<19>::run(input, handler, timed),
        20 => AdventOfCode2024::<20>::run(input, handler, timed),
        21 => AdventOfCode2024::<21>::run(input, handler, timed),
        22 => AdventOfCode2024::<22>::run(input, handler, timed),
        23 => AdventOfCode2024::<23>::run(input, handler, timed),
        24 => AdventOfCode2024::<24>::run(input, handler, timed),
        25 => AdventOfCode2024::<25>::run(input, handler, timed),
        _ => return None,
    };
    Some(result)
}
