//! Driving a day's solution from raw input to reported answers.
//!
//! The usual entry point is the [`#[solution_runner]`][solution_runner] attribute, which
//! implements [`SolutionRunner`] by picking the right `solve_*` function below:
//!
//! ```
//! use advent_framework::runner::{OutputHandler, SolutionRunner, solution_runner};
//! use advent_framework::{DynamicResult, PartKind, PartOne, Solution};
//! # use std::fmt::Display;
//! # use std::time::Duration;
//!
//! struct Words;
//!
//! impl Solution<PartOne> for Words {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.split_whitespace().count())
//!     }
//! }
//!
//! #[solution_runner(name = "Word Count", part_one = Words)]
//! struct WordsRunner;
//!
//! # #[derive(Default)]
//! # struct Collect(Vec<String>);
//! # impl OutputHandler for Collect {
//! #     fn solution_name(&mut self, _name: &str) {}
//! #     fn parse_start(&mut self) {}
//! #     fn parse_end(&mut self, _duration_opt: Option<Duration>) {}
//! #     fn part_start(&mut self, _part: PartKind) {}
//! #     fn part_output(&mut self, _part: PartKind, output: &dyn Display, _d: Option<Duration>) {
//! #         self.0.push(output.to_string());
//! #     }
//! # }
//! let mut handler = Collect::default();
//! WordsRunner::run("the quick brown fox", &mut handler, false).unwrap();
//! assert_eq!(handler.0, vec!["4"]);
//! ```

use std::fmt::Display;
use std::time::{Duration, Instant};

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

pub use advent_framework_macros::solution_runner;

/// Receives the events of running a solution, to present answers and timings.
pub trait OutputHandler {
    /// The solution is starting; `name` is its display title.
    fn solution_name(&mut self, name: &str);

    /// Parsing of the input is starting.
    fn parse_start(&mut self);

    /// Parsing finished, with its duration when timing was requested.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// A part is starting.
    fn part_start(&mut self, part: PartKind);

    /// A part produced its answer, with its duration when timing was requested.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Call `f`, measuring how long it takes only when `timed` is set.
fn measured<T>(timed: bool, f: impl FnOnce() -> T) -> (T, Option<Duration>) {
    if timed {
        let start = Instant::now();
        let result = f();
        (result, Some(start.elapsed()))
    } else {
        (f(), None)
    }
}

/// Solve one part and report it.
///
/// # Errors
///
/// The solution's error is propagated.
fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    handler.part_start(part);
    tracing::debug!(%part, "solving");
    let (result, duration_opt) = measured(timed, || S::solve(input));
    let output = result.inspect_err(|error| tracing::debug!(%part, %error, "part failed"))?;
    tracing::debug!(%part, %output, ?duration_opt, "solved");
    handler.part_output(part, &output, duration_opt);
    Ok(())
}

/// Parse the input into `D` and report it.
///
/// # Errors
///
/// The parse error is propagated.
fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    handler.parse_start();
    tracing::debug!(input_len = input.len(), "parsing input");
    let (result, duration_opt) = measured(timed, || D::parse(input));
    let parsed = result?;
    tracing::debug!(?duration_opt, "parsed input");
    handler.parse_end(duration_opt);
    Ok(parsed)
}

/// Run a part-one-only solution on the raw input.
///
/// # Errors
///
/// The solution's error is propagated.
pub fn solve_half_solution<S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
{
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)
}

/// Run both parts on the raw input.
///
/// # Errors
///
/// The first failing part's error is propagated; part two does not run if part one fails.
pub fn solve_full_solution<S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)?;
    run_part::<S2, PartTwo>(input, handler, timed)
}

/// Parse the input once, then run part one on it.
///
/// # Errors
///
/// Parse and solution errors are propagated.
pub fn solve_parsed_half_solution<D, S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)
}

/// Parse the input once, then run both parts on it.
///
/// # Errors
///
/// Parse and solution errors are propagated; part two does not run if part one fails.
pub fn solve_parsed_full_solution<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A runnable day, usually implemented through [`solution_runner`].
pub trait SolutionRunner {
    /// Run the day's solution on `input`, reporting to `handler`.
    ///
    /// # Errors
    ///
    /// Parse and solution errors are propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Name(String),
        ParseStart,
        ParseEnd(bool),
        PartStart(PartKind),
        PartOutput(PartKind, String, bool),
    }

    #[derive(Default)]
    struct Recorder(Vec<Event>);

    impl OutputHandler for Recorder {
        fn solution_name(&mut self, name: &str) {
            self.0.push(Event::Name(name.to_owned()));
        }

        fn parse_start(&mut self) {
            self.0.push(Event::ParseStart);
        }

        fn parse_end(&mut self, duration_opt: Option<Duration>) {
            self.0.push(Event::ParseEnd(duration_opt.is_some()));
        }

        fn part_start(&mut self, part: PartKind) {
            self.0.push(Event::PartStart(part));
        }

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            duration_opt: Option<Duration>,
        ) {
            self.0
                .push(Event::PartOutput(part, output.to_string(), duration_opt.is_some()));
        }
    }

    struct Numbers(Vec<i64>);

    impl ParseData for Numbers {
        fn parse(input: &str) -> DynamicResult<Self> {
            let numbers = input
                .split(',')
                .map(|value| value.trim().parse())
                .collect::<Result<_, _>>()?;
            Ok(Self(numbers))
        }
    }

    struct Sums;

    impl Solution<PartOne> for Sums {
        type Input = Numbers;
        type Output = i64;

        fn solve(input: &Numbers) -> DynamicResult<i64> {
            Ok(input.0.iter().sum())
        }
    }

    impl Solution<PartTwo> for Sums {
        type Input = Numbers;
        type Output = String;

        fn solve(input: &Numbers) -> DynamicResult<String> {
            if input.0.is_empty() {
                return Err("no numbers".into());
            }
            Ok(format!("{} numbers", input.0.len()))
        }
    }

    #[test]
    fn parsed_full_solution_reports_events_in_order() -> DynamicResult<()> {
        let mut recorder = Recorder::default();
        solve_parsed_full_solution::<Numbers, Sums, Sums>("Sums", "1, 2, 3", &mut recorder, true)?;
        assert_eq!(
            recorder.0,
            vec![
                Event::Name("Sums".to_owned()),
                Event::ParseStart,
                Event::ParseEnd(true),
                Event::PartStart(PartKind::One),
                Event::PartOutput(PartKind::One, "6".to_owned(), true),
                Event::PartStart(PartKind::Two),
                Event::PartOutput(PartKind::Two, "3 numbers".to_owned(), true),
            ]
        );
        Ok(())
    }

    #[test]
    fn untimed_run_reports_no_durations() -> DynamicResult<()> {
        let mut recorder = Recorder::default();
        solve_parsed_half_solution::<Numbers, Sums>("Sums", "4,5", &mut recorder, false)?;
        assert_eq!(
            recorder.0.last(),
            Some(&Event::PartOutput(PartKind::One, "9".to_owned(), false))
        );
        Ok(())
    }

    #[test]
    fn parse_failure_stops_before_parts() {
        let mut recorder = Recorder::default();
        let result =
            solve_parsed_full_solution::<Numbers, Sums, Sums>("Sums", "1,x", &mut recorder, false);
        assert!(result.is_err());
        assert_eq!(
            recorder.0,
            vec![Event::Name("Sums".to_owned()), Event::ParseStart]
        );
    }
}
