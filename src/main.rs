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
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use advent_framework::runner::OutputHandler;
use advent_framework::{PartKind, PuzzleId};
use anyhow::{Context, Error, Result, bail};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

mod checked_product;
mod grid;
mod solutions;

/// Daily puzzle solver for the 2024 and 2025 events.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// The event year (e.g. 2024).
    year: u16,

    /// The day's solution to run (e.g. 1, 2, etc). Runs every available day when omitted.
    day: Option<u8>,

    /// Sets an alternative input file to use over the default input.
    #[arg(short, long, value_name = "FILE", requires = "day")]
    input: Option<PathBuf>,

    /// Measure and print the durations of parsing and solving parts.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Minimum duration (in milliseconds) required to print timing.
    /// 0 = always print.
    #[arg(long, value_name = "NUMBER", default_value_t)]
    min_timing_ms: u64,

    /// Increase log verbosity; repeat for more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Install the log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// The conventional input location for a puzzle.
fn default_input_path(id: PuzzleId) -> PathBuf {
    PathBuf::from("inputs")
        .join(id.year.to_string())
        .join(format!("day{:02}.txt", id.day))
}

/// Read the default input file for a puzzle to a string.
fn get_default_input(id: PuzzleId) -> Result<String> {
    let path = default_input_path(id);

    fs::read_to_string(&path).with_context(|| {
        format!(
            "default input file missing: {}\n\n\
            please create the file or provide the input file argument",
            path.display()
        )
    })
}

/// Read the given input file to a string.
fn get_input(input_file: &Path) -> Result<String> {
    fs::read_to_string(input_file)
        .with_context(|| format!("could not read input file at: {}", input_file.display()))
}

struct CliOutputHandler {
    /// Timings shorter than this are not printed.
    min_duration: Duration,
}

impl CliOutputHandler {
    fn new(min_duration: Duration) -> Self {
        Self { min_duration }
    }

    fn format_duration(duration: Duration) -> String {
        const ONE_SECOND: Duration = Duration::from_secs(1);
        const ONE_MILLISECOND: Duration = Duration::from_millis(1);
        const ONE_MICROSECOND: Duration = Duration::from_micros(1);
        const DECIMAL_PLACES: usize = 3;

        if duration >= ONE_SECOND {
            format!("{:.*} seconds", DECIMAL_PLACES, duration.as_secs_f32())
        } else {
            let nanos = duration.subsec_nanos();
            if duration >= ONE_MILLISECOND {
                format!("{:.*} milliseconds", DECIMAL_PLACES, f64::from(nanos) / 1e6)
            } else if duration >= ONE_MICROSECOND {
                format!("{:.*} microseconds", DECIMAL_PLACES, f64::from(nanos) / 1e3)
            } else {
                format!("{nanos} nanoseconds")
            }
        }
    }

    fn format_optional_duration_above_min(&self, duration: Option<Duration>) -> Option<String> {
        duration
            .filter(|d| *d >= self.min_duration)
            .map(Self::format_duration)
    }
}

impl OutputHandler for CliOutputHandler {
    fn solution_name(&mut self, name: &str) {
        println!("= {name} =");
    }

    fn parse_start(&mut self) {
        // nothing to show until parsing ends
    }

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        if let Some(formatted_duration) = self.format_optional_duration_above_min(duration_opt) {
            println!("Input parsed in {formatted_duration}");
        }
    }

    fn part_start(&mut self, part: PartKind) {
        println!("-- {part} --");
    }

    fn part_output(
        &mut self,
        _part: PartKind,
        output: &dyn Display,
        duration_opt: Option<Duration>,
    ) {
        if let Some(formatted_duration) = self.format_optional_duration_above_min(duration_opt) {
            println!("{output} ({formatted_duration})");
        } else {
            println!("{output}");
        }
    }
}

/// Run one puzzle, converting its boxed error into an [`anyhow::Error`] with context.
fn run_one(id: PuzzleId, input: &str, handler: &mut CliOutputHandler, timed: bool) -> Result<()> {
    tracing::info!(%id, "running solution");
    solutions::run_puzzle(id, input, handler, timed).map_err(|dyn_error| {
        let anyhow_error = Error::from_boxed(dyn_error);
        anyhow_error.context(format!("failed to run solution for {id}"))
    })
}

/// Run every available day of `year` in order, stopping at the first failure.
fn run_year<F>(
    year: u16,
    handler: &mut CliOutputHandler,
    timed: bool,
    mut read_input: F,
) -> Result<()>
where
    F: FnMut(PuzzleId) -> Result<String>,
{
    let days = solutions::available_days(year);
    if days.is_empty() {
        bail!("no solutions available for year {year}");
    }
    for &day in days {
        let id = PuzzleId::new(year, day);
        let input_str = read_input(id)?;
        run_one(id, &input_str, handler, timed)?;
        println!();
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let mut handler = CliOutputHandler::new(Duration::from_millis(args.min_timing_ms));

    if let Some(day) = args.day {
        let id = PuzzleId::new(args.year, day);
        let input_str = args
            .input
            .as_deref()
            .map_or_else(|| get_default_input(id), get_input)?;
        return run_one(id, &input_str, &mut handler, args.timed);
    }

    run_year(args.year, &mut handler, args.timed, get_default_input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_path_pads_day() {
        let path = default_input_path(PuzzleId::new(2024, 3));
        assert_eq!(path, Path::new("inputs").join("2024").join("day03.txt"));
    }

    #[test]
    fn missing_default_input_hints_at_the_fix() {
        let error = get_default_input(PuzzleId::new(1999, 1))
            .expect_err("no input should exist for 1999");
        let message = error.to_string();
        assert!(message.contains("day01.txt"));
        assert!(message.contains("please create the file"));
    }

    #[test]
    fn year_run_stops_at_first_missing_input() {
        let mut handler = CliOutputHandler::new(Duration::ZERO);
        let mut requested = Vec::new();
        let result = run_year(2025, &mut handler, false, |id| {
            requested.push(id.day);
            get_default_input(PuzzleId::new(1999, id.day))
        });
        let error = result.expect_err("missing input should stop the run");
        assert!(error.to_string().contains("please create the file"));
        assert_eq!(requested, vec![1]);
    }

    #[test]
    fn year_run_solves_each_day_in_order() {
        let mut handler = CliOutputHandler::new(Duration::ZERO);
        let mut requested = Vec::new();
        let result = run_year(2025, &mut handler, false, |id| {
            requested.push(id.day);
            match id.day {
                1 => Ok("L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n".to_owned()),
                _ => bail!("stop after day {}", id.day),
            }
        });
        let error = result.expect_err("day 2 has no input");
        assert_eq!(error.to_string(), "stop after day 2");
        assert_eq!(requested, vec![1, 2]);
    }

    #[test]
    fn year_run_rejects_unknown_year() {
        let mut handler = CliOutputHandler::new(Duration::ZERO);
        let result = run_year(1999, &mut handler, false, |_| Ok(String::new()));
        let error = result.expect_err("1999 has no solutions");
        assert_eq!(error.to_string(), "no solutions available for year 1999");
    }

    #[test]
    fn durations_pick_a_readable_unit() {
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_millis(1500)),
            "1.500 seconds"
        );
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_micros(2500)),
            "2.500 milliseconds"
        );
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_nanos(15)),
            "15 nanoseconds"
        );
    }

    #[test]
    fn short_durations_are_filtered() {
        let handler = CliOutputHandler::new(Duration::from_millis(10));
        assert_eq!(
            handler.format_optional_duration_above_min(Some(Duration::from_millis(1))),
            None
        );
        assert!(
            handler
                .format_optional_duration_above_min(Some(Duration::from_millis(20)))
                .is_some()
        );
        assert_eq!(handler.format_optional_duration_above_min(None), None);
    }

    #[test]
    fn cli_requires_day_with_input_file() {
        let result = Cli::try_parse_from(["advent-solutions", "2024", "--input", "x.txt"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["advent-solutions", "2024", "5", "-i", "x.txt", "-vv"])
            .expect("arguments should parse");
        assert_eq!(cli.day, Some(5));
        assert_eq!(cli.verbose, 2);
    }
}
