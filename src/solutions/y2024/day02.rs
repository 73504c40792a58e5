use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "2024 Day 2: Red-Nosed Reports",
    parsed = Reports,
    part_one = Day02,
    part_two = Day02
)]
impl super::AdventOfCode2024<2> {}

/*
Input is one report per line, each a whitespace separated list of levels.
*/

type Level = i32;

struct Reports(Vec<Vec<Level>>);

impl ParseData for Reports {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let reports = parse_input_lines(input, |_, line| {
            Ok(line
                .split_whitespace()
                .map(parse_with_context)
                .collect::<Result<Vec<Level>, _>>()?)
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(reports))
    }
}

/*
For part 1, count safe reports. A report is safe when its levels are all increasing or all
decreasing, and adjacent levels differ by at least 1 and at most 3.
*/

fn is_safe(levels: &[Level]) -> bool {
    let increasing = levels
        .windows(2)
        .all(|pair| (1..=3).contains(&(pair[1] - pair[0])));
    let decreasing = levels
        .windows(2)
        .all(|pair| (1..=3).contains(&(pair[0] - pair[1])));
    increasing || decreasing
}

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = Reports;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.0.iter().filter(|report| is_safe(report)).count())
    }
}

/*
For part 2, a report also counts as safe if removing any single level from it makes it safe.
*/

fn is_safe_with_dampener(levels: &[Level]) -> bool {
    is_safe(levels)
        || (0..levels.len()).any(|skipped| {
            let remaining: Vec<Level> = levels
                .iter()
                .enumerate()
                .filter(|&(index, _)| index != skipped)
                .map(|(_, &level)| level)
                .collect();
            is_safe(&remaining)
        })
}

impl Solution<PartTwo> for Day02 {
    type Input = Reports;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .filter(|report| is_safe_with_dampener(report))
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Reports::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 2);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Reports::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 4);
        Ok(())
    }

    #[test]
    fn dampener_can_drop_the_first_level() {
        assert!(!is_safe(&[9, 1, 2, 3]));
        assert!(is_safe_with_dampener(&[9, 1, 2, 3]));
    }
}
