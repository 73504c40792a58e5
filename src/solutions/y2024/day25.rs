use advent_framework::parsing::InputScanner;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, Solution};
use thiserror::Error;

#[solution_runner(name = "2024 Day 25: Code Chronicle", parsed = Schematics, part_one = Day25)]
impl super::AdventOfCode2024<25> {}

/*
Input is a list of schematics separated by blank lines, each a grid of `#` and `.`. A lock's top
row is filled with `#` and its pins hang down; a key's bottom row is filled and its teeth point up.

Locks and keys are described by the height of each column, not counting the filled row.
*/

type Heights = Vec<usize>;

struct Schematics {
    locks: Vec<Heights>,
    keys: Vec<Heights>,
    /// Room in each column between the filled rows of a lock and a key.
    space: usize,
}

#[derive(Error, Debug)]
enum ParseSchematicError {
    #[error("expected '#' or '.', found '{0}'")]
    UnexpectedCell(char),

    #[error("schematic is neither a lock nor a key")]
    NotLockOrKey,

    #[error("schematics differ in size")]
    SizeMismatch,
}

impl ParseData for Schematics {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut locks = Vec::new();
        let mut keys = Vec::new();
        let mut shape = None;

        let mut scanner = InputScanner::new(input);
        while scanner.skip_empty() {
            let grid = scanner.collect_grid(|c| match c {
                '#' => Ok(true),
                '.' => Ok(false),
                other => Err(ParseSchematicError::UnexpectedCell(other).into()),
            })?;
            if *shape.get_or_insert(grid.shape()) != grid.shape() {
                return Err(ParseSchematicError::SizeMismatch.into());
            }

            let heights: Heights = grid
                .column_iter()
                .map(|column| column.iter().filter(|&&filled| filled).count() - 1)
                .collect();
            let filled = |row: usize| grid.row(row).iter().all(|&cell| cell);
            if filled(0) {
                locks.push(heights);
            } else if filled(grid.nrows() - 1) {
                keys.push(heights);
            } else {
                return Err(ParseSchematicError::NotLockOrKey.into());
            }
        }

        let space = shape.map_or(0, |(rows, _)| rows.saturating_sub(2));
        Ok(Self { locks, keys, space })
    }
}

impl Schematics {
    fn fits(&self, lock: &Heights, key: &Heights) -> bool {
        lock.iter().zip(key).all(|(pin, tooth)| pin + tooth <= self.space)
    }
}

/*
For part 1, count the unique lock and key pairs that fit together without overlapping in any
column.
*/

struct Day25;

impl Solution<PartOne> for Day25 {
    type Input = Schematics;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .locks
            .iter()
            .map(|lock| input.keys.iter().filter(|key| input.fits(lock, key)).count())
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"#####
.####
.####
.####
.#.#.
.#...
.....

#####
##.##
.#.##
...##
...#.
...#.
.....

.....
#....
#....
#...#
#.#.#
#.###
#####

.....
.....
#.#..
###..
###.#
###.#
#####

.....
.....
.....
#....
#.#..
#.#.#
#####
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Schematics::parse(EXAMPLE_INPUT)?;
        let result = <Day25 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3);
        Ok(())
    }

    #[test]
    fn heights_skip_the_filled_row() -> DynamicResult<()> {
        let parsed = Schematics::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.locks, vec![vec![0, 5, 3, 4, 3], vec![1, 2, 0, 5, 3]]);
        assert_eq!(parsed.keys[0], vec![5, 0, 2, 1, 3]);
        assert_eq!(parsed.space, 5);
        Ok(())
    }

    #[test]
    fn schematic_must_be_lock_or_key() {
        assert!(Schematics::parse("#.\n..\n.#\n").is_err());
    }
}
