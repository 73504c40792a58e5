use advent_framework::parsing::InputScanner;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::DMatrix;
use thiserror::Error;

use crate::grid::{Coord, Direction, find_all};

#[solution_runner(
    name = "2024 Day 15: Warehouse Woes",
    parsed = Warehouse,
    part_one = Day15,
    part_two = Day15
)]
impl super::AdventOfCode2024<15> {}

/*
Input is a warehouse map, a blank line, then the robot's moves as arrows spread over any number of
lines. On the map `#` is a wall, `O` a box, `@` the robot and `.` empty floor.

The robot pushes any boxes in its way. A move that would push a box into a wall does nothing.

A box's GPS coordinate is 100 times its distance from the top edge plus its distance from the left
edge.
*/

struct Warehouse {
    map: DMatrix<char>,
    moves: Vec<Direction>,
}

#[derive(Error, Debug)]
enum ParseWarehouseError {
    #[error("unexpected map character '{0}'")]
    UnexpectedCell(char),

    #[error("unexpected move '{0}'")]
    UnexpectedMove(char),

    #[error("expected exactly one robot, found {0}")]
    RobotCount(usize),
}

impl ParseData for Warehouse {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);
        scanner.skip_empty();
        let map = scanner.collect_grid(|c| match c {
            '#' | 'O' | '@' | '.' => Ok(c),
            other => Err(ParseWarehouseError::UnexpectedCell(other).into()),
        })?;
        let robots = find_all(&map, &'@').count();
        if robots != 1 {
            return Err(ParseWarehouseError::RobotCount(robots).into());
        }

        scanner.skip_empty();
        let moves = scanner
            .collect_sequence(|_, line| {
                line.chars()
                    .map(|c| {
                        Direction::from_arrow(c)
                            .ok_or_else(|| ParseWarehouseError::UnexpectedMove(c).into())
                    })
                    .collect::<DynamicResult<Vec<_>>>()
            })?
            .into_iter()
            .flatten()
            .collect();

        Ok(Self { map, moves })
    }
}

/// Run the robot through its moves on `map`, then sum the GPS coordinates of cells showing
/// `box_mark`.
fn simulate(mut map: DMatrix<char>, moves: &[Direction], box_mark: char) -> usize {
    let shape = map.shape();
    let mut robot = find_all(&map, &'@')
        .next()
        .expect("warehouse should have a robot");

    for &direction in moves {
        // cells to shift, in the order they were reached from the robot
        let mut pushed = vec![robot];
        let mut index = 0;
        let mut blocked = false;
        while let Some(&cell) = pushed.get(index) {
            index += 1;
            let Some(next) = cell.step_within(direction, shape) else {
                blocked = true;
                break;
            };
            let mut reach = |coord: Coord| {
                if !pushed.contains(&coord) {
                    pushed.push(coord);
                }
            };
            match map[next.index()] {
                '#' => {
                    blocked = true;
                    break;
                }
                'O' => reach(next),
                '[' | ']' if direction.is_horizontal() => reach(next),
                '[' => {
                    reach(next);
                    reach(Coord::new(next.row, next.col + 1));
                }
                ']' => {
                    reach(next);
                    reach(Coord::new(next.row, next.col - 1));
                }
                _ => {}
            }
        }
        if blocked {
            continue;
        }

        for &cell in pushed.iter().rev() {
            let next = cell
                .step_within(direction, shape)
                .expect("pushed cell should stay on the map");
            map[next.index()] = map[cell.index()];
            map[cell.index()] = '.';
        }
        robot = robot
            .step_within(direction, shape)
            .expect("robot moved within the map");
    }

    tracing::trace!(robot = ?robot, "robot finished its moves");
    find_all(&map, &box_mark)
        .map(|coord| 100 * coord.row + coord.col)
        .sum()
}

/*
For part 1, sum the GPS coordinates of all boxes after the robot finishes moving.
*/

struct Day15;

impl Solution<PartOne> for Day15 {
    type Input = Warehouse;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(simulate(input.map.clone(), &input.moves, 'O'))
    }
}

/*
For part 2, everything except the robot is twice as wide. Walls become `##`, boxes `[]` and floor
`..`, while the robot becomes `@.`. Wide boxes pushed up or down can push two boxes at once, and a
push happens only if every box involved can move. GPS coordinates use the box's left edge.
*/

fn widen(map: &DMatrix<char>) -> DMatrix<char> {
    DMatrix::from_fn(map.nrows(), map.ncols() * 2, |row, col| {
        let left = col % 2 == 0;
        match map[(row, col / 2)] {
            '#' => '#',
            'O' if left => '[',
            'O' => ']',
            '@' if left => '@',
            _ => '.',
        }
    })
}

impl Solution<PartTwo> for Day15 {
    type Input = Warehouse;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(simulate(widen(&input.map), &input.moves, '['))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_EXAMPLE: &str = r"########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

    const WIDE_EXAMPLE: &str = r"#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^^<<^^
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Warehouse::parse(SMALL_EXAMPLE)?;
        let result = <Day15 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 2028);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Warehouse::parse(WIDE_EXAMPLE)?;
        let result = <Day15 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 618);
        Ok(())
    }

    #[test]
    fn moves_may_span_lines() -> DynamicResult<()> {
        let parsed = Warehouse::parse("####\n#@.#\n####\n\n<>\n>\n")?;
        assert_eq!(
            parsed.moves,
            vec![Direction::West, Direction::East, Direction::East]
        );
        Ok(())
    }

    #[test]
    fn widening_doubles_columns() -> DynamicResult<()> {
        let parsed = Warehouse::parse("#O@.\n")?;
        let wide = widen(&parsed.map);
        let row: String = wide.row(0).iter().collect();
        assert_eq!(row, "##[]@...");
        Ok(())
    }
}
