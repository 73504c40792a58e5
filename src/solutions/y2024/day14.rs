use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::DMatrix;
use regex::Regex;
use thiserror::Error;

use crate::checked_product::CheckedProduct;
use crate::grid::render;

#[solution_runner(
    name = "2024 Day 14: Restroom Redoubt",
    parsed = Robots,
    part_one = Day14,
    part_two = Day14
)]
impl super::AdventOfCode2024<14> {}

/*
Input is one robot per line, its position and velocity in tiles per second, like
`p=0,4 v=3,-3`. X grows to the right and Y grows down.

The bathroom is 101 tiles wide and 103 tall. Robots wrap around the edges, and several robots may
share a tile.
*/

const SPACE: Space = Space {
    width: 101,
    height: 103,
};

#[derive(Debug, Clone, Copy)]
struct Space {
    width: i64,
    height: i64,
}

#[derive(Debug, Clone, Copy)]
struct Robot {
    position: (i64, i64),
    velocity: (i64, i64),
}

struct Robots(Vec<Robot>);

#[derive(Error, Debug)]
#[error("expected a robot like 'p=0,4 v=3,-3'")]
struct MalformedRobot;

#[derive(Error, Debug)]
#[error("robots never arrange into a picture")]
struct NoPicture;

impl ParseData for Robots {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let pattern =
            Regex::new(r"^p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)$").expect("pattern should be valid");
        let robots = parse_input_lines(input, |_, line| {
            let captures = pattern.captures(line.trim()).ok_or(MalformedRobot)?;
            let value = |index: usize| parse_with_context::<i64>(&captures[index]);
            Ok(Robot {
                position: (value(1)?, value(2)?),
                velocity: (value(3)?, value(4)?),
            })
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(robots))
    }
}

impl Robot {
    fn position_after(&self, seconds: i64, space: Space) -> (i64, i64) {
        (
            (self.position.0 + self.velocity.0 * seconds).rem_euclid(space.width),
            (self.position.1 + self.velocity.1 * seconds).rem_euclid(space.height),
        )
    }
}

impl Robots {
    fn occupancy(&self, seconds: i64, space: Space) -> DMatrix<u32> {
        let mut counts = DMatrix::zeros(space.height as usize, space.width as usize);
        for robot in &self.0 {
            let (x, y) = robot.position_after(seconds, space);
            counts[(y as usize, x as usize)] += 1;
        }
        counts
    }

    /// Multiply the robot counts of the four quadrants after `seconds`. Robots exactly on the
    /// middle row or column belong to no quadrant.
    fn safety_factor(&self, seconds: i64, space: Space) -> u64 {
        let (mid_x, mid_y) = (space.width / 2, space.height / 2);
        let mut quadrants = [0u64; 4];
        for robot in &self.0 {
            let (x, y) = robot.position_after(seconds, space);
            if x == mid_x || y == mid_y {
                continue;
            }
            quadrants[usize::from(x > mid_x) + 2 * usize::from(y > mid_y)] += 1;
        }
        quadrants
            .into_iter()
            .checked_product()
            .expect("safety factor should not overflow")
    }

    /// The first second at which the robots draw a picture, recognized by the top of the tree: rows
    /// of 1, 3, 5, 7 and 9 tiles each holding exactly one robot, centered on each other.
    fn first_picture(&self, space: Space) -> DynamicResult<i64> {
        let width = space.width;
        let treetop = Regex::new(&format!(
            "(?s)1.{{{}}}1{{3}}.{{{}}}1{{5}}.{{{}}}1{{7}}.{{{}}}1{{9}}",
            width - 1,
            width - 3,
            width - 5,
            width - 7
        ))?;
        // positions repeat after width * height seconds
        for seconds in 0..space.width * space.height {
            let occupancy = self.occupancy(seconds, space);
            let picture = render(&occupancy, |_, &count| match count {
                0 => '.',
                count => char::from_digit(count.min(9), 10).unwrap_or('9'),
            });
            if treetop.is_match(&picture) {
                tracing::debug!(seconds, "picture found:\n{picture}");
                return Ok(seconds);
            }
        }
        Err(NoPicture.into())
    }
}

/*
For part 1, predict where the robots are after 100 seconds, and compute the safety factor.
*/

struct Day14;

impl Solution<PartOne> for Day14 {
    type Input = Robots;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.safety_factor(100, SPACE))
    }
}

/*
For part 2, most robots eventually arrange themselves into a picture of a Christmas tree. Find the
fewest seconds until that happens.
*/

impl Solution<PartTwo> for Day14 {
    type Input = Robots;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input.first_picture(SPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_SPACE: Space = Space {
        width: 11,
        height: 7,
    };

    const EXAMPLE_INPUT: &str = r"p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Robots::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.safety_factor(100, EXAMPLE_SPACE), 12);
        Ok(())
    }

    #[test]
    fn part_two_finds_the_treetop() {
        // a treetop centered on column 4 at t = 5, drifting right one tile per second
        let robots = Robots(
            (0..5)
                .flat_map(|row: i64| (4 - row..=4 + row).map(move |col| (col, row)))
                .map(|(col, row)| Robot {
                    position: ((col - 5).rem_euclid(11), row),
                    velocity: (1, 0),
                })
                .collect(),
        );
        assert_eq!(robots.0.len(), 25);
        assert_eq!(robots.first_picture(EXAMPLE_SPACE).ok(), Some(5));
    }

    #[test]
    fn robots_wrap_around() {
        let robot = Robot {
            position: (2, 4),
            velocity: (2, -3),
        };
        assert_eq!(robot.position_after(5, EXAMPLE_SPACE), (1, 3));
    }
}
