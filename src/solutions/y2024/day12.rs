use advent_framework::parsing::parse_grid;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use nalgebra::DMatrix;

use crate::grid::{Coord, Direction};

#[solution_runner(
    name = "2024 Day 12: Garden Groups",
    parsed = Garden,
    part_one = Day12,
    part_two = Day12
)]
impl super::AdventOfCode2024<12> {}

/*
Input is a map of garden plots, each letter a plant type. A region is a group of orthogonally
touching plots of the same plant. The same plant may form several separate regions.
*/

struct Garden(DMatrix<char>);

impl ParseData for Garden {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        Ok(Self(parse_grid(input, Ok)?))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Region {
    area: u64,
    perimeter: u64,
    /// A polygon has as many sides as corners.
    corners: u64,
}

impl Garden {
    fn same_plant(&self, position: Coord, offset: (isize, isize)) -> bool {
        position
            .offset_within(offset, self.0.shape())
            .is_some_and(|neighbor| self.0[neighbor.index()] == self.0[position.index()])
    }

    /// Corners of the region touching `position`. Each pair of adjacent directions marks an outer
    /// corner when both neighbors differ, or an inner corner when both match but the diagonal
    /// between them does not.
    fn corners_at(&self, position: Coord) -> u64 {
        Direction::ALL
            .into_iter()
            .filter(|&first| {
                let second = first.turn_right();
                let (a, b) = (first.offset(), second.offset());
                let diagonal = (a.0 + b.0, a.1 + b.1);
                match (self.same_plant(position, a), self.same_plant(position, b)) {
                    (false, false) => true,
                    (true, true) => !self.same_plant(position, diagonal),
                    _ => false,
                }
            })
            .count() as u64
    }

    fn regions(&self) -> Vec<Region> {
        let shape = self.0.shape();
        let mut assigned = self.0.map(|_| false);
        let mut regions = Vec::new();

        for row in 0..shape.0 {
            for col in 0..shape.1 {
                let seed = Coord::new(row, col);
                if assigned[seed.index()] {
                    continue;
                }
                assigned[seed.index()] = true;

                let mut region = Region::default();
                let mut stack = vec![seed];
                while let Some(position) = stack.pop() {
                    region.area += 1;
                    region.corners += self.corners_at(position);
                    for direction in Direction::ALL {
                        if !self.same_plant(position, direction.offset()) {
                            region.perimeter += 1;
                            continue;
                        }
                        let Some(neighbor) = position.step_within(direction, shape) else {
                            continue;
                        };
                        if !assigned[neighbor.index()] {
                            assigned[neighbor.index()] = true;
                            stack.push(neighbor);
                        }
                    }
                }
                regions.push(region);
            }
        }
        regions
    }
}

/*
For part 1, the price of fence for a region is its area times its perimeter. Find the total price
over all regions.
*/

struct Day12;

impl Solution<PartOne> for Day12 {
    type Input = Garden;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .regions()
            .into_iter()
            .map(|region| region.area * region.perimeter)
            .checked_sum()
            .expect("total price should not overflow"))
    }
}

/*
For part 2, a bulk discount prices each region by its area times its number of sides, where a
straight run of fence counts as one side.
*/

impl Solution<PartTwo> for Day12 {
    type Input = Garden;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .regions()
            .into_iter()
            .map(|region| region.area * region.corners)
            .checked_sum()
            .expect("total price should not overflow"))
    }
}
