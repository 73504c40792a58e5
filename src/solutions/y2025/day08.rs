use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point3;
use petgraph::unionfind::UnionFind;
use thiserror::Error;

use crate::checked_product::CheckedProduct;

#[solution_runner(
    name = "2025 Day 8: Playground",
    parsed = JunctionBoxes,
    part_one = Day08,
    part_two = Day08
)]
impl super::AdventOfCode2025<8> {}

/*
Input is the position of each junction box in 3D space, one `X,Y,Z` per line.

Boxes are connected by stringing lights between them, always choosing the two boxes closest
together (in straight line distance) that are not yet directly connected. Connected boxes form a
circuit, and a box on its own is a circuit of one.
*/

const CONNECTIONS: usize = 1000;

struct JunctionBoxes {
    positions: Vec<Point3<i64>>,
    /// Every pair of boxes by index, closest first.
    pairs: Vec<(usize, usize)>,
}

#[derive(Error, Debug)]
#[error("expected a position like '162,817,812'")]
struct MalformedPosition;

#[derive(Error, Debug)]
#[error("fewer than three circuits remain")]
struct TooFewCircuits;

impl ParseData for JunctionBoxes {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let positions: Vec<Point3<i64>> = parse_input_lines(input, |_, line| {
            let coordinates = line
                .trim()
                .split(',')
                .map(parse_with_context::<i64>)
                .collect::<Result<Vec<_>, _>>()?;
            let [x, y, z] = coordinates[..] else {
                return Err(MalformedPosition.into());
            };
            Ok(Point3::new(x, y, z))
        })
        .collect::<Result<_, _>>()?;

        let distance = |(a, b): (usize, usize)| {
            let offset = positions[b] - positions[a];
            offset.dot(&offset)
        };
        let mut pairs: Vec<(usize, usize)> = (0..positions.len())
            .flat_map(|a| (a + 1..positions.len()).map(move |b| (a, b)))
            .collect();
        pairs.sort_by_cached_key(|&pair| distance(pair));

        Ok(Self { positions, pairs })
    }
}

impl JunctionBoxes {
    /// Circuit sizes, largest first, after making the `connections` shortest connections.
    fn circuit_sizes(&self, connections: usize) -> Vec<usize> {
        let mut circuits = UnionFind::<usize>::new(self.positions.len());
        for &(a, b) in self.pairs.iter().take(connections) {
            circuits.union(a, b);
        }

        let mut sizes = vec![0; self.positions.len()];
        for label in circuits.into_labeling() {
            sizes[label] += 1;
        }
        sizes.retain(|&size| size > 0);
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    /// The pair whose connection first joins every box into one circuit.
    fn final_connection(&self) -> Option<(usize, usize)> {
        let mut circuits = UnionFind::<usize>::new(self.positions.len());
        let mut remaining = self.positions.len();
        for &(a, b) in &self.pairs {
            if circuits.union(a, b) {
                remaining -= 1;
                if remaining == 1 {
                    return Some((a, b));
                }
            }
        }
        None
    }
}

/*
For part 1, make the 1000 shortest connections. Multiply the sizes of the three largest circuits.
*/

impl JunctionBoxes {
    fn largest_circuits_product(&self, connections: usize) -> DynamicResult<usize> {
        let sizes = self.circuit_sizes(connections);
        if sizes.len() < 3 {
            return Err(TooFewCircuits.into());
        }
        Ok(sizes
            .into_iter()
            .take(3)
            .checked_product()
            .expect("circuit size product should not overflow"))
    }
}

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = JunctionBoxes;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input.largest_circuits_product(CONNECTIONS)
    }
}

/*
For part 2, keep connecting until every box is in one circuit. Multiply the X coordinates of the
last two boxes connected.
*/

impl Solution<PartTwo> for Day08 {
    type Input = JunctionBoxes;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let (a, b) = input.final_connection().ok_or(TooFewCircuits)?;
        tracing::debug!(first = a, second = b, "final connection");
        Ok(input.positions[a].x * input.positions[b].x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.largest_circuits_product(10)?, 40);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 25_272);
        Ok(())
    }

    #[test]
    fn redundant_connections_still_count() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.circuit_sizes(10)[..4], [5, 4, 2, 2]);
        assert_eq!(parsed.circuit_sizes(10).len(), 11);
        Ok(())
    }

    #[test]
    fn single_box_has_no_final_connection() -> DynamicResult<()> {
        let parsed = JunctionBoxes::parse("1,2,3\n")?;
        assert_eq!(parsed.final_connection(), None);
        Ok(())
    }
}
