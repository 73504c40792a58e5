use std::collections::HashSet;

use advent_framework::parsing::parse_grid;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::DMatrix;
use petgraph::algo::dijkstra;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::{EdgeRef, Reversed};
use thiserror::Error;

use crate::grid::{Coord, Direction, find_all};

#[solution_runner(
    name = "2024 Day 16: Reindeer Maze",
    parsed = Maze,
    part_one = Day16,
    part_two = Day16
)]
impl super::AdventOfCode2024<16> {}

/*
Input is a maze of walls `#` and open tiles `.`, with the reindeer's start `S` and the end tile `E`.
The reindeer starts facing east.

Moving forward one tile scores 1 point, and rotating 90 degrees either way scores 1000.
*/

const STEP_COST: u32 = 1;
const TURN_COST: u32 = 1000;

struct Maze {
    walls: DMatrix<bool>,
    start: Coord,
    end: Coord,
}

#[derive(Error, Debug)]
enum MazeError {
    #[error("unexpected maze character '{0}'")]
    UnexpectedCell(char),

    #[error("expected exactly one '{0}' tile")]
    MarkerCount(char),

    #[error("the end tile is unreachable")]
    Unreachable,
}

impl ParseData for Maze {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let tiles = parse_grid(input, |c| match c {
            '#' | '.' | 'S' | 'E' => Ok(c),
            other => Err(MazeError::UnexpectedCell(other).into()),
        })?;
        let single = |marker: char| -> DynamicResult<Coord> {
            let found: Vec<_> = find_all(&tiles, &marker).collect();
            match found.as_slice() {
                [coord] => Ok(*coord),
                _ => Err(MazeError::MarkerCount(marker).into()),
            }
        };
        Ok(Self {
            start: single('S')?,
            end: single('E')?,
            walls: tiles.map(|c| c == '#'),
        })
    }
}

/// A reindeer pose, or the goal reached from any pose on the end tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Node {
    Pose(Coord, Direction),
    Goal,
}

impl Maze {
    fn graph(&self) -> DiGraphMap<Node, u32> {
        let shape = self.walls.shape();
        let mut graph = DiGraphMap::new();
        for position in find_all(&self.walls, &false) {
            for facing in Direction::ALL {
                let pose = Node::Pose(position, facing);
                graph.add_edge(pose, Node::Pose(position, facing.turn_right()), TURN_COST);
                graph.add_edge(pose, Node::Pose(position, facing.turn_left()), TURN_COST);
                if let Some(ahead) = position.step_within(facing, shape)
                    && !self.walls[ahead.index()]
                {
                    graph.add_edge(pose, Node::Pose(ahead, facing), STEP_COST);
                }
                if position == self.end {
                    graph.add_edge(pose, Node::Goal, 0);
                }
            }
        }
        graph
    }
}

/*
For part 1, find the lowest score a reindeer could possibly get.
*/

struct Day16;

impl Solution<PartOne> for Day16 {
    type Input = Maze;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let graph = input.graph();
        let scores = dijkstra(
            &graph,
            Node::Pose(input.start, Direction::East),
            Some(Node::Goal),
            |edge| *edge.weight(),
        );
        Ok(*scores.get(&Node::Goal).ok_or(MazeError::Unreachable)?)
    }
}

/*
For part 2, count the tiles that are part of at least one lowest scoring path.

A pose lies on a best path when its score from the start plus its score to the goal equals the
best score. Scores to the goal come from searching the reversed graph.
*/

impl Solution<PartTwo> for Day16 {
    type Input = Maze;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let graph = input.graph();
        let from_start = dijkstra(
            &graph,
            Node::Pose(input.start, Direction::East),
            None,
            |edge| *edge.weight(),
        );
        let best = *from_start.get(&Node::Goal).ok_or(MazeError::Unreachable)?;
        let to_goal = dijkstra(Reversed(&graph), Node::Goal, None, |edge| *edge.weight());

        let tiles: HashSet<Coord> = from_start
            .iter()
            .filter_map(|(node, score)| match node {
                Node::Pose(position, _)
                    if to_goal
                        .get(node)
                        .is_some_and(|remaining| score + remaining == best) =>
                {
                    Some(*position)
                }
                _ => None,
            })
            .collect();
        Ok(tiles.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    const SECOND_EXAMPLE: &str = r"#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Maze::parse(EXAMPLE_INPUT)?;
        let result = <Day16 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 7036);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Maze::parse(EXAMPLE_INPUT)?;
        let result = <Day16 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 45);
        Ok(())
    }

    #[test]
    fn second_example() -> DynamicResult<()> {
        let parsed = Maze::parse(SECOND_EXAMPLE)?;
        assert_eq!(<Day16 as Solution<PartOne>>::solve(&parsed)?, 11048);
        assert_eq!(<Day16 as Solution<PartTwo>>::solve(&parsed)?, 64);
        Ok(())
    }

    #[test]
    fn walled_in_end_is_unreachable() -> DynamicResult<()> {
        let parsed = Maze::parse("#####\n#S#E#\n#####\n")?;
        assert!(<Day16 as Solution<PartOne>>::solve(&parsed).is_err());
        Ok(())
    }
}
