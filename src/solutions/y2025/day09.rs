use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point2;
use thiserror::Error;

#[solution_runner(
    name = "2025 Day 9: Movie Theater",
    parsed = RedTiles,
    part_one = Day09,
    part_two = Day09
)]
impl super::AdventOfCode2025<9> {}

/*
Input is the position of each red tile on the theater floor, one `X,Y` per line.

Listed in order, each red tile shares a row or column with the next one, and the last with the
first. Straight lines of green tiles join them, enclosing a loop filled with green tiles.
*/

type Tile = Point2<i64>;

struct RedTiles(Vec<Tile>);

#[derive(Error, Debug)]
enum TileError {
    #[error("expected a tile position like '7,1'")]
    MalformedTile,

    #[error("need at least two red tiles for a rectangle")]
    TooFewTiles,

    #[error("no rectangle fits inside the loop")]
    NoRectangle,
}

impl ParseData for RedTiles {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let tiles = parse_input_lines(input, |_, line| {
            let (x, y) = line.trim().split_once(',').ok_or(TileError::MalformedTile)?;
            Ok(Tile::new(parse_with_context(x)?, parse_with_context(y)?))
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(tiles))
    }
}

/// An axis aligned box, given by its smallest and largest corner.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min: Tile,
    max: Tile,
}

impl Bounds {
    fn spanning(a: Tile, b: Tile) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Tiles covered, edges included.
    fn area(&self) -> i64 {
        let size = self.max - self.min;
        (size.x + 1) * (size.y + 1)
    }

    /// Whether `other` reaches strictly inside this box.
    fn overlaps_interior(&self, other: &Self) -> bool {
        other.min.x < self.max.x
            && other.min.y < self.max.y
            && other.max.x > self.min.x
            && other.max.y > self.min.y
    }
}

impl RedTiles {
    /// Rectangles with red tiles on opposite corners, largest first.
    fn rectangles(&self) -> Vec<Bounds> {
        let tiles = &self.0;
        let mut rectangles: Vec<Bounds> = (0..tiles.len())
            .flat_map(|a| (a + 1..tiles.len()).map(move |b| Bounds::spanning(tiles[a], tiles[b])))
            .collect();
        rectangles.sort_by_key(|rectangle| std::cmp::Reverse(rectangle.area()));
        rectangles
    }

    /// The loop's straight lines, as boxes one tile thick.
    fn edges(&self) -> impl Iterator<Item = Bounds> + '_ {
        let next = self.0.iter().cycle().skip(1);
        self.0
            .iter()
            .zip(next)
            .map(|(&a, &b)| Bounds::spanning(a, b))
    }
}

/*
For part 1, find the largest rectangle that has red tiles at two opposite corners.
*/

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = RedTiles;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let largest = input.rectangles().first().map(Bounds::area);
        Ok(largest.ok_or(TileError::TooFewTiles)?)
    }
}

/*
For part 2, the rectangle may only cover red or green tiles. Find the largest one.

A rectangle stays inside the loop when no line of the loop passes through its interior.
*/

impl Solution<PartTwo> for Day09 {
    type Input = RedTiles;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let edges: Vec<Bounds> = input.edges().collect();
        let largest = input
            .rectangles()
            .into_iter()
            .find(|rectangle| !edges.iter().any(|edge| rectangle.overlaps_interior(edge)))
            .map(|rectangle| rectangle.area());
        Ok(largest.ok_or(TileError::NoRectangle)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = RedTiles::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 50);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = RedTiles::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 24);
        Ok(())
    }

    #[test]
    fn area_counts_edge_tiles() {
        assert_eq!(
            Bounds::spanning(Tile::new(2, 5), Tile::new(11, 1)).area(),
            50
        );
        assert_eq!(Bounds::spanning(Tile::new(3, 3), Tile::new(3, 3)).area(), 1);
    }

    #[test]
    fn loop_closes_back_to_the_first_tile() -> DynamicResult<()> {
        let parsed = RedTiles::parse(EXAMPLE_INPUT)?;
        let last = parsed.edges().last().map(|edge| (edge.min, edge.max));
        assert_eq!(last, Some((Tile::new(7, 1), Tile::new(7, 3))));
        Ok(())
    }
}
