use advent_framework::parsing::{InputScanner, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, Solution};
use thiserror::Error;

#[solution_runner(
    name = "2025 Day 12: Christmas Tree Farm",
    parsed = Farm,
    part_one = Day12
)]
impl super::AdventOfCode2025<12> {}

/*
Input is a list of present shapes, each an index like `0:` followed by a small grid of `#` and `.`.
Then come the regions under the trees, one per line, like `12x5: 1 0 1 0 2 2`: the region's width
and height, then how many presents of each shape must fit in it.

Presents may be rotated and flipped, but cannot overlap.
*/

#[derive(Debug, Clone, Copy)]
struct Shape {
    tiles: usize,
    rows: usize,
    cols: usize,
}

#[derive(Debug)]
struct Region {
    width: usize,
    height: usize,
    counts: Vec<usize>,
}

struct Farm {
    shapes: Vec<Shape>,
    regions: Vec<Region>,
}

#[derive(Error, Debug)]
enum ParseFarmError {
    #[error("expected a shape index like '0:' or a region like '12x5: 1 0 1'")]
    UnexpectedLine,

    #[error("shape {found} is out of order, expected shape {expected}")]
    ShapeOrder { found: usize, expected: usize },

    #[error("expected '#' or '.', found '{0}'")]
    UnexpectedCell(char),

    #[error("region lists {0} shapes, but only {1} are known")]
    UnknownShape(usize, usize),
}

enum Header {
    Shape(usize),
    Region(Region),
}

fn parse_region(line: &str) -> DynamicResult<Region> {
    let (size, counts) = line.split_once(':').ok_or(ParseFarmError::UnexpectedLine)?;
    let (width, height) = size.trim().split_once('x').ok_or(ParseFarmError::UnexpectedLine)?;
    Ok(Region {
        width: parse_with_context(width)?,
        height: parse_with_context(height)?,
        counts: counts
            .split_whitespace()
            .map(parse_with_context::<usize>)
            .collect::<Result<_, _>>()?,
    })
}

impl ParseData for Farm {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut shapes = Vec::new();
        let mut regions = Vec::new();

        let mut scanner = InputScanner::new(input);
        while scanner.skip_empty() {
            let header = scanner.next_item(|_, line| {
                let line = line.trim();
                match line.strip_suffix(':') {
                    Some(index) => Ok(Header::Shape(parse_with_context(index)?)),
                    None => Ok(Header::Region(parse_region(line)?)),
                }
            })?;
            match header {
                Some(Header::Shape(index)) => {
                    if index != shapes.len() {
                        return Err(ParseFarmError::ShapeOrder {
                            found: index,
                            expected: shapes.len(),
                        }
                        .into());
                    }
                    let grid = scanner.collect_grid(|c| match c {
                        '#' => Ok(true),
                        '.' => Ok(false),
                        other => Err(ParseFarmError::UnexpectedCell(other).into()),
                    })?;
                    shapes.push(Shape {
                        tiles: grid.iter().filter(|&&tile| tile).count(),
                        rows: grid.nrows(),
                        cols: grid.ncols(),
                    });
                }
                Some(Header::Region(region)) => {
                    regions.push(region);
                    regions.extend(scanner.collect_sequence(|_, line| parse_region(line.trim()))?);
                }
                None => break,
            }
        }

        if let Some(region) = regions.iter().find(|region| region.counts.len() > shapes.len()) {
            return Err(ParseFarmError::UnknownShape(region.counts.len(), shapes.len()).into());
        }
        Ok(Self { shapes, regions })
    }
}

/// How sure we are that a region's presents fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fit {
    /// Too few tiles for the presents, however they are packed.
    Impossible,
    /// Enough tiles, but packing the presents may still fail.
    ByArea,
    /// Every present fits in its own cell of a grid laid over the region.
    Certain,
}

impl Farm {
    fn fit(&self, region: &Region) -> Fit {
        let present_tiles: usize = region
            .counts
            .iter()
            .zip(&self.shapes)
            .map(|(count, shape)| count * shape.tiles)
            .sum();
        if present_tiles > region.width * region.height {
            return Fit::Impossible;
        }

        let cell = self
            .shapes
            .iter()
            .map(|shape| shape.rows.max(shape.cols))
            .max()
            .unwrap_or(1)
            .max(1);
        let presents: usize = region.counts.iter().sum();
        if (region.width / cell) * (region.height / cell) >= presents {
            Fit::Certain
        } else {
            Fit::ByArea
        }
    }
}

/*
For part 1, count the regions that can fit all of their presents.

A region fits when it has enough tiles for every present. Packing is not attempted.
*/

struct Day12;

impl Solution<PartOne> for Day12 {
    type Input = Farm;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let fits: Vec<Fit> = input.regions.iter().map(|region| input.fit(region)).collect();
        let uncertain = fits.iter().filter(|&&fit| fit == Fit::ByArea).count();
        if uncertain > 0 {
            tracing::warn!(uncertain, "some regions fit by area only, packing is not checked");
        }
        Ok(fits.into_iter().filter(|&fit| fit != Fit::Impossible).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"0:
###
##.
##.

1:
###
#..
###

2:
.#.
###
.#.

6x6: 1 1 1
3x3: 0 0 1
3x3: 1 1 0
4x5: 2 0 1
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Farm::parse(EXAMPLE_INPUT)?;
        let result = <Day12 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3);
        Ok(())
    }

    #[test]
    fn regions_are_graded() -> DynamicResult<()> {
        let parsed = Farm::parse(EXAMPLE_INPUT)?;
        let fits: Vec<Fit> = parsed.regions.iter().map(|region| parsed.fit(region)).collect();
        assert_eq!(
            fits,
            vec![Fit::Certain, Fit::Certain, Fit::Impossible, Fit::ByArea]
        );
        Ok(())
    }

    #[test]
    fn shapes_count_their_tiles() -> DynamicResult<()> {
        let parsed = Farm::parse(EXAMPLE_INPUT)?;
        let tiles: Vec<usize> = parsed.shapes.iter().map(|shape| shape.tiles).collect();
        assert_eq!(tiles, vec![7, 7, 5]);
        Ok(())
    }

    #[test]
    fn regions_only_use_known_shapes() {
        assert!(Farm::parse("0:\n#\n\n2x2: 1 1\n").is_err());
        assert!(Farm::parse("1:\n#\n\n2x2: 1\n").is_err());
    }
}
