use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

#[solution_runner(
    name = "2024 Day 9: Disk Fragmenter",
    parsed = DiskMap,
    part_one = Day09,
    part_two = Day09
)]
impl super::AdventOfCode2024<9> {}

/*
Input is a dense disk map: a single line of digits alternating between the length of a file and
the length of free space. Files are numbered by their order on disk, starting at 0.

The checksum of a compacted disk is the sum over blocks of position times file id, skipping free
blocks.
*/

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

struct DiskMap {
    /// Indexed by file id.
    files: Vec<Span>,
    free: Vec<Span>,
}

#[derive(Error, Debug)]
#[error("disk map must contain only digits, found '{0}'")]
struct NotADigit(char);

impl ParseData for DiskMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut files = Vec::new();
        let mut free = Vec::new();
        let mut position = 0;
        for (index, c) in input.trim().chars().enumerate() {
            let len = c.to_digit(10).ok_or(NotADigit(c))? as usize;
            let span = Span {
                start: position,
                len,
            };
            if index % 2 == 0 {
                files.push(span);
            } else {
                free.push(span);
            }
            position += len;
        }
        Ok(Self { files, free })
    }
}

fn checksum(blocks: impl IntoIterator<Item = (usize, usize)>) -> u64 {
    blocks
        .into_iter()
        .map(|(position, id)| (position * id) as u64)
        .checked_sum()
        .expect("checksum should not overflow")
}

/*
For part 1, move file blocks one at a time from the end of the disk to the leftmost free block,
until there are no gaps between file blocks.
*/

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = DiskMap;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let disk_len = input
            .files
            .iter()
            .chain(&input.free)
            .map(|span| span.start + span.len)
            .max()
            .unwrap_or(0);
        let mut blocks: Vec<Option<usize>> = vec![None; disk_len];
        for (id, span) in input.files.iter().enumerate() {
            blocks[span.start..span.start + span.len].fill(Some(id));
        }

        let mut left = 0;
        let mut right = blocks.len();
        loop {
            while left < right && blocks[left].is_some() {
                left += 1;
            }
            while right > left && blocks[right - 1].is_none() {
                right -= 1;
            }
            if left + 1 >= right {
                break;
            }
            blocks.swap(left, right - 1);
        }

        Ok(checksum(
            blocks
                .into_iter()
                .enumerate()
                .filter_map(|(position, id)| Some((position, id?))),
        ))
    }
}

/*
For part 2, move whole files instead. Each file moves once, in order of decreasing file id, to the
leftmost span of free space to its left that can hold it. Files that fit nowhere stay put.
*/

impl Solution<PartTwo> for Day09 {
    type Input = DiskMap;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut files = input.files.clone();
        let mut free = input.free.clone();

        for file in files.iter_mut().rev() {
            let gap = free
                .iter_mut()
                .take_while(|gap| gap.start < file.start)
                .find(|gap| gap.len >= file.len);
            if let Some(gap) = gap {
                file.start = gap.start;
                gap.start += file.len;
                gap.len -= file.len;
            }
        }

        Ok(checksum(files.iter().enumerate().flat_map(|(id, span)| {
            (span.start..span.start + span.len).map(move |position| (position, id))
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "2333133121414131402\n";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = DiskMap::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 1928);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = DiskMap::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 2858);
        Ok(())
    }

    #[test]
    fn compacting_a_tiny_disk() -> DynamicResult<()> {
        // 0..111....22222 compacts to 022111222
        let parsed = DiskMap::parse("12345")?;
        let expected = [0, 2, 2, 1, 1, 1, 2, 2, 2]
            .iter()
            .enumerate()
            .map(|(position, id)| position as u64 * id)
            .sum::<u64>();
        assert_eq!(<Day09 as Solution<PartOne>>::solve(&parsed)?, expected);
        Ok(())
    }
}
