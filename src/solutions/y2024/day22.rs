use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "2024 Day 22: Monkey Market",
    parsed = Buyers,
    part_one = Day22,
    part_two = Day22
)]
impl super::AdventOfCode2024<22> {}

/*
Input is the initial secret number of each buyer, one per line.

A buyer's next secret number comes from mixing (xor) and pruning (modulo 16777216) the secret with,
in turn, the secret times 64, the secret divided by 32, and the secret times 2048. Each buyer
produces 2000 new secret numbers in a day.
*/

const PRUNE_MODULUS: u64 = 16_777_216;
const SECRETS_PER_DAY: usize = 2000;

struct Buyers(Vec<u64>);

impl ParseData for Buyers {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let secrets =
            parse_input_lines(input, |_, line| Ok(parse_with_context::<u64>(line.trim())?))
                .collect::<Result<_, _>>()?;
        Ok(Self(secrets))
    }
}

fn next_secret(mut secret: u64) -> u64 {
    secret = ((secret * 64) ^ secret) % PRUNE_MODULUS;
    secret = ((secret / 32) ^ secret) % PRUNE_MODULUS;
    ((secret * 2048) ^ secret) % PRUNE_MODULUS
}

/// The initial secret followed by the day's new secrets.
fn secrets(initial: u64) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(initial), |&secret| Some(next_secret(secret)))
        .take(SECRETS_PER_DAY + 1)
}

/*
For part 1, sum the 2000th new secret number of every buyer.
*/

struct Day22;

impl Solution<PartOne> for Day22 {
    type Input = Buyers;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .filter_map(|&initial| secrets(initial).last())
            .checked_sum()
            .expect("sum of secrets should not overflow"))
    }
}

/*
For part 2, a buyer's price is the ones digit of each secret number. A monkey sells to each buyer
the first time it sees a chosen sequence of four consecutive price changes, at the price reached by
the last change. If the sequence never appears, that buyer is skipped.

Find the most bananas one sequence can get across all buyers.
*/

/// Price changes range over -9..=9, so a sequence of four packs into a base 19 number.
const CHANGE_VALUES: usize = 19;
const SEQUENCE_COUNT: usize = CHANGE_VALUES.pow(4);

impl Solution<PartTwo> for Day22 {
    type Input = Buyers;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut bananas = vec![0u64; SEQUENCE_COUNT];
        // index of the last buyer to see each sequence, plus one
        let mut last_seen = vec![0usize; SEQUENCE_COUNT];

        for (buyer, &initial) in input.0.iter().enumerate() {
            let prices: Vec<u64> = secrets(initial).map(|secret| secret % 10).collect();
            let mut sequence = 0;
            for (index, pair) in prices.windows(2).enumerate() {
                let change = (pair[1] + 9 - pair[0]) as usize;
                sequence = (sequence * CHANGE_VALUES + change) % SEQUENCE_COUNT;
                if index >= 3 && last_seen[sequence] != buyer + 1 {
                    last_seen[sequence] = buyer + 1;
                    bananas[sequence] += pair[1];
                }
            }
        }
        Ok(bananas.into_iter().max().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Buyers::parse("1\n10\n100\n2024\n")?;
        let result = <Day22 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 37_327_623);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Buyers::parse("1\n2\n3\n2024\n")?;
        let result = <Day22 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 23);
        Ok(())
    }

    #[test]
    fn secrets_evolve() {
        let first: Vec<u64> = secrets(123).skip(1).take(3).collect();
        assert_eq!(first, vec![15_887_950, 16_495_136, 527_345]);
    }
}
