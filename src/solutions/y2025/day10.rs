use std::collections::VecDeque;

use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use nalgebra::DMatrix;
use thiserror::Error;

#[solution_runner(
    name = "2025 Day 10: Factory",
    parsed = Machines,
    part_one = Day10,
    part_two = Day10
)]
impl super::AdventOfCode2025<10> {}

/*
Input is one machine per line, like `[.##.] (3) (1,3) (2) {3,5,4,7}`: the indicator light diagram
in square brackets, then the wiring of each button in parentheses, then the joltage requirements in
curly braces.

Each button lists the lights (and joltage counters) it is wired to, numbered from 0.
*/

/// Light states are bit sets, light `i` being bit `i`.
const MAX_LIGHTS: usize = 20;

#[derive(Debug)]
struct Machine {
    lights: usize,
    target: u32,
    buttons: Vec<Vec<usize>>,
    joltages: Vec<i64>,
}

struct Machines(Vec<Machine>);

#[derive(Error, Debug)]
enum MachineError {
    #[error("unexpected machine part '{0}'")]
    UnexpectedPart(String),

    #[error("expected a light diagram and joltage requirements")]
    Incomplete,

    #[error("machine has more than {MAX_LIGHTS} lights")]
    TooManyLights,

    #[error("expected one joltage requirement per light")]
    CounterMismatch,

    #[error("button wired to light {0}, which does not exist")]
    NoSuchLight(usize),

    #[error("the lights cannot match the diagram")]
    LightsUnreachable,

    #[error("no button presses meet the joltage requirements")]
    JoltagesUnreachable,
}

fn parse_list<T: std::str::FromStr>(list: &str) -> DynamicResult<Vec<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let mut values = Vec::new();
    for value in list.split(',') {
        values.push(parse_with_context::<T>(value.trim())?);
    }
    Ok(values)
}

/// The text between `open` and `close`, if `part` is wrapped in them.
fn enclosed(part: &str, open: char, close: char) -> Option<&str> {
    part.strip_prefix(open)?.strip_suffix(close)
}

impl ParseData for Machines {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let machines = parse_input_lines(input, |_, line| {
            let mut diagram = None;
            let mut buttons = Vec::new();
            let mut joltages = None;
            for part in line.split_whitespace() {
                if let Some(lights) = enclosed(part, '[', ']') {
                    diagram = Some(lights);
                } else if let Some(wiring) = enclosed(part, '(', ')') {
                    buttons.push(parse_list::<usize>(wiring)?);
                } else if let Some(list) = enclosed(part, '{', '}') {
                    joltages = Some(parse_list::<i64>(list)?);
                } else {
                    return Err(MachineError::UnexpectedPart(part.to_owned()).into());
                }
            }

            let (Some(diagram), Some(joltages)) = (diagram, joltages) else {
                return Err(MachineError::Incomplete.into());
            };
            let lights = diagram.len();
            if lights > MAX_LIGHTS {
                return Err(MachineError::TooManyLights.into());
            }
            if joltages.len() != lights {
                return Err(MachineError::CounterMismatch.into());
            }
            if let Some(&light) = buttons.iter().flatten().find(|&&light| light >= lights) {
                return Err(MachineError::NoSuchLight(light).into());
            }
            let target = diagram
                .chars()
                .enumerate()
                .filter(|&(_, c)| c == '#')
                .fold(0, |target, (light, _)| target | 1 << light);

            Ok(Machine {
                lights,
                target,
                buttons,
                joltages,
            })
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(machines))
    }
}

/*
For part 1, every light starts off, and pressing a button toggles the lights it is wired to. Sum the
fewest presses each machine needs for its lights to match the diagram.
*/

impl Machine {
    /// Breadth first search over light states.
    fn fewest_light_presses(&self) -> Result<u64, MachineError> {
        let toggles: Vec<u32> = self
            .buttons
            .iter()
            .map(|button| button.iter().fold(0, |mask, &light| mask | 1 << light))
            .collect();
        let mut presses = vec![None; 1 << self.lights];
        presses[0] = Some(0u64);
        let mut queue = VecDeque::from([0u32]);
        while let Some(state) = queue.pop_front() {
            let count = presses[state as usize].expect("queued states should have a count");
            if state == self.target {
                return Ok(count);
            }
            for toggle in &toggles {
                let next = state ^ toggle;
                if presses[next as usize].is_none() {
                    presses[next as usize] = Some(count + 1);
                    queue.push_back(next);
                }
            }
        }
        Err(MachineError::LightsUnreachable)
    }
}

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = Machines;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let presses = input
            .0
            .iter()
            .map(Machine::fewest_light_presses)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(presses
            .into_iter()
            .checked_sum()
            .expect("press count should not overflow"))
    }
}

/*
For part 2, the buttons instead add 1 to the joltage counter of each light they are wired to. Every
counter starts at 0. Sum the fewest presses each machine needs to reach exactly its joltage
requirements.

Presses of each button are unknowns of a linear system, one equation per counter. Elimination
leaves a few free unknowns, each bounded by the smallest requirement its button adds to, so they
can be searched exhaustively.
*/

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a.abs() } else { gcd(b, a % b) }
}

/// A system reduced so that each pivot row holds one pivot unknown plus free unknowns.
struct ReducedSystem {
    /// Counter per row, button per column, requirements in the last column.
    matrix: DMatrix<i64>,
    /// Pivot column of each leading row.
    pivots: Vec<usize>,
    free: Vec<usize>,
}

impl ReducedSystem {
    fn new(machine: &Machine) -> Result<Self, MachineError> {
        let (rows, unknowns) = (machine.joltages.len(), machine.buttons.len());
        let mut matrix = DMatrix::<i64>::zeros(rows, unknowns + 1);
        for (button, wiring) in machine.buttons.iter().enumerate() {
            for &counter in wiring {
                matrix[(counter, button)] = 1;
            }
        }
        for (counter, &joltage) in machine.joltages.iter().enumerate() {
            matrix[(counter, unknowns)] = joltage;
        }

        let mut pivots = Vec::new();
        let mut free = Vec::new();
        for col in 0..unknowns {
            let row = pivots.len();
            let Some(pivot_row) = (row..rows).find(|&r| matrix[(r, col)] != 0) else {
                free.push(col);
                continue;
            };
            matrix.swap_rows(row, pivot_row);
            let pivot = matrix[(row, col)];
            for other in (0..rows).filter(|&other| other != row) {
                let factor = matrix[(other, col)];
                if factor == 0 {
                    continue;
                }
                for c in 0..=unknowns {
                    matrix[(other, c)] = matrix[(other, c)] * pivot - matrix[(row, c)] * factor;
                }
                let divisor = matrix.row(other).iter().fold(0, |g, &v| gcd(g, v));
                if divisor > 1 {
                    matrix.row_mut(other).apply(|v| *v /= divisor);
                }
            }
            pivots.push(col);
        }

        // rows left without a pivot have no unknowns, so they must require nothing
        if (pivots.len()..rows).any(|row| matrix[(row, unknowns)] != 0) {
            return Err(MachineError::JoltagesUnreachable);
        }
        Ok(Self {
            matrix,
            pivots,
            free,
        })
    }

    /// Total presses once the free unknowns are fixed, if the pivots come out as whole presses.
    fn total_presses(&self, free_presses: &[i64]) -> Option<i64> {
        let rhs_col = self.matrix.ncols() - 1;
        let mut total: i64 = free_presses.iter().sum();
        for (row, &pivot_col) in self.pivots.iter().enumerate() {
            let mut rhs = self.matrix[(row, rhs_col)];
            for (&col, &presses) in self.free.iter().zip(free_presses) {
                rhs -= self.matrix[(row, col)] * presses;
            }
            let coefficient = self.matrix[(row, pivot_col)];
            if rhs % coefficient != 0 || rhs / coefficient < 0 {
                return None;
            }
            total += rhs / coefficient;
        }
        Some(total)
    }
}

impl Machine {
    fn fewest_joltage_presses(&self) -> Result<i64, MachineError> {
        let system = ReducedSystem::new(self)?;
        let bounds: Vec<i64> = system
            .free
            .iter()
            .map(|&button| {
                self.buttons[button]
                    .iter()
                    .map(|&counter| self.joltages[counter])
                    .min()
                    .unwrap_or(0)
            })
            .collect();

        fn search(
            system: &ReducedSystem,
            bounds: &[i64],
            assigned: &mut Vec<i64>,
            best: &mut Option<i64>,
        ) {
            let so_far: i64 = assigned.iter().sum();
            if best.is_some_and(|best| so_far >= best) {
                return;
            }
            let Some(&bound) = bounds.get(assigned.len()) else {
                if let Some(total) = system.total_presses(assigned) {
                    *best = Some(best.map_or(total, |best| best.min(total)));
                }
                return;
            };
            for presses in 0..=bound {
                assigned.push(presses);
                search(system, bounds, assigned, best);
                assigned.pop();
            }
        }

        let mut best = None;
        search(&system, &bounds, &mut Vec::new(), &mut best);
        best.ok_or(MachineError::JoltagesUnreachable)
    }
}

impl Solution<PartTwo> for Day10 {
    type Input = Machines;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let presses = input
            .0
            .iter()
            .map(Machine::fewest_joltage_presses)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(presses
            .into_iter()
            .checked_sum()
            .expect("press count should not overflow"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Machines::parse(EXAMPLE_INPUT)?;
        let result = <Day10 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 7);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Machines::parse(EXAMPLE_INPUT)?;
        let result = <Day10 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 33);
        Ok(())
    }

    #[test]
    fn each_machine_separately() -> DynamicResult<()> {
        let parsed = Machines::parse(EXAMPLE_INPUT)?;
        let lights: Vec<u64> = parsed
            .0
            .iter()
            .map(Machine::fewest_light_presses)
            .collect::<Result<_, _>>()?;
        assert_eq!(lights, vec![2, 3, 2]);
        let joltages: Vec<i64> = parsed
            .0
            .iter()
            .map(Machine::fewest_joltage_presses)
            .collect::<Result<_, _>>()?;
        assert_eq!(joltages, vec![10, 12, 11]);
        Ok(())
    }

    #[test]
    fn unreachable_requirements_are_errors() -> DynamicResult<()> {
        let parsed = Machines::parse("[#.] (1) {1,0}\n")?;
        assert!(parsed.0[0].fewest_light_presses().is_err());
        assert!(parsed.0[0].fewest_joltage_presses().is_err());
        Ok(())
    }

    #[test]
    fn button_must_reach_a_light() {
        assert!(Machines::parse("[#.] (2) {1,0}\n").is_err());
    }
}
