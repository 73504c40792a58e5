use std::collections::{BTreeSet, HashMap};

use advent_framework::parsing::InputScanner;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use thiserror::Error;

#[solution_runner(
    name = "2024 Day 24: Crossed Wires",
    parsed = Device,
    part_one = Day24,
    part_two = Day24
)]
impl super::AdventOfCode2024<24> {}

/*
Input is the initial values of some wires, like `x00: 1`, then after a blank line the logic gates,
like `x00 AND y00 -> z00`. Gates are AND, OR and XOR, and each wire is driven by at most one source.

Wires starting with `z` form a binary number, `z00` being the least significant bit.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    And,
    Or,
    Xor,
}

impl Operation {
    fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Self::And => a && b,
            Self::Or => a || b,
            Self::Xor => a ^ b,
        }
    }
}

#[derive(Debug, Clone)]
struct Gate {
    inputs: [String; 2],
    operation: Operation,
    output: String,
}

struct Device {
    initial: HashMap<String, bool>,
    gates: Vec<Gate>,
}

#[derive(Error, Debug)]
enum DeviceError {
    #[error("expected an initial value like 'x00: 1'")]
    MalformedWire,

    #[error("expected a gate like 'x00 AND y00 -> z00'")]
    MalformedGate,

    #[error("unknown gate operation '{0}'")]
    UnknownOperation(String),

    #[error("wire {0} never receives a signal")]
    Undriven(String),
}

impl ParseData for Device {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);
        scanner.skip_empty();
        let initial = scanner
            .collect_sequence(|_, line| {
                let (wire, value) = line.split_once(':').ok_or(DeviceError::MalformedWire)?;
                let value = match value.trim() {
                    "0" => false,
                    "1" => true,
                    _ => return Err(DeviceError::MalformedWire.into()),
                };
                Ok((wire.trim().to_owned(), value))
            })?
            .into_iter()
            .collect();

        scanner.skip_empty();
        let gates = scanner.collect_sequence(|_, line| {
            let [a, operation, b, arrow, output]: [&str; 5] = line
                .split_whitespace()
                .collect::<Vec<_>>()
                .try_into()
                .map_err(|_| DeviceError::MalformedGate)?;
            if arrow != "->" {
                return Err(DeviceError::MalformedGate.into());
            }
            let operation = match operation {
                "AND" => Operation::And,
                "OR" => Operation::Or,
                "XOR" => Operation::Xor,
                other => return Err(DeviceError::UnknownOperation(other.to_owned()).into()),
            };
            Ok(Gate {
                inputs: [a.to_owned(), b.to_owned()],
                operation,
                output: output.to_owned(),
            })
        })?;

        Ok(Self { initial, gates })
    }
}

impl Device {
    /// Propagate signals until every gate output is known.
    fn simulate(&self) -> Result<HashMap<&str, bool>, DeviceError> {
        let mut values: HashMap<&str, bool> = self
            .initial
            .iter()
            .map(|(wire, &value)| (wire.as_str(), value))
            .collect();
        let mut pending: Vec<&Gate> = self.gates.iter().collect();
        while !pending.is_empty() {
            let before = pending.len();
            pending.retain(|gate| {
                let [a, b] = &gate.inputs;
                match (values.get(a.as_str()), values.get(b.as_str())) {
                    (Some(&a), Some(&b)) => {
                        values.insert(&gate.output, gate.operation.apply(a, b));
                        false
                    }
                    _ => true,
                }
            });
            if pending.len() == before {
                return Err(DeviceError::Undriven(pending[0].output.clone()));
            }
        }
        Ok(values)
    }
}

/*
For part 1, simulate the gates and give the decimal number output on the `z` wires.
*/

struct Day24;

impl Solution<PartOne> for Day24 {
    type Input = Device;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let values = input.simulate()?;
        let mut z_wires: Vec<(&str, bool)> = values
            .into_iter()
            .filter(|(wire, _)| wire.starts_with('z'))
            .collect();
        z_wires.sort_unstable();
        Ok(z_wires
            .into_iter()
            .rev()
            .fold(0, |number, (_, bit)| number << 1 | u64::from(bit)))
    }
}

/*
For part 2, the device is meant to be a ripple carry adder putting x + y on z, but exactly four
pairs of gates have had their output wires swapped. Give the eight swapped wires, sorted and
joined with commas.

A correct adder follows a fixed shape, so each swapped wire breaks one of these rules:
- every z output except the final carry comes from an XOR
- an XOR not fed by x and y outputs to z
- an AND, other than the one on bit 0, feeds only OR gates
- an XOR never feeds an OR
*/

impl Device {
    fn consumers<'a>(&'a self, wire: &'a str) -> impl Iterator<Item = &'a Gate> + 'a {
        self.gates
            .iter()
            .filter(move |gate| gate.inputs.iter().any(|input| input == wire))
    }

    fn misplaced_wires(&self) -> BTreeSet<&str> {
        let highest_z = self
            .gates
            .iter()
            .map(|gate| gate.output.as_str())
            .filter(|wire| wire.starts_with('z'))
            .max();
        let is_input = |wire: &str| wire.starts_with('x') || wire.starts_with('y');

        let mut misplaced = BTreeSet::new();
        for gate in &self.gates {
            let output = gate.output.as_str();
            let [a, b] = &gate.inputs;
            let from_inputs = is_input(a) && is_input(b);

            let wrong = match gate.operation {
                _ if output.starts_with('z')
                    && gate.operation != Operation::Xor
                    && Some(output) != highest_z =>
                {
                    true
                }
                Operation::Xor if !from_inputs && !output.starts_with('z') => true,
                Operation::Xor => {
                    self.consumers(output).any(|consumer| consumer.operation == Operation::Or)
                }
                Operation::And if a != "x00" && b != "x00" => {
                    self.consumers(output).any(|consumer| consumer.operation != Operation::Or)
                }
                Operation::And | Operation::Or => false,
            };
            if wrong {
                misplaced.insert(output);
            }
        }
        misplaced
    }
}

impl Solution<PartTwo> for Day24 {
    type Input = Device;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let misplaced = input.misplaced_wires();
        if misplaced.len() != 8 {
            tracing::warn!(found = misplaced.len(), "expected eight swapped wires");
        }
        Ok(misplaced.into_iter().collect::<Vec<_>>().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"x00: 1
x01: 1
x02: 1
y00: 0
y01: 1
y02: 0

x00 AND y00 -> z00
x01 XOR y01 -> z01
x02 OR y02 -> z02
";

    /// A two bit adder with the outputs of `x01 AND y01` and `s01 XOR c00` swapped.
    const SWAPPED_ADDER: &str = r"x00: 1
x01: 0
y00: 1
y01: 1

x00 XOR y00 -> z00
x00 AND y00 -> c00
x01 XOR y01 -> s01
s01 XOR c00 -> a01
x01 AND y01 -> z01
s01 AND c00 -> b01
a01 OR b01 -> z02
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Device::parse(EXAMPLE_INPUT)?;
        let result = <Day24 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 4);
        Ok(())
    }

    #[test]
    fn part_two_finds_swapped_outputs() -> DynamicResult<()> {
        let parsed = Device::parse(SWAPPED_ADDER)?;
        let result = <Day24 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, "a01,z01");
        Ok(())
    }

    #[test]
    fn undriven_wire_is_an_error() -> DynamicResult<()> {
        let parsed = Device::parse("x00: 1\n\nx00 AND y00 -> z00\n")?;
        assert!(<Day24 as Solution<PartOne>>::solve(&parsed).is_err());
        Ok(())
    }
}
