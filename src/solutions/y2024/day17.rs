use advent_framework::parsing::{InputScanner, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use thiserror::Error;

#[solution_runner(
    name = "2024 Day 17: Chronospatial Computer",
    parsed = Computer,
    part_one = Day17,
    part_two = Day17
)]
impl super::AdventOfCode2024<17> {}

/*
Input is the initial state of a 3-bit computer: the values of registers A, B and C, then after a
blank line its program as comma separated numbers 0 to 7.

Each instruction is an opcode followed by an operand. Some instructions take the operand as a
literal, others as a combo operand: 0 to 3 are literal values, 4 to 6 read registers A to C, and 7
is reserved.

- `adv` (0): A = A / 2^combo
- `bxl` (1): B = B xor literal
- `bst` (2): B = combo % 8
- `jnz` (3): jump to literal when A is not zero
- `bxc` (4): B = B xor C, ignoring the operand
- `out` (5): output combo % 8
- `bdv` (6): B = A / 2^combo
- `cdv` (7): C = A / 2^combo

The computer halts when the instruction pointer runs past the end of the program.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Registers {
    a: u64,
    b: u64,
    c: u64,
}

struct Computer {
    registers: Registers,
    program: Vec<u8>,
}

#[derive(Error, Debug)]
enum ComputerError {
    #[error("expected a line like 'Register {0}: 729'")]
    MissingRegister(char),

    #[error("expected a line like 'Program: 0,1,2'")]
    MissingProgram,

    #[error("program value {0} is not a 3-bit number")]
    NotThreeBit(u8),

    #[error("combo operand 7 is reserved")]
    ReservedOperand,

    #[error("no initial value of register A makes the program output itself")]
    NoQuine,
}

impl ParseData for Computer {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);
        scanner.skip_empty();
        let mut register = |name: char| -> DynamicResult<u64> {
            let value = scanner.next_item(|_, line| {
                let value = line
                    .strip_prefix(&format!("Register {name}:"))
                    .ok_or(ComputerError::MissingRegister(name))?;
                Ok(parse_with_context(value.trim())?)
            })?;
            Ok(value.ok_or(ComputerError::MissingRegister(name))?)
        };
        let registers = Registers {
            a: register('A')?,
            b: register('B')?,
            c: register('C')?,
        };

        scanner.skip_empty();
        let program = scanner
            .next_item(|_, line| {
                let values = line
                    .strip_prefix("Program:")
                    .ok_or(ComputerError::MissingProgram)?;
                values
                    .split(',')
                    .map(|value| {
                        let value: u8 = parse_with_context(value.trim())?;
                        if value > 7 {
                            return Err(ComputerError::NotThreeBit(value).into());
                        }
                        Ok(value)
                    })
                    .collect::<DynamicResult<Vec<_>>>()
            })?
            .ok_or(ComputerError::MissingProgram)?;

        Ok(Self { registers, program })
    }
}

impl Registers {
    fn combo(&self, operand: u8) -> Result<u64, ComputerError> {
        match operand {
            0..=3 => Ok(u64::from(operand)),
            4 => Ok(self.a),
            5 => Ok(self.b),
            6 => Ok(self.c),
            _ => Err(ComputerError::ReservedOperand),
        }
    }

    /// A divided by 2 to the power of `exponent`.
    fn divide(&self, exponent: u64) -> u64 {
        u32::try_from(exponent)
            .ok()
            .and_then(|shift| self.a.checked_shr(shift))
            .unwrap_or(0)
    }
}

impl Computer {
    /// Run the program from the given registers, collecting its output.
    ///
    /// # Errors
    ///
    /// [`ComputerError::ReservedOperand`] if a combo operand of 7 is used.
    fn run(&self, mut registers: Registers) -> Result<Vec<u8>, ComputerError> {
        let mut output = Vec::new();
        let mut pointer = 0;
        while let [opcode, operand, ..] = self.program[pointer.min(self.program.len())..] {
            pointer += 2;
            match opcode {
                0 => registers.a = registers.divide(registers.combo(operand)?),
                1 => registers.b ^= u64::from(operand),
                2 => registers.b = registers.combo(operand)? % 8,
                3 if registers.a != 0 => pointer = usize::from(operand),
                3 => {}
                4 => registers.b ^= registers.c,
                5 => output.push((registers.combo(operand)? % 8) as u8),
                6 => registers.b = registers.divide(registers.combo(operand)?),
                _ => registers.c = registers.divide(registers.combo(operand)?),
            }
        }
        Ok(output)
    }
}

/*
For part 1, run the program and join its outputs with commas.
*/

struct Day17;

impl Solution<PartOne> for Day17 {
    type Input = Computer;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let output = input.run(input.registers)?;
        Ok(output
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(","))
    }
}

/*
For part 2, find the lowest positive initial value of register A that makes the program output a
copy of itself.

Programs shift A right by 3 bits each loop and output something derived from its low bits, so the
last output depends only on the highest 3 bits of A. A is built up 3 bits at a time, checking that
the output matches the end of the program so far.
*/

impl Computer {
    fn find_quine(&self) -> Result<Option<u64>, ComputerError> {
        fn search(
            computer: &Computer,
            prefix: u64,
            matched: usize,
        ) -> Result<Option<u64>, ComputerError> {
            if matched == computer.program.len() {
                return Ok((prefix > 0).then_some(prefix));
            }
            let target = &computer.program[computer.program.len() - matched - 1..];
            for low_bits in 0..8 {
                let Some(a) = prefix.checked_mul(8).map(|shifted| shifted | low_bits) else {
                    return Ok(None);
                };
                let registers = Registers {
                    a,
                    ..computer.registers
                };
                if computer.run(registers)? == target
                    && let Some(found) = search(computer, a, matched + 1)?
                {
                    return Ok(Some(found));
                }
            }
            Ok(None)
        }
        search(self, 0, 0)
    }
}

impl Solution<PartTwo> for Day17 {
    type Input = Computer;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.find_quine()?.ok_or(ComputerError::NoQuine)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"Register A: 729
Register B: 0
Register C: 0

Program: 0,1,5,4,3,0
";

    const QUINE_EXAMPLE: &str = r"Register A: 2024
Register B: 0
Register C: 0

Program: 0,3,5,4,3,0
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Computer::parse(EXAMPLE_INPUT)?;
        let result = <Day17 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, "4,6,3,5,6,3,5,2,1,0");
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Computer::parse(QUINE_EXAMPLE)?;
        let result = <Day17 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 117_440);
        Ok(())
    }

    #[test]
    fn small_programs() -> Result<(), ComputerError> {
        let computer = |program: Vec<u8>| Computer {
            registers: Registers::default(),
            program,
        };

        // bst 6 with C = 9 sets B to 1
        let registers = Registers {
            c: 9,
            ..Registers::default()
        };
        assert_eq!(computer(vec![2, 6, 5, 5]).run(registers)?, vec![1]);

        // B = 2024 xor 43690 = 44354, which is 2 mod 8
        let registers = Registers {
            b: 2024,
            c: 43690,
            ..Registers::default()
        };
        assert_eq!(computer(vec![4, 0, 5, 5]).run(registers)?, vec![2]);

        let registers = Registers {
            a: 10,
            ..Registers::default()
        };
        assert_eq!(
            computer(vec![5, 0, 5, 1, 5, 4]).run(registers)?,
            vec![0, 1, 2]
        );
        Ok(())
    }

    #[test]
    fn reserved_operand_is_an_error() {
        let computer = Computer {
            registers: Registers::default(),
            program: vec![5, 7],
        };
        assert!(computer.run(Registers::default()).is_err());
    }
}
