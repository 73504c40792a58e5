use std::collections::HashMap;

use advent_framework::parsing::parse_input_lines;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use thiserror::Error;

#[solution_runner(
    name = "2025 Day 11: Reactor",
    parsed = Rack,
    part_one = Day11,
    part_two = Day11
)]
impl super::AdventOfCode2025<11> {}

/*
Input is a list of devices and where their outputs lead, like `bbb: ddd eee`. Data only flows from
a device through its outputs, and never loops back.
*/

type DeviceId = usize;

struct Rack {
    ids: HashMap<String, DeviceId>,
    outputs: DiGraphMap<DeviceId, ()>,
    /// Every device ordered so that data only flows forward.
    order: Vec<DeviceId>,
}

#[derive(Error, Debug)]
enum RackError {
    #[error("expected a device and its outputs like 'bbb: ddd eee'")]
    MalformedDevice,

    #[error("data flowing out of a device loops back to it")]
    Loop,
}

impl ParseData for Rack {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let devices: Vec<(String, Vec<String>)> = parse_input_lines(input, |_, line| {
            let (device, outputs) = line.split_once(':').ok_or(RackError::MalformedDevice)?;
            let device = device.trim();
            if device.is_empty() {
                return Err(RackError::MalformedDevice.into());
            }
            Ok((
                device.to_owned(),
                outputs.split_whitespace().map(str::to_owned).collect(),
            ))
        })
        .collect::<Result<_, _>>()?;

        let mut ids: HashMap<String, DeviceId> = HashMap::new();
        let mut outputs = DiGraphMap::new();
        for (device, targets) in devices {
            let mut id = |name: String| {
                let next = ids.len();
                *ids.entry(name).or_insert(next)
            };
            let from = id(device);
            outputs.add_node(from);
            for target in targets {
                let to = id(target);
                outputs.add_edge(from, to, ());
            }
        }
        let order = toposort(&outputs, None).map_err(|_| RackError::Loop)?;
        Ok(Self {
            ids,
            outputs,
            order,
        })
    }
}

impl Rack {
    /// Number of distinct paths from `from` to `to`. Unknown devices have no paths.
    fn paths(&self, from: &str, to: &str) -> u64 {
        let (Some(&from), Some(&to)) = (self.ids.get(from), self.ids.get(to)) else {
            return 0;
        };
        let mut ways: HashMap<DeviceId, u64> = HashMap::from([(from, 1)]);
        for &device in &self.order {
            let Some(&count) = ways.get(&device) else {
                continue;
            };
            if device == to {
                return count;
            }
            for next in self.outputs.neighbors(device) {
                *ways.entry(next).or_default() += count;
            }
        }
        0
    }
}

/*
For part 1, count every path from the device `you` to `out`.
*/

struct Day11;

impl Solution<PartOne> for Day11 {
    type Input = Rack;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.paths("you", "out"))
    }
}

/*
For part 2, count the paths from the server rack `svr` to `out` that visit both `dac` and `fft`, in
either order.
*/

impl Solution<PartTwo> for Day11 {
    type Input = Rack;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let through = |first: &str, second: &str| {
            input.paths("svr", first) * input.paths(first, second) * input.paths(second, "out")
        };
        // without loops, at most one of the orders has any paths
        Ok(through("dac", "fft") + through("fft", "dac"))
    }
}
