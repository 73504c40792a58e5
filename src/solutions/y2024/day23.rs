use std::collections::{BTreeSet, HashMap};

use advent_framework::parsing::parse_input_lines;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use petgraph::graphmap::UnGraphMap;
use thiserror::Error;

#[solution_runner(
    name = "2024 Day 23: LAN Party",
    parsed = Network,
    part_one = Day23,
    part_two = Day23
)]
impl super::AdventOfCode2024<23> {}

/*
Input is a network map, one connection per line between two named computers, like `kh-tc`.
Connections go both ways.
*/

type ComputerId = usize;

struct Network {
    names: Vec<String>,
    links: UnGraphMap<ComputerId, ()>,
}

#[derive(Error, Debug)]
#[error("expected a connection like 'kh-tc'")]
struct MalformedConnection;

impl ParseData for Network {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut names = Vec::new();
        let mut ids: HashMap<String, ComputerId> = HashMap::new();
        let mut links = UnGraphMap::new();
        let connections: Vec<(String, String)> = parse_input_lines(input, |_, line| {
            let (a, b) = line.trim().split_once('-').ok_or(MalformedConnection)?;
            if a.is_empty() || b.is_empty() {
                return Err(MalformedConnection.into());
            }
            Ok((a.to_owned(), b.to_owned()))
        })
        .collect::<Result<_, _>>()?;

        for (a, b) in connections {
            let mut id = |name: String| {
                *ids.entry(name).or_insert_with_key(|name| {
                    names.push(name.clone());
                    names.len() - 1
                })
            };
            let (a, b) = (id(a), id(b));
            links.add_edge(a, b, ());
        }
        Ok(Self { names, links })
    }
}

/*
For part 1, find every set of three computers all connected to each other. Count the sets where at
least one computer's name starts with `t`.
*/

struct Day23;

impl Solution<PartOne> for Day23 {
    type Input = Network;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let chief_candidate = |id: ComputerId| input.names[id].starts_with('t');
        let mut count = 0;
        for (a, b, _) in input.links.all_edges() {
            let (a, b) = (a.min(b), a.max(b));
            // each triangle is found once, from its edge between the two lowest ids
            for c in input.links.neighbors(a) {
                if c > b
                    && input.links.contains_edge(b, c)
                    && [a, b, c].into_iter().any(chief_candidate)
                {
                    count += 1;
                }
            }
        }
        Ok(count)
    }
}

/*
For part 2, find the largest set of computers that are all connected to each other. The password
is their names, sorted and joined with commas.
*/

impl Network {
    /// Bron-Kerbosch with pivoting, keeping the largest clique seen.
    fn largest_clique(&self) -> Vec<ComputerId> {
        fn extend(
            links: &UnGraphMap<ComputerId, ()>,
            clique: &mut Vec<ComputerId>,
            mut candidates: BTreeSet<ComputerId>,
            mut excluded: BTreeSet<ComputerId>,
            best: &mut Vec<ComputerId>,
        ) {
            if candidates.is_empty() && excluded.is_empty() {
                if clique.len() > best.len() {
                    best.clone_from(clique);
                }
                return;
            }
            let pivot = candidates
                .union(&excluded)
                .copied()
                .max_by_key(|&node| links.neighbors(node).count());
            let to_try: Vec<ComputerId> = candidates
                .iter()
                .copied()
                .filter(|&node| pivot.is_none_or(|pivot| !links.contains_edge(pivot, node)))
                .collect();

            for node in to_try {
                let neighbors: BTreeSet<ComputerId> = links.neighbors(node).collect();
                clique.push(node);
                extend(
                    links,
                    clique,
                    candidates.intersection(&neighbors).copied().collect(),
                    excluded.intersection(&neighbors).copied().collect(),
                    best,
                );
                clique.pop();
                candidates.remove(&node);
                excluded.insert(node);
            }
        }

        let mut best = Vec::new();
        extend(
            &self.links,
            &mut Vec::new(),
            self.links.nodes().collect(),
            BTreeSet::new(),
            &mut best,
        );
        best
    }
}

impl Solution<PartTwo> for Day23 {
    type Input = Network;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut names: Vec<&str> = input
            .largest_clique()
            .into_iter()
            .map(|id| input.names[id].as_str())
            .collect();
        names.sort_unstable();
        Ok(names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"kh-tc
qp-kh
de-cg
ka-co
yn-aq
qp-ub
cg-tb
vc-aq
tb-ka
wh-tc
yn-cg
kh-ub
ta-co
de-co
tc-td
tb-wq
wh-td
ta-ka
td-qp
aq-cg
wq-ub
ub-vc
de-ta
wq-aq
wq-vc
wh-yn
ka-de
kh-ta
co-tc
wh-qp
tb-vc
td-yn
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Network::parse(EXAMPLE_INPUT)?;
        let result = <Day23 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 7);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Network::parse(EXAMPLE_INPUT)?;
        let result = <Day23 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, "co,de,ka,ta");
        Ok(())
    }

    #[test]
    fn malformed_connection_is_rejected() {
        assert!(Network::parse("kh-tc\nkhtc\n").is_err());
    }
}
