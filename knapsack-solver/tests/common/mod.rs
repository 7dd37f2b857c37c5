#![allow(dead_code)]

use knapsack_model::{Availability, Item, Problem};
use std::collections::HashMap;

pub fn problem(sacks: &[u64], items: &[(u64, Option<u64>, u64)]) -> Problem<u64, u64, u64> {
    let items = items
        .iter()
        .enumerate()
        .map(|(index, &(weight, value, count))| {
            Item::new(index, weight, value, Availability::from_count(count)).unwrap()
        })
        .collect();
    Problem::new(sacks.to_vec(), items).unwrap()
}

type Key = (usize, usize, Option<u64>, Vec<u64>);

/// Tries every way of distributing every item over every sack, sack by sack
/// in index order. Results are cached on the exact capacity vector, so no
/// symmetry between sacks is exploited.
pub fn brute_force(problem: &Problem<u64, u64, u64>) -> u64 {
    fn go(
        problem: &Problem<u64, u64, u64>,
        seen: &mut HashMap<Key, u64>,
        capacities: &mut Vec<u64>,
        item: usize,
        sack: usize,
        left: Option<u64>,
    ) -> u64 {
        if item == problem.num_items() {
            return 0;
        }
        if sack == capacities.len() {
            let left = problem
                .items()
                .get(item + 1)
                .and_then(|next| next.availability.bound());
            return go(problem, seen, capacities, item + 1, 0, left);
        }
        let key = (item, sack, left, capacities.clone());
        if let Some(&value) = seen.get(&key) {
            return value;
        }
        let current = problem.item(item);
        let fitting = capacities[sack] / current.weight;
        let most = left.map_or(fitting, |left| left.min(fitting));
        let mut best = 0;
        for units in 0..=most {
            capacities[sack] -= units * current.weight;
            let value = units * current.value
                + go(
                    problem,
                    seen,
                    capacities,
                    item,
                    sack + 1,
                    left.map(|left| left - units),
                );
            capacities[sack] += units * current.weight;
            best = best.max(value);
        }
        seen.insert(key, best);
        best
    }

    let mut capacities = problem.sacks().to_vec();
    let left = problem.item(0).availability.bound();
    go(problem, &mut HashMap::new(), &mut capacities, 0, 0, left)
}
