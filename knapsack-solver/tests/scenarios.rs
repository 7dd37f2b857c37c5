mod common;

use common::problem;
use knapsack_model::{Availability, Item, Problem, Solution};
use knapsack_solver::{run, solve, solve_with_placement};
use std::collections::BTreeMap;

fn content(entries: &[(usize, u64)]) -> BTreeMap<usize, u64> {
    entries.iter().copied().collect()
}

#[test]
fn test_single_sack_bounded_items() {
    let problem = problem(
        &[10],
        &[(5, Some(10), 1), (4, Some(7), 1), (6, Some(9), 1)],
    );
    assert_eq!(solve(&problem), 17);

    let solution = solve_with_placement(&problem);
    assert_eq!(solution.value, 17);
    assert_eq!(solution.sacks, vec![content(&[(0, 1), (1, 1)])]);
    problem.verify_solution(&solution).unwrap();
}

#[test]
fn test_single_unbound_item() {
    let problem = problem(&[7], &[(3, Some(4), 0)]);
    assert_eq!(solve(&problem), 8);

    let solution = solve_with_placement(&problem);
    assert_eq!(solution.sacks, vec![content(&[(0, 2)])]);
    problem.verify_solution(&solution).unwrap();
}

#[test]
fn test_bound_item_spread_over_equal_sacks() {
    let problem = problem(&[5, 5], &[(5, Some(5), 2)]);
    assert_eq!(solve(&problem), 10);

    let solution = solve_with_placement(&problem);
    assert_eq!(
        solution.sacks,
        vec![content(&[(0, 1)]), content(&[(0, 1)])]
    );
    problem.verify_solution(&solution).unwrap();
}

#[test]
fn test_item_fitting_nowhere() {
    let problem = problem(&[3], &[(5, None, 1)]);
    assert_eq!(solve(&problem), 0);

    let solution = solve_with_placement(&problem);
    assert_eq!(solution.value, 0);
    assert!(solution.is_empty());
    assert_eq!(solution.sacks.len(), 1);
}

#[test]
fn test_normalized_away_items() {
    let normalized = problem(&[3], &[(5, None, 1), (4, None, 0)]).normalize();
    assert_eq!(normalized.problem.num_items(), 0);

    let outcome = run(&normalized.problem, true);
    assert_eq!(outcome.solution, Solution::new(1));
    assert_eq!(outcome.stats.placed_units, 0);
}

#[test]
fn test_unbound_fills_after_bound() {
    // 4 + 3 + 3 beats three units of the unbound item
    let problem = problem(&[10], &[(3, None, 0), (4, Some(7), 1)]);
    assert_eq!(solve(&problem), 13);

    let solution = solve_with_placement(&problem);
    assert_eq!(solution.sacks, vec![content(&[(0, 2), (1, 1)])]);
}

#[test]
fn test_unbound_over_several_sacks() {
    let problem = problem(&[7, 7, 2], &[(3, Some(4), 0)]);
    assert_eq!(solve(&problem), 16);

    let solution = solve_with_placement(&problem);
    assert_eq!(solution.item_total(0), 4);
    assert!(solution.sacks[2].is_empty());
    problem.verify_solution(&solution).unwrap();
}

#[test]
fn test_placement_reports_original_sack_indices() {
    // Only the last sack is large enough for the heavy item
    let problem = problem(&[2, 3, 9], &[(8, Some(20), 1), (2, None, 2)]);
    let solution = solve_with_placement(&problem);
    assert_eq!(solution.value, 24);
    assert_eq!(solution.count(2, 0), 1);
    assert_eq!(solution.item_total(1), 2);
    problem.verify_solution(&solution).unwrap();
}

#[test]
fn test_float_values() {
    let items = vec![
        Item::new(0, 3u32, Some(1.5f64), Availability::Unbounded).unwrap(),
        Item::new(1, 5u32, Some(2.75f64), Availability::Bounded(1u8)).unwrap(),
    ];
    let problem = Problem::new(vec![8u32], items).unwrap();
    let solution = solve_with_placement(&problem);
    assert_eq!(solution.value, 4.25);
    problem.verify_solution(&solution).unwrap();
}

#[test]
fn test_stats() {
    let problem = problem(&[6, 4], &[(2, Some(3), 0), (3, Some(5), 2)]);
    let outcome = run(&problem, false);
    assert!(outcome.solution.is_empty());
    assert_eq!(outcome.stats.placed_units, 0);
    assert!(outcome.stats.unbound_states > 0);
    assert!(outcome.stats.bound_states > 0);

    let outcome = run(&problem, true);
    let placed: u64 = outcome
        .solution
        .sacks
        .iter()
        .flat_map(|content| content.values())
        .sum();
    assert_eq!(outcome.stats.placed_units as u64, placed);
    problem.verify_solution(&outcome.solution).unwrap();
}

#[test]
fn test_values_near_the_type_limit() {
    let problem = problem(&[2], &[(1, Some(u64::MAX / 2), 0)]);
    assert_eq!(solve(&problem), u64::MAX - 1);

    let solution = solve_with_placement(&problem);
    assert_eq!(solution.sacks, vec![content(&[(0, 2)])]);
    problem.verify_solution(&solution).unwrap();
}
