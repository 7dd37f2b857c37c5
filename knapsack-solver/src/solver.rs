use crate::engine::Calc;
use knapsack_model::{Problem, Solution};
use knapsack_utils::{Count, Value, Weight};
use tracing::debug;

/// Sizes of the memo tables after a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub unbound_states: usize,
    pub bound_states: usize,
    /// Units placed by the reconstruction, zero when none was asked for.
    pub placed_units: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<V, C> {
    /// Always carries the optimal value. The sack contents are only filled
    /// in when a placement was requested.
    pub solution: Solution<V, C>,
    pub stats: SolveStats,
}

/// Computes the optimal value of `problem` and, if `placement` is set, one
/// placement achieving it.
#[tracing::instrument(
    skip_all,
    fields(items = problem.num_items(), sacks = problem.num_sacks(), placement = placement)
)]
pub fn run<W: Weight, V: Value, C: Count>(
    problem: &Problem<W, V, C>,
    placement: bool,
) -> Outcome<V, C> {
    let mut solution = Solution::new(problem.num_sacks());
    if problem.num_items() == 0 || problem.num_sacks() == 0 {
        return Outcome {
            solution,
            stats: SolveStats::default(),
        };
    }

    let mut calc = Calc::new(problem);
    solution.value = calc.solve_unbound();
    let mut stats = SolveStats {
        unbound_states: calc.unbound_memo.len(),
        bound_states: calc.bound_memo.len(),
        placed_units: 0,
    };
    debug!(
        value = %solution.value,
        unbound_states = stats.unbound_states,
        bound_states = stats.bound_states,
        "solved"
    );

    if placement {
        stats.placed_units = calc.reconstruct(&mut solution);
        debug!(placed_units = stats.placed_units, "reconstructed");
    }
    Outcome { solution, stats }
}

/// The optimal total value of `problem`.
pub fn solve<W: Weight, V: Value, C: Count>(problem: &Problem<W, V, C>) -> V {
    run(problem, false).solution.value
}

/// The optimal total value of `problem` together with the sack contents
/// achieving it.
pub fn solve_with_placement<W: Weight, V: Value, C: Count>(
    problem: &Problem<W, V, C>,
) -> Solution<V, C> {
    run(problem, true).solution
}
