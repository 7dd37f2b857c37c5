use crate::engine::{BoundKey, Calc, Cursor};
use knapsack_model::Solution;
use knapsack_utils::{Count, Value, Weight};

impl<'a, W: Weight, V: Value, C: Count> Calc<'a, W, V, C> {
    /// Replays the memoised decisions from the current capacities and records
    /// every placed unit in `solution`. Capacities are consumed along the
    /// way, so this runs once, after the value has been computed.
    ///
    /// Returns the number of units placed.
    pub fn reconstruct(&mut self, solution: &mut Solution<V, C>) -> usize {
        let mut placed = 0;

        while let Some((item, k)) = self.unbound_step() {
            self.take(solution, k, item);
            placed += 1;
        }

        let mut at = self.start();
        while let Some(cursor) = at {
            at = match self.bound_step(cursor) {
                Some(k) => {
                    self.take(solution, k, cursor.item);
                    placed += 1;
                    self.after_place(cursor)
                }
                None => self.after_skip(cursor),
            };
        }
        placed
    }

    fn take(&mut self, solution: &mut Solution<V, C>, k: usize, item: usize) {
        self.sacks.decrease_by(k, self.problem.item(item).weight);
        solution.add(k, item);
    }

    // Entries may be missing for arrangements of equal capacities the solve
    // never visited; solving again fills them in from the memo.
    fn unbound_step(&mut self) -> Option<(usize, usize)> {
        self.solve_unbound();
        let (item, capacity) = self.unbound_memo.get(self.sacks.multiset())?.selected?;
        let k = self
            .sacks
            .capacities()
            .iter()
            .position(|&current| current == capacity)?;
        Some((item, k))
    }

    fn bound_step(&mut self, at: Cursor<C>) -> Option<usize> {
        self.solve_bound(at);
        self.bound_memo
            .get(&BoundKey::new(at, &self.sacks))?
            .selected
    }
}
