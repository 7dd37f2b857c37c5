use crate::engine::{Calc, UnboundEntry};
use knapsack_utils::{Count, Value, Weight};

impl<'a, W: Weight, V: Value, C: Count> Calc<'a, W, V, C> {
    /// Best value reachable from the current capacities. Unbound items are
    /// placed one unit at a time; not placing any further unbound unit hands
    /// the rest over to the bound recurrence.
    ///
    /// Since unbound items never run out, the capacities alone determine the
    /// answer and the memo is keyed by the capacity multiset only.
    pub fn solve_unbound(&mut self) -> V {
        if let Some(entry) = self.unbound_memo.get(self.sacks.multiset()) {
            return entry.value;
        }

        let fallback = match self.start() {
            Some(cursor) => self.solve_bound(cursor),
            None => V::zero(),
        };
        let mut entry = UnboundEntry {
            value: fallback,
            selected: None,
        };

        let mut tried = Vec::with_capacity(self.sacks.len());
        for index in 0..self.unbound.len() {
            let item = self.unbound[index];
            let (weight, value) = {
                let item = self.problem.item(item);
                (item.weight, item.value)
            };
            // Sacks with equal capacity lead to the same multiset
            tried.clear();
            for k in 0..self.sacks.len() {
                let capacity = self.sacks.get(k);
                if weight > capacity || tried.contains(&capacity) {
                    continue;
                }
                tried.push(capacity);
                let candidate = self.place(k, weight).solve_unbound() + value;
                if candidate > entry.value {
                    entry = UnboundEntry {
                        value: candidate,
                        selected: Some((item, capacity)),
                    };
                }
            }
        }

        self.unbound_memo
            .insert(self.sacks.multiset().into(), entry);
        entry.value
    }
}
