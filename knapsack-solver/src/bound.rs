use crate::engine::{BoundEntry, BoundKey, Calc, Cursor};
use knapsack_utils::{Count, Value, Weight};

impl<'a, W: Weight, V: Value, C: Count> Calc<'a, W, V, C> {
    /// Best value from bound items only, deciding for `at.item` whether one
    /// more unit goes to sack `at.occurrence`, then moving on through the
    /// remaining sacks and bound items in index order.
    pub fn solve_bound(&mut self, at: Cursor<C>) -> V {
        let key = BoundKey::new(at, &self.sacks);
        if let Some(entry) = self.bound_memo.get(&key) {
            return entry.value;
        }

        let skip = match self.after_skip(at) {
            Some(next) => self.solve_bound(next),
            None => V::zero(),
        };
        let mut entry = BoundEntry {
            value: skip,
            selected: None,
        };

        let (weight, value) = {
            let item = self.problem.item(at.item);
            (item.weight, item.value)
        };
        if weight <= self.sacks.get(at.occurrence) {
            let candidate = match self.after_place(at) {
                Some(next) => self.place(at.occurrence, weight).solve_bound(next) + value,
                None => value,
            };
            // Ties keep the skip
            if candidate > entry.value {
                entry = BoundEntry {
                    value: candidate,
                    selected: Some(at.occurrence),
                };
            }
        }

        self.bound_memo.insert(key, entry);
        entry.value
    }
}
