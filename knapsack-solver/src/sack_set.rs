use knapsack_utils::Weight;
use std::hash::{Hash, Hasher};

/// Remaining capacities of all sacks, compared and hashed as a multiset.
///
/// Occurrence `k` is a stable label for the `k`-th sack during one solve, so
/// the recursion can address a sack without knowing its current capacity.
/// Two sets are equal whenever their capacity multisets are, no matter
/// which occurrence holds which capacity.
#[derive(Debug, Clone)]
pub struct SackSet<W> {
    occurrences: Vec<W>,
    sorted: Vec<W>,
}

impl<W: Weight> SackSet<W> {
    pub fn new(capacities: &[W]) -> Self {
        let mut sorted = capacities.to_vec();
        sorted.sort_unstable();
        Self {
            occurrences: capacities.to_vec(),
            sorted,
        }
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Current capacity of occurrence `k`.
    pub fn get(&self, k: usize) -> W {
        self.occurrences[k]
    }

    /// Capacities in occurrence order.
    pub fn capacities(&self) -> &[W] {
        &self.occurrences
    }

    /// Capacities in ascending order; the canonical form of the set.
    pub fn multiset(&self) -> &[W] {
        &self.sorted
    }

    /// The caller guarantees `amount <= self.get(k)`.
    pub fn decrease_by(&mut self, k: usize, amount: W) {
        let capacity = self.occurrences[k];
        self.replace(k, capacity - amount);
    }

    pub fn decrease_to(&mut self, k: usize, capacity: W) {
        debug_assert!(capacity <= self.occurrences[k]);
        self.replace(k, capacity);
    }

    /// Undoes a [`SackSet::decrease_to`].
    pub fn increase_to(&mut self, k: usize, capacity: W) {
        debug_assert!(capacity >= self.occurrences[k]);
        self.replace(k, capacity);
    }

    /// Canonical form relative to a cursor at occurrence `k`: the sorted
    /// capacities before `k`, the capacity at `k`, then the sorted
    /// capacities after `k`. Sacks are only interchangeable within the
    /// same side of the cursor.
    pub fn cursor_key(&self, k: usize) -> Box<[W]> {
        let mut key = self.occurrences.clone();
        key[..k].sort_unstable();
        key[k + 1..].sort_unstable();
        key.into_boxed_slice()
    }

    fn replace(&mut self, k: usize, capacity: W) {
        let previous = std::mem::replace(&mut self.occurrences[k], capacity);
        let from = self.sorted.partition_point(|&w| w < previous);
        debug_assert!(self.sorted[from] == previous);
        self.sorted.remove(from);
        let to = self.sorted.partition_point(|&w| w < capacity);
        self.sorted.insert(to, capacity);
    }
}

impl<W: PartialEq> PartialEq for SackSet<W> {
    fn eq(&self, other: &Self) -> bool {
        self.sorted == other.sorted
    }
}

impl<W: Eq> Eq for SackSet<W> {}

impl<W: Hash> Hash for SackSet<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted.hash(state);
    }
}
