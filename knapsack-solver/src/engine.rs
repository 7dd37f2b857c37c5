use crate::{sack_set::SackSet, HashMap};
use knapsack_model::Problem;
use knapsack_utils::{Count, Value, Weight};
use std::ops::{Deref, DerefMut};

/// A decision point of the bound recurrence: how many units of `item` may
/// still be placed, starting at sack `occurrence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Cursor<C> {
    pub item: usize,
    pub count: C,
    pub occurrence: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct BoundKey<W, C> {
    cursor: Cursor<C>,
    sacks: Box<[W]>,
}

impl<W: Weight, C: Count> BoundKey<W, C> {
    pub fn new(cursor: Cursor<C>, sacks: &SackSet<W>) -> Self {
        Self {
            cursor,
            sacks: sacks.cursor_key(cursor.occurrence),
        }
    }
}

/// `selected` names the item and the capacity of the sack taking the first
/// unbound unit on an optimal path; `None` means falling back to the bound
/// recurrence. The sack is named by capacity since the memo does not know
/// which occurrence held it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UnboundEntry<W, V> {
    pub value: V,
    pub selected: Option<(usize, W)>,
}

/// `selected` is the cursor's sack when one unit is placed there, `None`
/// when the cursor moves on.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BoundEntry<V> {
    pub value: V,
    pub selected: Option<usize>,
}

/// Scratch state of one solve call. Nothing in here outlives the call.
pub(crate) struct Calc<'a, W, V, C> {
    pub problem: &'a Problem<W, V, C>,
    pub sacks: SackSet<W>,
    pub unbound_memo: HashMap<Box<[W]>, UnboundEntry<W, V>>,
    pub bound_memo: HashMap<BoundKey<W, C>, BoundEntry<V>>,
    /// Unbound item indices, ascending.
    pub unbound: Vec<usize>,
    first_bound: Option<usize>,
    next_bound: Vec<Option<usize>>,
}

impl<'a, W: Weight, V: Value, C: Count> Calc<'a, W, V, C> {
    pub fn new(problem: &'a Problem<W, V, C>) -> Self {
        let n = problem.num_items();
        let mut next_bound = vec![None; n];
        let mut next = None;
        for i in (0..n).rev() {
            next_bound[i] = next;
            if problem.item(i).is_bound() {
                next = Some(i);
            }
        }
        Self {
            problem,
            sacks: SackSet::new(problem.sacks()),
            unbound_memo: HashMap::default(),
            bound_memo: HashMap::default(),
            unbound: (0..n).filter(|&i| !problem.item(i).is_bound()).collect(),
            first_bound: next,
            next_bound,
        }
    }

    /// Where the bound recurrence starts: the first bound item with its
    /// full count, at the first sack.
    pub fn start(&self) -> Option<Cursor<C>> {
        self.first_bound.map(|item| self.fresh(item))
    }

    /// Next decision point when no unit goes to the cursor's sack.
    pub fn after_skip(&self, at: Cursor<C>) -> Option<Cursor<C>> {
        if at.occurrence + 1 < self.sacks.len() {
            Some(Cursor {
                occurrence: at.occurrence + 1,
                ..at
            })
        } else {
            self.next_bound[at.item].map(|item| self.fresh(item))
        }
    }

    /// Next decision point after one unit went to the cursor's sack. The
    /// same sack stays open for further units of the same item.
    pub fn after_place(&self, at: Cursor<C>) -> Option<Cursor<C>> {
        let count = at.count - C::one();
        if count.is_zero() {
            self.next_bound[at.item].map(|item| self.fresh(item))
        } else {
            Some(Cursor { count, ..at })
        }
    }

    fn fresh(&self, item: usize) -> Cursor<C> {
        Cursor {
            item,
            count: self.problem.item(item).availability.to_count(),
            occurrence: 0,
        }
    }

    /// Takes `weight` out of sack `occurrence` until the returned guard is
    /// dropped. Recursing through the guard sees the reduced capacity.
    pub fn place(&mut self, occurrence: usize, weight: W) -> Placed<'_, 'a, W, V, C> {
        let previous = self.sacks.get(occurrence);
        self.sacks.decrease_to(occurrence, previous - weight);
        Placed {
            calc: self,
            occurrence,
            previous,
        }
    }
}

/// Restores the capacity taken by [`Calc::place`] on every exit path.
pub(crate) struct Placed<'c, 'a, W: Weight, V: Value, C: Count> {
    calc: &'c mut Calc<'a, W, V, C>,
    occurrence: usize,
    previous: W,
}

impl<'c, 'a, W: Weight, V: Value, C: Count> Deref for Placed<'c, 'a, W, V, C> {
    type Target = Calc<'a, W, V, C>;

    fn deref(&self) -> &Self::Target {
        self.calc
    }
}

impl<'c, 'a, W: Weight, V: Value, C: Count> DerefMut for Placed<'c, 'a, W, V, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.calc
    }
}

impl<'c, 'a, W: Weight, V: Value, C: Count> Drop for Placed<'c, 'a, W, V, C> {
    fn drop(&mut self) {
        self.calc.sacks.increase_to(self.occurrence, self.previous);
    }
}
