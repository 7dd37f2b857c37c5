use crate::{
    core::{Availability, Problem, Solution},
    error::{ModelError, ModelResult},
};
use knapsack_utils::{checked_value_add, checked_value_mul, Count, Value, Weight};
use num_traits::cast;

impl<W: Weight, V: Value, C: Count> Problem<W, V, C> {
    /// Checks that `solution` is a feasible placement for this instance and
    /// returns the total value it achieves. The claimed `solution.value` is
    /// not looked at.
    pub fn evaluate_solution(&self, solution: &Solution<V, C>) -> ModelResult<V> {
        if solution.sacks.len() != self.num_sacks() {
            return Err(ModelError::SackCount {
                expected: self.num_sacks(),
                actual: solution.sacks.len(),
            });
        }

        let mut totals = vec![C::zero(); self.num_items()];
        let mut total_value = V::zero();
        for (sack, content) in solution.sacks.iter().enumerate() {
            let overflow = || ModelError::Overflow { sack };
            let mut used = W::zero();
            for (&item, &count) in content {
                let entry = self
                    .items()
                    .get(item)
                    .ok_or(ModelError::ItemIndex { item })?;
                let weight = cast::<C, W>(count)
                    .and_then(|count| entry.weight.checked_mul(&count))
                    .ok_or_else(overflow)?;
                used = used.checked_add(&weight).ok_or_else(overflow)?;
                totals[item] = totals[item].checked_add(&count).ok_or_else(overflow)?;
                total_value = cast::<C, V>(count)
                    .and_then(|count| checked_value_mul(entry.value, count))
                    .and_then(|value| checked_value_add(total_value, value))
                    .ok_or_else(overflow)?;
            }
            let capacity = self.sacks()[sack];
            if used > capacity {
                return Err(ModelError::Overweight {
                    sack,
                    weight: used.to_string(),
                    capacity: capacity.to_string(),
                });
            }
        }

        for (item, &total) in totals.iter().enumerate() {
            if let Availability::Bounded(bound) = self.item(item).availability {
                if total > bound {
                    return Err(ModelError::CountExceeded {
                        item,
                        count: total.to_string(),
                        bound: bound.to_string(),
                    });
                }
            }
        }
        Ok(total_value)
    }

    /// Like [`Problem::evaluate_solution`], but also requires the claimed
    /// value to match the placement.
    pub fn verify_solution(&self, solution: &Solution<V, C>) -> ModelResult<()> {
        let actual = self.evaluate_solution(solution)?;
        if !values_match(solution.value, actual) {
            return Err(ModelError::ValueMismatch {
                claimed: solution.value.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }
}

/// Equality for integer values, a relative tolerance for floating point
/// values whose sums depend on the order of addition.
pub fn values_match<V: Value>(a: V, b: V) -> bool {
    if a == b {
        return true;
    }
    let fractional = cast::<f64, V>(0.5).is_some_and(|half| half > V::zero());
    if !fractional {
        return false;
    }
    match (a.to_f64(), b.to_f64()) {
        (Some(a), Some(b)) => {
            let scale = a.abs().max(b.abs()).max(1.0);
            (a - b).abs() <= 1e-9 * scale
        }
        _ => false,
    }
}
