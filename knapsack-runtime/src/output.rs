use anyhow::{anyhow, Result};
use knapsack_model::{Problem, Solution};
use knapsack_utils::{checked_value_add, checked_value_mul, jsonify, Value};
use num_traits::cast;
use serde::Serialize;
use std::fmt::Write;

/// Renders `solution` as text: the optimal value on the first line, then one
/// line per non-empty sack in sack order.
///
/// A sack line reads `used|capacity: entries`. As soon as one item in the
/// sack has an explicit value, the achieved value is added as
/// `used(achieved)|capacity: entries`. Entries are `w` or `n*w=total` for
/// items valued by their weight, `w(v)` or `n*w=tw(n*v=tv)` otherwise.
pub fn format_text<V: Value>(
    problem: &Problem<u64, V, u64>,
    solution: &Solution<V, u64>,
) -> Result<String> {
    let mut out = format!("{}\n", solution.value);
    for (sack, content) in solution.sacks.iter().enumerate() {
        if content.is_empty() {
            continue;
        }
        let mut used = 0u64;
        let mut achieved = V::zero();
        let mut explicit = false;
        let mut entries = Vec::with_capacity(content.len());
        for (&index, &count) in content {
            let item = problem.item(index);
            let weight = count
                .checked_mul(item.weight)
                .ok_or_else(|| anyhow!("weight overflow in sack {}", sack))?;
            let value = cast::<u64, V>(count)
                .and_then(|count| checked_value_mul(item.value, count))
                .ok_or_else(|| anyhow!("value overflow in sack {}", sack))?;
            used = used
                .checked_add(weight)
                .ok_or_else(|| anyhow!("weight overflow in sack {}", sack))?;
            achieved = checked_value_add(achieved, value)
                .ok_or_else(|| anyhow!("value overflow in sack {}", sack))?;

            let entry = match (item.explicit_value, count) {
                (false, 1) => format!("{}", item.weight),
                (false, _) => format!("{}*{}={}", count, item.weight, weight),
                (true, 1) => format!("{}({})", item.weight, item.value),
                (true, _) => format!(
                    "{}*{}={}({}*{}={})",
                    count, item.weight, weight, count, item.value, value
                ),
            };
            explicit |= item.explicit_value;
            entries.push(entry);
        }

        let capacity = problem.sacks()[sack];
        if explicit {
            write!(out, "{}({})|{}: ", used, achieved, capacity)?;
        } else {
            write!(out, "{}|{}: ", used, capacity)?;
        }
        writeln!(out, "{}", entries.join(" "))?;
    }
    Ok(out)
}

/// Renders `solution` as a single line of key-sorted JSON.
pub fn format_json<T: Serialize>(solution: &T) -> Result<String> {
    Ok(format!("{}\n", jsonify(solution)?))
}
