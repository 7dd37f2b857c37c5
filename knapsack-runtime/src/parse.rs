use anyhow::{bail, Result};
use knapsack_model::{Availability, Item, Problem};
use knapsack_utils::{parse_number, parse_value, NumberError, Value};

/// Separators between count and capacity in a sack argument.
pub const SACK_SEPARATORS: &[char] = &['*', ':', 'x', 'X'];
/// Separators between count and weight in an item argument. Whitespace is
/// accepted so that `2 5` can be passed as one quoted argument.
pub const COUNT_SEPARATORS: &[char] = &['*', ':', 'x', 'X', ' ', '\t', '\r', '\n'];
/// Separators between weight and value in an item argument.
pub const VALUE_SEPARATORS: &[char] = &['=', '~', '#', '@'];

/// Expands one `[count*]capacity` argument into its capacities.
pub fn parse_sacks(arg: &str) -> Result<Vec<u64>, NumberError> {
    match arg.split_once(SACK_SEPARATORS) {
        None => Ok(vec![parse_number(arg, false)?]),
        Some((count, capacity)) => {
            let count = parse_number::<usize>(count, false)?;
            let capacity = parse_number(capacity, false)?;
            Ok(vec![capacity; count])
        }
    }
}

/// One `[N*]weight[=value]` argument. The value is kept as text until the
/// value type is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemArg<'a> {
    /// Zero stands for an unlimited supply.
    pub count: u64,
    pub weight: u64,
    pub value: Option<&'a str>,
}

pub fn parse_item(arg: &str) -> Result<ItemArg<'_>, NumberError> {
    let (count, rest) = match arg.split_once(COUNT_SEPARATORS) {
        Some((count, rest)) => (parse_number(count, true)?, rest),
        None => (1, arg),
    };
    let (weight, value) = match rest.split_once(VALUE_SEPARATORS) {
        Some((weight, value)) => (weight, Some(value)),
        None => (rest, None),
    };
    Ok(ItemArg {
        count,
        weight: parse_number(weight, false)?,
        value,
    })
}

/// Values of the integer front end.
pub fn integer_value(s: &str) -> Result<u64, NumberError> {
    parse_number(s, false)
}

/// Values of the floating point front end.
pub fn float_value(s: &str) -> Result<f64, NumberError> {
    parse_value(s)
}

/// Builds the instance described by the `-s` arguments and the item
/// arguments, parsing explicit values with `value`.
pub fn build_problem<V, S, I, F>(sacks: S, items: I, value: F) -> Result<Problem<u64, V, u64>>
where
    V: Value,
    S: IntoIterator,
    S::Item: AsRef<str>,
    I: IntoIterator,
    I::Item: AsRef<str>,
    F: Fn(&str) -> Result<V, NumberError>,
{
    let mut capacities = Vec::new();
    for arg in sacks {
        capacities.extend(parse_sacks(arg.as_ref())?);
    }
    if capacities.is_empty() {
        bail!("no knapsack specified (with option -s)");
    }

    let mut parsed = Vec::new();
    for (index, arg) in items.into_iter().enumerate() {
        let arg = parse_item(arg.as_ref())?;
        let explicit = arg.value.map(&value).transpose()?;
        parsed.push(Item::new(
            index,
            arg.weight,
            explicit,
            Availability::from_count(arg.count),
        )?);
    }
    if parsed.is_empty() {
        bail!("no items specified");
    }
    Ok(Problem::new(capacities, parsed)?)
}
