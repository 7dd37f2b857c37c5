use num_traits::{Bounded, NumCast, PrimInt, Unsigned, Zero};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Div, Mul, Sub},
};
use thiserror::Error;

/// Capacities and item weights.
pub trait Weight: PrimInt + Unsigned + Hash + Debug + Display + Send + Sync {}

impl<T> Weight for T where T: PrimInt + Unsigned + Hash + Debug + Display + Send + Sync {}

/// Availability bounds and placed counts.
pub trait Count: PrimInt + Unsigned + Hash + Debug + Display + Send + Sync {}

impl<T> Count for T where T: PrimInt + Unsigned + Hash + Debug + Display + Send + Sync {}

/// Item values. Implemented by the unsigned integers as well as by `f64`, so
/// values are only required to be ordered, not totally ordered.
pub trait Value:
    Copy
    + PartialOrd
    + Zero
    + Bounded
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + NumCast
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> Value for T where
    T: Copy
        + PartialOrd
        + Zero
        + Bounded
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + NumCast
        + Debug
        + Display
        + Send
        + Sync
{
}

/// `a + b` for non-negative values, `None` past `V::max_value()`.
pub fn checked_value_add<V: Value>(a: V, b: V) -> Option<V> {
    if a > V::max_value() - b {
        None
    } else {
        Some(a + b)
    }
}

/// `a * n` for non-negative values, `None` past `V::max_value()`.
pub fn checked_value_mul<V: Value>(a: V, n: V) -> Option<V> {
    if n == V::zero() {
        Some(V::zero())
    } else if a > V::max_value() / n {
        None
    } else {
        Some(a * n)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("number overflow in {0}")]
    Overflow(String),
    #[error("not a positive integer: {0}")]
    NotPositive(String),
    #[error("not a number: {0}")]
    Malformed(String),
    #[error("value is not positive: {0}")]
    NonPositiveValue(String),
}

/// Parses an unsigned decimal literal with an optional leading `+`.
///
/// Every digit step is checked, so a literal that does not fit into `T` is
/// reported as [`NumberError::Overflow`] instead of wrapping around.
pub fn parse_number<T>(s: &str, allow_zero: bool) -> Result<T, NumberError>
where
    T: PrimInt + Unsigned,
{
    let digits = s.strip_prefix('+').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_digit()) {
        return Err(NumberError::Malformed(s.to_string()));
    }
    let overflow = || NumberError::Overflow(s.to_string());
    let ten = <T as NumCast>::from(10u8).ok_or_else(overflow)?;
    let mut number = T::zero();
    for c in digits.bytes() {
        let digit = <T as NumCast>::from(c - b'0').ok_or_else(overflow)?;
        number = number
            .checked_mul(&ten)
            .and_then(|n| n.checked_add(&digit))
            .ok_or_else(overflow)?;
    }
    if number.is_zero() && !allow_zero {
        return Err(NumberError::NotPositive(s.to_string()));
    }
    Ok(number)
}

/// Parses a floating point item value, which must be finite and positive.
pub fn parse_value(s: &str) -> Result<f64, NumberError> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| NumberError::Malformed(s.to_string()))?;
    if !value.is_finite() {
        return Err(NumberError::Malformed(s.to_string()));
    }
    if value <= 0.0 {
        return Err(NumberError::NonPositiveValue(s.to_string()));
    }
    Ok(value)
}
