//! Left-to-right summation
//!
//! Every entry point seeds the accumulator with `0.0` and adds elements in
//! input order, one at a time. No lane splitting, pairing or compensation is
//! performed, so the rounding of the result is exactly that of the naive loop.

use crate::numeric::Numeric;

/// Sum a slice of doubles in index order
///
/// Returns `0.0` for an empty slice. NaN and infinities follow IEEE-754
/// addition, so a NaN anywhere, or both infinities, yields NaN.
///
/// # Example
///
/// ```rust
/// use seqsum_core::sum;
///
/// assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0]), 10.0);
/// assert_eq!(sum(&[]), 0.0);
/// ```
#[inline]
pub fn sum(values: &[f64]) -> f64 {
    let mut total = 0.0;
    for &v in values {
        total += v;
    }
    total
}

/// Sum the items of an iterator in iteration order
#[inline]
pub fn sum_iter<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(0.0, |acc, v| acc + v)
}

/// Widen each element to `f64` and sum in index order
///
/// Integers are never accumulated in their own type.
#[inline]
pub fn sum_numeric<T: Numeric>(values: &[T]) -> f64 {
    sum_iter(values.iter().map(|&v| v.to_f64()))
}
