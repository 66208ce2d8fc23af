//! Materialized input sequences
//!
//! [`NumericVector`] is the ordered run of doubles the summation routine is
//! entered with. A binding layer builds one from whatever the host holds:
//! doubles are borrowed as-is, other element types are widened into an owned
//! buffer, and missing values become NaN.

use std::borrow::Cow;

use crate::numeric::Numeric;
use crate::sum::sum;

/// Ordered sequence of doubles, borrowed or owned
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericVector<'a> {
    values: Cow<'a, [f64]>,
}

impl<'a> NumericVector<'a> {
    /// Wrap an existing slice without copying
    pub fn borrowed(values: &'a [f64]) -> Self {
        Self {
            values: Cow::Borrowed(values),
        }
    }

    /// Widen a slice of any primitive numeric type
    pub fn from_numeric<T: Numeric>(values: &[T]) -> NumericVector<'static> {
        NumericVector {
            values: Cow::Owned(values.iter().map(|&v| v.to_f64()).collect()),
        }
    }

    /// Build from optional values, mapping `None` to NaN
    ///
    /// This mirrors how a host statistical environment stores a missing
    /// double, so a single missing element makes the sum NaN.
    pub fn from_nullable<I>(values: I) -> NumericVector<'static>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        NumericVector {
            values: Cow::Owned(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Whether the values are still the caller's buffer
    pub fn is_borrowed(&self) -> bool {
        matches!(self.values, Cow::Borrowed(_))
    }

    pub fn into_owned(self) -> Vec<f64> {
        self.values.into_owned()
    }

    /// Left-to-right sum of the sequence
    pub fn sum(&self) -> f64 {
        sum(&self.values)
    }
}

impl<'a> From<&'a [f64]> for NumericVector<'a> {
    fn from(values: &'a [f64]) -> Self {
        Self::borrowed(values)
    }
}

impl From<Vec<f64>> for NumericVector<'static> {
    fn from(values: Vec<f64>) -> Self {
        Self {
            values: Cow::Owned(values),
        }
    }
}

impl FromIterator<f64> for NumericVector<'static> {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: Cow::Owned(iter.into_iter().collect()),
        }
    }
}

impl<'a, 'b> IntoIterator for &'b NumericVector<'a> {
    type Item = &'b f64;
    type IntoIter = std::slice::Iter<'b, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
