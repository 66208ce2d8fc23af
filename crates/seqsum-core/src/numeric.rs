//! Numeric element types accepted by the coercing entry points
//!
//! Host environments hand over integer and single-precision vectors as often
//! as double-precision ones. Those are widened to `f64` one element at a time
//! before accumulation, so the running total is always a double.

use num_traits::AsPrimitive;
use std::fmt::Debug;

/// A primitive element type that can be widened to `f64`
///
/// Conversion follows Rust `as` semantics: integers beyond 2^53 round to the
/// nearest representable double, `f32` widens exactly.
pub trait Numeric: Copy + Debug + Send + Sync + 'static {
    /// Widen to a double
    fn to_f64(self) -> f64;
}

impl<T> Numeric for T
where
    T: AsPrimitive<f64> + Debug + Send + Sync,
{
    #[inline]
    fn to_f64(self) -> f64 {
        self.as_()
    }
}
