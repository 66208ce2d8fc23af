//! Ordered summation of double-precision sequences
//!
//! This crate provides the native routine a host statistical environment
//! calls to total a numeric vector. The routine is a plain left-to-right
//! accumulation: it does not reorder, pair up or compensate, so its rounding
//! matches the naive loop exactly.
//!
//! # Example
//!
//! ```rust
//! use seqsum_core::{sum, sum_numeric, NumericVector};
//!
//! assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0]), 10.0);
//!
//! // Integer vectors are widened to doubles before accumulation
//! assert_eq!(sum_numeric(&[1i32, 2, 3]), 6.0);
//!
//! // Missing values become NaN and poison the total
//! let v = NumericVector::from_nullable([Some(1.0), None]);
//! assert!(v.sum().is_nan());
//! ```

pub mod numeric;
pub mod sequence;
pub mod sum;

pub use numeric::Numeric;
pub use sequence::NumericVector;
pub use sum::{sum, sum_iter, sum_numeric};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{sum, sum_iter, sum_numeric, Numeric, NumericVector};
}
