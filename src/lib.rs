//! Ordered summation of double-precision sequences
//!
//! Umbrella crate re-exporting the summation core and its Polars binding.
//!
//! # Example
//!
//! ```rust
//! use seqsum::sum;
//!
//! assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0]), 10.0);
//! assert_eq!(sum(&[1e16, 1.0, -1e16]), 0.0);
//! ```

pub use seqsum_core::*;

/// Polars host binding
pub mod polars {
    pub use seqsum_polars::*;
}
