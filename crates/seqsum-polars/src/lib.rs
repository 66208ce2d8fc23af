//! Polars integration for ordered double-precision summation
//!
//! This crate is the host binding layer: it converts Polars columns into the
//! ordered sequence of doubles that `seqsum-core` sums, and reports the
//! conversion failures the core routine never sees.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use seqsum_polars::{SumExt, SumConfig, NullPolicy};
//!
//! let df = df!["values" => [1.0, 2.0, 3.0, 4.0]]?;
//!
//! let totals = df.column_sums(&["values"])?;
//! let skipped = df.column_sums_with(
//!     &["values"],
//!     &SumConfig::new().with_null_policy(NullPolicy::Skip),
//! )?;
//! ```

mod config;
mod error;
mod methods;
mod traits;

pub use config::*;
pub use error::{Error, Result};
pub use methods::sum_column;
pub use traits::*;

// Re-export commonly used types from dependencies
pub use seqsum_core::{sum, NumericVector};
