//! Extension trait for summing Polars DataFrame columns

use polars::prelude::*;
use crate::{Result, SumConfig};

/// Extension trait for ordered summation on Polars DataFrames
pub trait SumExt {
    /// Sum a single column with the default configuration
    ///
    /// # Arguments
    /// * `column` - Column name
    ///
    /// # Returns
    /// The left-to-right sum of the column, `0.0` when it is empty
    fn column_sum(&self, column: &str) -> Result<f64>;

    /// Sum a single column with a custom configuration
    fn column_sum_with(&self, column: &str, config: &SumConfig) -> Result<f64>;

    /// Sum several columns with the default configuration
    ///
    /// # Arguments
    /// * `columns` - Column names to sum
    ///
    /// # Returns
    /// One-row DataFrame with columns named `{column}_sum`
    fn column_sums(&self, columns: &[&str]) -> Result<DataFrame>;

    /// Sum several columns with a custom configuration
    ///
    /// # Arguments
    /// * `columns` - Column names to sum
    /// * `config` - Null policy and output naming
    ///
    /// # Returns
    /// One-row DataFrame with columns named `{column}{suffix}`, in request order
    fn column_sums_with(&self, columns: &[&str], config: &SumConfig) -> Result<DataFrame>;
}
