//! Common test utilities for seqsum-polars tests

use polars::prelude::*;

/// Helper function to create a test DataFrame with specific values
pub fn create_test_df(values: &[f64]) -> DataFrame {
    df!["values" => values].unwrap()
}

/// Helper function to extract a single value from a result DataFrame
pub fn extract_single_value(df: &DataFrame, col_name: &str) -> f64 {
    df.column(col_name)
        .unwrap()
        .f64()
        .unwrap()
        .get(0)
        .unwrap()
}
