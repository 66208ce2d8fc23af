//! Tests for edge cases and error handling

mod common;

use common::{create_test_df, extract_single_value};
use polars::prelude::*;
use seqsum_polars::{Error, NullPolicy, SumConfig, SumExt};

#[test]
fn test_empty_data() {
    let df = DataFrame::new(vec![
        Series::new(PlSmallStr::from("values"), Vec::<f64>::new()).into()
    ]).unwrap();

    // Empty input sums to the additive identity
    let result = df.column_sums(&["values"]).unwrap();
    assert_eq!(result.shape(), (1, 1));
    assert_eq!(extract_single_value(&result, "values_sum"), 0.0);
}

#[test]
fn test_empty_integer_column() {
    let df = DataFrame::new(vec![
        Series::new(PlSmallStr::from("values"), Vec::<i32>::new()).into()
    ]).unwrap();

    assert_eq!(df.column_sum("values").unwrap(), 0.0);
}

#[test]
fn test_single_value() {
    for x in [0.0, -42.0, 5e-324] {
        let df = create_test_df(&[x]);
        assert_eq!(df.column_sum("values").unwrap(), x);
    }
}

#[test]
fn test_nan_propagates() {
    let df = create_test_df(&[1.0, f64::NAN, 2.0]);
    assert!(df.column_sum("values").unwrap().is_nan());
}

#[test]
fn test_nan_is_not_a_null() {
    // Skip only drops nulls; NaN is a value
    let df = create_test_df(&[1.0, f64::NAN]);
    let config = SumConfig::new().with_null_policy(NullPolicy::Skip);
    assert!(df.column_sum_with("values", &config).unwrap().is_nan());

    let config = SumConfig::new().with_null_policy(NullPolicy::Reject);
    assert!(df.column_sum_with("values", &config).unwrap().is_nan());
}

#[test]
fn test_opposite_infinities() {
    let df = create_test_df(&[f64::INFINITY, f64::NEG_INFINITY]);
    assert!(df.column_sum("values").unwrap().is_nan());

    let df = create_test_df(&[f64::INFINITY, 1.0]);
    assert_eq!(df.column_sum("values").unwrap(), f64::INFINITY);
}

#[test]
fn test_invalid_column_error() {
    let df = create_test_df(&[1.0, 2.0, 3.0]);

    let result = df.column_sum("nonexistent");
    assert!(matches!(result, Err(Error::InvalidColumn(ref name)) if name == "nonexistent"));

    let result = df.column_sums(&["values", "nonexistent"]);
    assert!(matches!(result, Err(Error::InvalidColumn(_))));
}

#[test]
fn test_non_numeric_column_error() {
    let df = DataFrame::new(vec![
        Series::new(PlSmallStr::from("strings"), vec!["a", "b", "c"]).into()
    ]).unwrap();

    let result = df.column_sum("strings");
    assert!(matches!(result, Err(Error::TypeMismatch { .. })));

    let result = df.column_sums(&["strings"]);
    assert!(result.is_err());
}

#[test]
fn test_duplicate_request_is_a_polars_error() {
    let df = create_test_df(&[1.0]);
    let result = df.column_sums(&["values", "values"]);
    assert!(matches!(result, Err(Error::Polars(_))));
}
