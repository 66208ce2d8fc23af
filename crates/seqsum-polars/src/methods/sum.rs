//! Column summation implementations

use polars::prelude::*;
use seqsum_core::NumericVector;
use crate::{Result, Error, NullPolicy, SumConfig, SumExt};

/// Sum a column after marshaling it into an ordered sequence of doubles
///
/// Float64 columns that are contiguous and null-free are summed in place.
/// Every other accepted dtype is cast to Float64 first.
pub fn sum_column(column: &Column, config: &SumConfig) -> Result<f64> {
    let values = marshal_column(column, config.null_policy)?;
    Ok(values.sum())
}

fn marshal_column(column: &Column, policy: NullPolicy) -> Result<NumericVector<'_>> {
    let null_count = column.null_count();

    log::debug!(
        "Marshaling column '{}' ({:?}, {} values, {} nulls, policy {})",
        column.name(),
        column.dtype(),
        column.len(),
        null_count,
        policy.name(),
    );

    if null_count > 0 && policy == NullPolicy::Reject {
        return Err(Error::NullValues {
            column: column.name().to_string(),
            count: null_count,
        });
    }

    match column.dtype() {
        DataType::Float64 => {
            let ca = column.f64()?;

            if null_count == 0 {
                // Zero-copy path: data is contiguous
                if let Ok(slice) = ca.cont_slice() {
                    log::trace!("Column '{}' is contiguous, summing in place", column.name());
                    return Ok(NumericVector::borrowed(slice));
                }
            }

            Ok(collect_values(ca, policy))
        }
        DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::Int16
        | DataType::Int8
        | DataType::UInt64
        | DataType::UInt32
        | DataType::UInt16
        | DataType::UInt8
        | DataType::Boolean => {
            // Convert to f64 for computation
            let float_column = column.cast(&DataType::Float64)?;
            Ok(collect_values(float_column.f64()?, policy))
        }
        dt => Err(Error::TypeMismatch {
            expected: "numeric".to_string(),
            got: format!("{:?}", dt),
        }),
    }
}

/// Copy values out of a (possibly chunked) array in order
fn collect_values(ca: &Float64Chunked, policy: NullPolicy) -> NumericVector<'static> {
    log::trace!("Copying {} values across {} chunks", ca.len(), ca.chunks().len());

    match policy {
        NullPolicy::Skip => ca.iter().flatten().collect(),
        NullPolicy::Propagate | NullPolicy::Reject => NumericVector::from_nullable(ca.iter()),
    }
}

impl SumExt for DataFrame {
    fn column_sum(&self, column: &str) -> Result<f64> {
        self.column_sum_with(column, &SumConfig::default())
    }

    fn column_sum_with(&self, column: &str, config: &SumConfig) -> Result<f64> {
        let col = self.column(column)
            .map_err(|_| Error::InvalidColumn(column.to_string()))?;

        sum_column(col, config)
    }

    fn column_sums(&self, columns: &[&str]) -> Result<DataFrame> {
        self.column_sums_with(columns, &SumConfig::default())
    }

    fn column_sums_with(&self, columns: &[&str], config: &SumConfig) -> Result<DataFrame> {
        let mut result_columns: Vec<Column> = Vec::with_capacity(columns.len());

        for col_name in columns {
            let total = self.column_sum_with(col_name, config)?;

            let out_name = format!("{}{}", col_name, config.suffix);
            let series = Series::new(out_name.as_str().into(), vec![total]);
            result_columns.push(series.into());
        }

        Ok(DataFrame::new(result_columns)?)
    }
}
