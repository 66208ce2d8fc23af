//! Error types for seqsum-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Column '{column}' contains {count} null values")]
    NullValues { column: String, count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
