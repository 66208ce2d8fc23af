//! Summation method implementations

pub mod sum;

pub use sum::sum_column;
