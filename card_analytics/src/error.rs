//! Error types for the card_analytics crate

use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the card_analytics crate
#[derive(Debug, Error)]
pub enum CompassError {
    /// Malformed date fields (month names, year/month combinations)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A selected category has no records in the dataset
    #[error("No records found for category '{0}'")]
    EmptyCategory(String),

    /// The forecast model could not be fitted
    #[error("Model fit error: {0}")]
    ModelFit(String),

    /// Not enough data for a calculation
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// A percentage change was requested against a zero base
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Error related to data validation or schema
    #[error("Data error: {0}")]
    Data(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    Polars(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, CompassError>;

impl From<PolarsError> for CompassError {
    fn from(err: PolarsError) -> Self {
        CompassError::Polars(err.to_string())
    }
}
