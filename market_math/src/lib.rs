//! # Market Math
//!
//! Mathematical calculations for market analytics. This crate provides
//! the indicator and forecasting primitives used by the analytics
//! pipeline: exponentially weighted moving averages, MACD-style
//! oscillators, and seasonal exponential smoothing.

use thiserror::Error;

// Indicator modules
pub mod forecasting;
pub mod moving_averages;
pub mod oscillators;

/// Errors that can occur in market-math calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for market math operations
pub type Result<T> = std::result::Result<T, MathError>;
