//! Oscillator indicator implementations
//!
//! Contains the Moving Average Convergence Divergence (MACD) oscillator:
//! the difference between a short-span and a long-span EMA, a signal line
//! (EMA of the MACD line), and their divergence.

use crate::moving_averages::ExponentialMovingAverage;
use crate::{MathError, Result};
use serde::Serialize;

/// MACD output series, aligned element-for-element with the input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacdSeries {
    /// MACD line (short EMA - long EMA)
    pub macd: Vec<f64>,
    /// Signal line (EMA of the MACD line)
    pub signal: Vec<f64>,
    /// Divergence (MACD line - signal line)
    pub divergence: Vec<f64>,
}

impl MacdSeries {
    pub fn len(&self) -> usize {
        self.macd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macd.is_empty()
    }
}

/// Moving Average Convergence Divergence (MACD) implementation
#[derive(Debug, Clone)]
pub struct Macd {
    short_span: usize,
    long_span: usize,
    signal_span: usize,
}

impl Macd {
    /// Create a new MACD with the specified spans
    pub fn new(short_span: usize, long_span: usize, signal_span: usize) -> Result<Self> {
        if short_span >= long_span {
            return Err(MathError::InvalidInput(
                "Short span must be smaller than long span".to_string(),
            ));
        }

        if short_span == 0 || signal_span == 0 {
            return Err(MathError::InvalidInput(
                "Spans must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            short_span,
            long_span,
            signal_span,
        })
    }

    /// Compute the MACD, signal, and divergence series for a whole input
    pub fn compute(&self, values: &[f64]) -> Result<MacdSeries> {
        if values.is_empty() {
            return Err(MathError::InsufficientData(
                "Cannot compute MACD of an empty series".to_string(),
            ));
        }

        let mut short_ema = ExponentialMovingAverage::new(self.short_span)?;
        let mut long_ema = ExponentialMovingAverage::new(self.long_span)?;
        let mut signal_ema = ExponentialMovingAverage::new(self.signal_span)?;

        let mut macd = Vec::with_capacity(values.len());
        let mut signal = Vec::with_capacity(values.len());
        let mut divergence = Vec::with_capacity(values.len());

        for &value in values {
            short_ema.update(value)?;
            long_ema.update(value)?;

            let macd_value = short_ema.value()? - long_ema.value()?;
            signal_ema.update(macd_value)?;
            let signal_value = signal_ema.value()?;

            macd.push(macd_value);
            signal.push(signal_value);
            divergence.push(macd_value - signal_value);
        }

        Ok(MacdSeries {
            macd,
            signal,
            divergence,
        })
    }

    /// Get the short span
    pub fn short_span(&self) -> usize {
        self.short_span
    }

    /// Get the long span
    pub fn long_span(&self) -> usize {
        self.long_span
    }

    /// Get the signal span
    pub fn signal_span(&self) -> usize {
        self.signal_span
    }
}
