//! Moving average calculation implementations
//!
//! Contains the span-based Exponential Moving Average (EMA) used
//! throughout the analytics pipeline. The smoothing factor is
//! `alpha = 2 / (span + 1)` and the recursion is seeded with the first
//! observed value, so the average is defined from the very first update.

use crate::{MathError, Result};

/// Exponential Moving Average (EMA) implementation
#[derive(Debug, Clone)]
pub struct ExponentialMovingAverage {
    span: usize,
    alpha: f64,
    current: Option<f64>,
}

impl ExponentialMovingAverage {
    /// Create a new Exponential Moving Average with the specified span
    pub fn new(span: usize) -> Result<Self> {
        if span == 0 {
            return Err(MathError::InvalidInput(
                "Span must be greater than zero".to_string(),
            ));
        }

        let alpha = 2.0 / (span as f64 + 1.0);

        Ok(Self {
            span,
            alpha,
            current: None,
        })
    }

    /// Update the EMA with a new value
    pub fn update(&mut self, value: f64) -> Result<()> {
        match self.current {
            // First value seeds the average
            None => {
                self.current = Some(value);
            }
            Some(current) => {
                // EMA = (value - EMA(previous)) * alpha + EMA(previous)
                let new_ema = (value - current) * self.alpha + current;
                self.current = Some(new_ema);
            }
        }

        Ok(())
    }

    /// Get the current EMA value
    pub fn value(&self) -> Result<f64> {
        match self.current {
            Some(ema) => Ok(ema),
            None => Err(MathError::InsufficientData(
                "No values seen yet for EMA calculation".to_string(),
            )),
        }
    }

    /// Get the span
    pub fn span(&self) -> usize {
        self.span
    }

    /// Get the smoothing factor
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Reset the EMA, clearing all values
    pub fn reset(&mut self) {
        self.current = None;
    }
}

/// Compute the EMA of a whole series, aligned to the input
pub fn ema(values: &[f64], span: usize) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot compute EMA of an empty series".to_string(),
        ));
    }

    let mut average = ExponentialMovingAverage::new(span)?;
    let mut out = Vec::with_capacity(values.len());

    for &value in values {
        average.update(value)?;
        out.push(average.value()?);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ema_seeds_with_first_value() {
        let mut ema = ExponentialMovingAverage::new(3).unwrap();

        // Not enough data yet
        assert!(ema.value().is_err());

        ema.update(2.0).unwrap();
        assert_eq!(ema.value().unwrap(), 2.0);
    }

    #[test]
    fn test_ema_recursion() {
        // span = 3 gives alpha = 0.5
        let mut ema = ExponentialMovingAverage::new(3).unwrap();

        ema.update(2.0).unwrap();
        ema.update(4.0).unwrap();
        assert!((ema.value().unwrap() - 3.0).abs() < 1e-12);

        ema.update(6.0).unwrap();
        assert!((ema.value().unwrap() - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_ema_series_alignment() {
        let values = [2.0, 4.0, 6.0];
        let smoothed = ema(&values, 3).unwrap();

        assert_eq!(smoothed.len(), values.len());
        assert!((smoothed[0] - 2.0).abs() < 1e-12);
        assert!((smoothed[2] - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_span() {
        assert!(ExponentialMovingAverage::new(0).is_err());
        assert!(ema(&[1.0], 0).is_err());
    }

    #[test]
    fn test_empty_series() {
        assert!(ema(&[], 3).is_err());
    }
}
