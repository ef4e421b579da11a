//! Seasonal forecasting implementations
//!
//! Contains triple exponential smoothing (Holt-Winters) with additive
//! trend and additive seasonality, plus a least-squares parameter search
//! over the smoothing factors. The recursion follows the standard
//! formulation:
//!
//! ```text
//! level_t  = alpha * (y_t - season_{t-m}) + (1 - alpha) * (level_{t-1} + trend_{t-1})
//! trend_t  = beta  * (level_t - level_{t-1}) + (1 - beta) * trend_{t-1}
//! season_t = gamma * (y_t - level_{t-1} - trend_{t-1}) + (1 - gamma) * season_{t-m}
//! ```
//!
//! Initial states are estimated from the first two complete cycles, with
//! seasonal indices computed from trend-adjusted deviations.

use crate::{MathError, Result};

/// Candidate values scanned for each smoothing factor during fitting
const PARAMETER_GRID: [f64; 10] = [0.05, 0.15, 0.25, 0.35, 0.45, 0.55, 0.65, 0.75, 0.85, 0.95];

/// Holt-Winters triple exponential smoothing model
#[derive(Debug, Clone)]
pub struct HoltWinters {
    alpha: f64,
    beta: f64,
    gamma: f64,
    season_length: usize,
}

/// Fitted Holt-Winters model, ready to forecast
#[derive(Debug, Clone)]
pub struct FittedHoltWinters {
    alpha: f64,
    beta: f64,
    gamma: f64,
    season_length: usize,
    level: f64,
    trend: f64,
    seasonals: Vec<f64>,
    fitted: Vec<f64>,
    residuals: Vec<f64>,
    sse: f64,
}

impl HoltWinters {
    /// Create a new Holt-Winters model with fixed smoothing factors
    pub fn new(alpha: f64, beta: f64, gamma: f64, season_length: usize) -> Result<Self> {
        for (name, value) in [("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            if value <= 0.0 || value >= 1.0 {
                return Err(MathError::InvalidInput(format!(
                    "{} must be between 0 and 1 (exclusive), got {}",
                    name, value
                )));
            }
        }

        if season_length < 2 {
            return Err(MathError::InvalidInput(
                "Season length must be at least 2".to_string(),
            ));
        }

        Ok(Self {
            alpha,
            beta,
            gamma,
            season_length,
        })
    }

    /// Fit the model to a series, producing smoothed states and residuals
    pub fn fit(&self, values: &[f64]) -> Result<FittedHoltWinters> {
        let m = self.season_length;
        if values.len() < 2 * m {
            return Err(MathError::InsufficientData(format!(
                "Seasonal smoothing needs at least {} observations ({} seasons of {}), have {}",
                2 * m,
                2,
                m,
                values.len()
            )));
        }

        let cycles = values.len() / m;
        let cycle_mean = |k: usize| -> f64 {
            values[k * m..(k + 1) * m].iter().sum::<f64>() / m as f64
        };

        // Initial trend from the difference between the first two cycle means
        let first_mean = cycle_mean(0);
        let second_mean = cycle_mean(1);
        let mut trend = (second_mean - first_mean) / m as f64;

        // Initial level positioned just before the first observation
        let mut level = first_mean - (m as f64 + 1.0) / 2.0 * trend;

        // Seasonal indices: average trend-adjusted deviation from each
        // complete cycle's mean
        let half = (m as f64 - 1.0) / 2.0;
        let mut seasonals = vec![0.0; m];
        for (i, seasonal) in seasonals.iter_mut().enumerate() {
            let mut deviation = 0.0;
            for k in 0..cycles {
                deviation += values[k * m + i] - (cycle_mean(k) + (i as f64 - half) * trend);
            }
            *seasonal = deviation / cycles as f64;
        }

        let mut fitted = Vec::with_capacity(values.len());
        let mut residuals = Vec::with_capacity(values.len());

        for (t, &y) in values.iter().enumerate() {
            let s = t % m;

            let prediction = level + trend + seasonals[s];
            fitted.push(prediction);
            residuals.push(y - prediction);

            let prev_level = level;
            let prev_trend = trend;
            level = self.alpha * (y - seasonals[s]) + (1.0 - self.alpha) * (prev_level + prev_trend);
            trend = self.beta * (level - prev_level) + (1.0 - self.beta) * prev_trend;
            seasonals[s] =
                self.gamma * (y - prev_level - prev_trend) + (1.0 - self.gamma) * seasonals[s];
        }

        let sse: f64 = residuals.iter().map(|r| r * r).sum();
        if !sse.is_finite() {
            return Err(MathError::CalculationError(
                "Smoothing recursion diverged (non-finite residuals)".to_string(),
            ));
        }

        Ok(FittedHoltWinters {
            alpha: self.alpha,
            beta: self.beta,
            gamma: self.gamma,
            season_length: m,
            level,
            trend,
            seasonals,
            fitted,
            residuals,
            sse,
        })
    }

    /// Fit with smoothing factors chosen by least-squares over a fixed
    /// grid. The first combination reaching the minimum in-sample SSE
    /// wins, which keeps the selection deterministic.
    pub fn fit_auto(values: &[f64], season_length: usize) -> Result<FittedHoltWinters> {
        if values.len() < 2 * season_length {
            return Err(MathError::InsufficientData(format!(
                "Seasonal smoothing needs at least {} observations, have {}",
                2 * season_length,
                values.len()
            )));
        }

        let mut best: Option<FittedHoltWinters> = None;

        for &alpha in &PARAMETER_GRID {
            for &beta in &PARAMETER_GRID {
                for &gamma in &PARAMETER_GRID {
                    let model = HoltWinters::new(alpha, beta, gamma, season_length)?;
                    let candidate = match model.fit(values) {
                        Ok(fit) => fit,
                        Err(MathError::CalculationError(_)) => continue,
                        Err(e) => return Err(e),
                    };

                    let improved = match &best {
                        None => true,
                        Some(current) => candidate.sse < current.sse,
                    };
                    if improved {
                        best = Some(candidate);
                    }
                }
            }
        }

        best.ok_or_else(|| {
            MathError::CalculationError(
                "No smoothing parameter combination produced a finite fit".to_string(),
            )
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn season_length(&self) -> usize {
        self.season_length
    }
}

impl FittedHoltWinters {
    /// Forecast `horizon` steps beyond the end of the fitted series
    pub fn forecast(&self, horizon: usize) -> Vec<f64> {
        let m = self.season_length;
        let n = self.fitted.len();

        (1..=horizon)
            .map(|h| self.level + h as f64 * self.trend + self.seasonals[(n + h - 1) % m])
            .collect()
    }

    /// One-step-ahead in-sample predictions
    pub fn fitted(&self) -> &[f64] {
        &self.fitted
    }

    /// In-sample one-step residuals (observed - fitted)
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Sum of squared residuals for the fit
    pub fn sse(&self) -> f64 {
        self.sse
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn season_length(&self) -> usize {
        self.season_length
    }

    /// Final smoothed level
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Final smoothed trend
    pub fn trend(&self) -> f64 {
        self.trend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_series_fits_exactly() {
        // y = t with season length 4: the initial states absorb the ramp
        // and every one-step residual is zero.
        let values: Vec<f64> = (0..12).map(|t| t as f64).collect();
        let model = HoltWinters::new(0.5, 0.5, 0.5, 4).unwrap();
        let fit = model.fit(&values).unwrap();

        assert!(fit.sse() < 1e-18);
        for (t, &residual) in fit.residuals().iter().enumerate() {
            assert!(residual.abs() < 1e-9, "residual at {} was {}", t, residual);
        }

        let forecast = fit.forecast(4);
        for (h, &value) in forecast.iter().enumerate() {
            let expected = 12.0 + h as f64;
            assert!((value - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_pure_seasonal_series_fits_exactly() {
        // A flat repeating pattern: forecast reproduces the next cycle.
        let pattern = [10.0, 20.0, 30.0, 40.0];
        let values: Vec<f64> = pattern.iter().cycle().take(12).copied().collect();
        let model = HoltWinters::new(0.3, 0.2, 0.4, 4).unwrap();
        let fit = model.fit(&values).unwrap();

        assert!(fit.sse() < 1e-18);

        let forecast = fit.forecast(4);
        for (h, &value) in forecast.iter().enumerate() {
            assert!((value - pattern[h]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_fit_auto_matches_exact_fit() {
        let values: Vec<f64> = (0..12).map(|t| t as f64).collect();
        let fit = HoltWinters::fit_auto(&values, 4).unwrap();

        assert!(fit.sse() < 1e-18);

        let forecast = fit.forecast(2);
        assert!((forecast[0] - 12.0).abs() < 1e-9);
        assert!((forecast[1] - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_insufficient_history() {
        let values: Vec<f64> = (0..7).map(|t| t as f64).collect();
        let model = HoltWinters::new(0.5, 0.5, 0.5, 4).unwrap();

        assert!(matches!(
            model.fit(&values),
            Err(MathError::InsufficientData(_))
        ));
        assert!(HoltWinters::fit_auto(&values, 4).is_err());
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(HoltWinters::new(0.0, 0.5, 0.5, 4).is_err());
        assert!(HoltWinters::new(0.5, 1.0, 0.5, 4).is_err());
        assert!(HoltWinters::new(0.5, 0.5, -0.1, 4).is_err());
        assert!(HoltWinters::new(0.5, 0.5, 0.5, 1).is_err());
    }

    #[test]
    fn test_residuals_align_with_input() {
        let values: Vec<f64> = (0..16).map(|t| 100.0 + (t % 4) as f64 * 3.0).collect();
        let fit = HoltWinters::fit_auto(&values, 4).unwrap();

        assert_eq!(fit.fitted().len(), values.len());
        assert_eq!(fit.residuals().len(), values.len());
    }
}
