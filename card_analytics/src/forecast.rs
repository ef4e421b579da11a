//! Seasonal forecasting over monthly series
//!
//! Fits an additive-trend, additive-seasonal exponential smoothing model
//! (seasonal period 12) and forecasts a configurable number of months
//! ahead. The confidence band is symmetric: ±1.96 standard deviations of
//! the in-sample residuals, applied uniformly across the horizon.

use crate::error::{CompassError, Result};
use crate::series::MonthlySeries;
use chrono::{Months, NaiveDate};
use market_math::forecasting::HoltWinters;
use serde::Serialize;
use tracing::warn;

/// Default forecast horizon in months
pub const DEFAULT_HORIZON: usize = 12;

/// Seasonal period for monthly data
pub const SEASONAL_PERIODS: usize = 12;

/// History length below which the fit is flagged as unstable
pub const RECOMMENDED_MIN_OBSERVATIONS: usize = 24;

/// z-score for the 95% confidence band
const Z_95: f64 = 1.96;

/// Point forecast with a symmetric confidence band
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    /// Month-start dates for the forecast horizon
    pub dates: Vec<NaiveDate>,
    /// Point forecast per date
    pub point: Vec<f64>,
    /// Lower band (point - 1.96 * sigma)
    pub lower: Vec<f64>,
    /// Upper band (point + 1.96 * sigma)
    pub upper: Vec<f64>,
    /// Standard deviation of the in-sample residuals
    pub sigma: f64,
}

impl ForecastResult {
    pub fn len(&self) -> usize {
        self.point.len()
    }

    pub fn is_empty(&self) -> bool {
        self.point.is_empty()
    }

    /// Last forecast point (date, value)
    pub fn last(&self) -> Option<(NaiveDate, f64)> {
        match (self.dates.last(), self.point.last()) {
            (Some(date), Some(value)) => Some((*date, *value)),
            _ => None,
        }
    }
}

/// Seasonal forecaster for monthly series
#[derive(Debug, Clone)]
pub struct Forecaster {
    horizon: usize,
    seasonal_periods: usize,
}

impl Default for Forecaster {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            seasonal_periods: SEASONAL_PERIODS,
        }
    }
}

impl Forecaster {
    /// Create a forecaster with a custom horizon
    pub fn new(horizon: usize) -> Self {
        Self {
            horizon,
            seasonal_periods: SEASONAL_PERIODS,
        }
    }

    /// Override the seasonal period (monthly data uses 12)
    pub fn with_seasonal_periods(mut self, seasonal_periods: usize) -> Self {
        self.seasonal_periods = seasonal_periods;
        self
    }

    /// Fit the smoothing model and forecast `horizon` months ahead
    pub fn forecast(&self, series: &MonthlySeries) -> Result<ForecastResult> {
        let values = series.values();

        if values.len() < 2 * self.seasonal_periods {
            return Err(CompassError::ModelFit(format!(
                "history of {} observations is too short for a seasonal fit (need {})",
                values.len(),
                2 * self.seasonal_periods
            )));
        }

        if values.len() < RECOMMENDED_MIN_OBSERVATIONS {
            warn!(
                observations = values.len(),
                recommended = RECOMMENDED_MIN_OBSERVATIONS,
                "short history; forecast fit may be unstable"
            );
        }

        let fit = HoltWinters::fit_auto(&values, self.seasonal_periods)
            .map_err(|e| CompassError::ModelFit(e.to_string()))?;

        let point = fit.forecast(self.horizon);
        let sigma = population_std_dev(fit.residuals());

        let lower: Vec<f64> = point.iter().map(|v| v - Z_95 * sigma).collect();
        let upper: Vec<f64> = point.iter().map(|v| v + Z_95 * sigma).collect();

        let (last_date, _) = series
            .last()
            .ok_or_else(|| CompassError::InsufficientData("empty series".to_string()))?;
        let dates = future_months(last_date, self.horizon)?;

        Ok(ForecastResult {
            dates,
            point,
            lower,
            upper,
            sigma,
        })
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }
}

/// Month-start dates for the `horizon` months following `after`
pub fn future_months(after: NaiveDate, horizon: usize) -> Result<Vec<NaiveDate>> {
    let mut dates = Vec::with_capacity(horizon);
    let mut current = after;

    for _ in 0..horizon {
        current = current
            .checked_add_months(Months::new(1))
            .ok_or_else(|| CompassError::Parse("forecast date out of range".to_string()))?;
        dates.push(current);
    }

    Ok(dates)
}

fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;

    variance.sqrt()
}
