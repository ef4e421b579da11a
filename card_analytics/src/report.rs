//! Pipeline orchestration and category comparison
//!
//! Runs aggregation, forecasting, momentum analysis, and the seasonal
//! extremum for one category and assembles the results into a single
//! bundle. Comparison composes two bundles; it performs no analytical
//! work of its own.

use crate::aggregate;
use crate::config::CompassConfig;
use crate::data::CleanedDataset;
use crate::error::{CompassError, Result};
use crate::forecast::{ForecastResult, Forecaster};
use crate::momentum::{MomentumAnalyzer, MomentumResult, TrendBucket};
use crate::seasonal::{seasonal_averages, SeasonalAverages};
use crate::series::MonthlySeries;
use serde::Serialize;
use tracing::debug;

/// All analytical outputs for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisBundle {
    pub category: String,
    /// Monthly total market value (the series the forecast and momentum
    /// analysis run on)
    pub series: MonthlySeries,
    pub forecast: ForecastResult,
    pub momentum: MomentumResult,
    pub seasonal: SeasonalAverages,
    /// Projected change from the last observed value to the last
    /// forecast value, in percent
    pub pct_change: f64,
    /// Bucket of the most recent observation
    pub latest_trend: TrendBucket,
}

impl AnalysisBundle {
    /// Serialize the bundle for the presentation boundary
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CompassError::Data(e.to_string()))
    }
}

/// Per-category figures used in a comparison read-out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub pct_change: f64,
    pub latest_trend: TrendBucket,
    pub best_month: u32,
}

impl From<&AnalysisBundle> for CategorySummary {
    fn from(bundle: &AnalysisBundle) -> Self {
        Self {
            category: bundle.category.clone(),
            pct_change: bundle.pct_change,
            latest_trend: bundle.latest_trend,
            best_month: bundle.seasonal.best_month,
        }
    }
}

/// Side-by-side comparison of two analyzed categories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub first: CategorySummary,
    pub second: CategorySummary,
    /// Category with the higher projected percentage change (for two
    /// declines, the smaller-magnitude decrease)
    pub better_outlook: String,
    /// Category whose most recent bucket signals upward momentum
    pub better_momentum: String,
}

/// Orchestrates the analytical pipeline for category selections
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: CompassConfig,
}

impl Analyzer {
    pub fn new(config: CompassConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompassConfig {
        &self.config
    }

    /// Run the full pipeline for one category
    pub fn analyze(&self, data: &CleanedDataset, category: &str) -> Result<AnalysisBundle> {
        debug!(category, "running category analysis");

        let series = aggregate::sum_by_month(data, category)?;
        let monthly_means = aggregate::mean_by_month(data, category)?;

        let forecast = Forecaster::new(self.config.forecast_horizon).forecast(&series)?;
        let momentum = MomentumAnalyzer::new(
            self.config.short_span,
            self.config.long_span,
            self.config.signal_span,
        )
        .analyze(&series)?;
        let seasonal = seasonal_averages(&monthly_means)?;

        let (_, last_observed) = series
            .last()
            .ok_or_else(|| CompassError::InsufficientData("empty series".to_string()))?;
        let (_, last_forecast) = forecast
            .last()
            .ok_or_else(|| CompassError::InsufficientData("empty forecast".to_string()))?;

        let pct_change = percentage_change(last_observed, last_forecast)?;
        let latest_trend = momentum.latest_bucket().ok_or_else(|| {
            CompassError::InsufficientData("momentum produced no buckets".to_string())
        })?;

        Ok(AnalysisBundle {
            category: category.to_string(),
            series,
            forecast,
            momentum,
            seasonal,
            pct_change,
            latest_trend,
        })
    }

    /// Compare two already-analyzed categories
    pub fn compare(&self, first: &AnalysisBundle, second: &AnalysisBundle) -> ComparisonReport {
        let better_outlook = if first.pct_change >= second.pct_change {
            first.category.clone()
        } else {
            second.category.clone()
        };

        let better_momentum = if first.latest_trend.is_upward() {
            first.category.clone()
        } else {
            second.category.clone()
        };

        ComparisonReport {
            first: CategorySummary::from(first),
            second: CategorySummary::from(second),
            better_outlook,
            better_momentum,
        }
    }
}

/// Percentage change from `initial` to `final_value`
pub fn percentage_change(initial: f64, final_value: f64) -> Result<f64> {
    if initial == 0.0 {
        return Err(CompassError::DivisionByZero(
            "percentage change from a zero base is undefined".to_string(),
        ));
    }

    Ok((final_value - initial) / initial * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_change() {
        assert!((percentage_change(100.0, 110.0).unwrap() - 10.0).abs() < 1e-12);
        assert!((percentage_change(200.0, 150.0).unwrap() + 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_percentage_change_zero_base() {
        let result = percentage_change(0.0, 10.0);
        assert!(matches!(result, Err(CompassError::DivisionByZero(_))));
    }
}
