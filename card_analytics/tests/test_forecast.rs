use approx::assert_abs_diff_eq;
use card_analytics::forecast::{future_months, Forecaster};
use card_analytics::{CompassError, MonthlySeries};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn date(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// 36 consecutive months starting January 2021, values from `f(t)`
fn monthly_series(f: impl Fn(usize) -> f64) -> MonthlySeries {
    let mut series = MonthlySeries::new();
    let mut current = date(2021, 1);
    for t in 0..36 {
        series.insert(current, f(t));
        current = future_months(current, 1).unwrap()[0];
    }
    series
}

#[test]
fn linear_history_forecasts_its_continuation() {
    // y = 100 + t fits the additive model exactly, so the forecast is
    // the exact continuation of the line.
    let series = monthly_series(|t| 100.0 + t as f64);
    let result = Forecaster::default().forecast(&series).unwrap();

    assert_eq!(result.len(), 12);
    for (i, &value) in result.point.iter().enumerate() {
        assert_abs_diff_eq!(value, 136.0 + i as f64, epsilon = 1e-6);
    }

    // A perfect fit leaves no residual spread
    assert_abs_diff_eq!(result.sigma, 0.0, epsilon = 1e-6);
}

#[test]
fn forecast_dates_are_the_next_twelve_month_starts() {
    let series = monthly_series(|t| 100.0 + t as f64);
    let result = Forecaster::default().forecast(&series).unwrap();

    // History ends December 2023, so the horizon is calendar year 2024
    let expected: Vec<NaiveDate> = (1..=12).map(|m| date(2024, m)).collect();
    assert_eq!(result.dates, expected);
}

#[test]
fn bounds_bracket_the_point_forecast_with_constant_width() {
    // A noisy-ish seasonal shape so the residual spread is non-zero
    let series = monthly_series(|t| 200.0 + (t % 12) as f64 * 3.0 + ((t * 7) % 5) as f64);
    let result = Forecaster::default().forecast(&series).unwrap();

    assert!(result.sigma > 0.0);

    let width = result.upper[0] - result.lower[0];
    for i in 0..result.len() {
        assert!(result.lower[i] <= result.point[i]);
        assert!(result.point[i] <= result.upper[i]);
        assert_abs_diff_eq!(result.upper[i] - result.lower[i], width, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(width, 2.0 * 1.96 * result.sigma, epsilon = 1e-9);
}

#[test]
fn step_history_forecasts_near_the_latest_level() {
    // 100 for the first year, 110 for the second, 120 for the third
    let series = monthly_series(|t| 100.0 + (t / 12) as f64 * 10.0);
    let result = Forecaster::default().forecast(&series).unwrap();

    let mut previous = f64::NEG_INFINITY;
    for &value in &result.point {
        assert!(value > 110.0 && value < 140.0, "forecast value {}", value);
        assert!(value >= previous - 1e-9);
        previous = value;
    }
}

#[test]
fn short_history_is_a_model_fit_error() {
    let mut series = MonthlySeries::new();
    let mut current = date(2023, 1);
    for t in 0..12 {
        series.insert(current, 100.0 + t as f64);
        current = future_months(current, 1).unwrap()[0];
    }

    let result = Forecaster::default().forecast(&series);
    assert!(matches!(result, Err(CompassError::ModelFit(_))));
}

#[test]
fn custom_horizon_is_respected() {
    let series = monthly_series(|t| 100.0 + t as f64);
    let result = Forecaster::new(6).forecast(&series).unwrap();

    assert_eq!(result.len(), 6);
    assert_eq!(result.dates.len(), 6);
}
