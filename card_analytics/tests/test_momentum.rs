use card_analytics::forecast::future_months;
use card_analytics::{CompassError, MomentumAnalyzer, MonthlySeries, TrendBucket};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn date(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

fn monthly_series(n: usize, f: impl Fn(usize) -> f64) -> MonthlySeries {
    let mut series = MonthlySeries::new();
    let mut current = date(2020, 1);
    for t in 0..n {
        series.insert(current, f(t));
        current = future_months(current, 1).unwrap()[0];
    }
    series
}

#[rstest]
#[case(0.5, TrendBucket::HighUpward)]
#[case(0.021, TrendBucket::HighUpward)]
#[case(0.02, TrendBucket::MediumUpward)]
#[case(0.01, TrendBucket::MediumUpward)]
#[case(0.005, TrendBucket::LowUpward)]
#[case(0.0, TrendBucket::LowUpward)]
#[case(-0.004, TrendBucket::LowUpward)]
#[case(-0.005, TrendBucket::LowDownward)]
#[case(-0.019, TrendBucket::LowDownward)]
#[case(-0.02, TrendBucket::HighDownward)]
#[case(-0.5, TrendBucket::HighDownward)]
fn classify_follows_the_ordered_thresholds(
    #[case] divergence: f64,
    #[case] expected: TrendBucket,
) {
    assert_eq!(TrendBucket::classify(divergence), expected);
}

#[test]
fn every_finite_divergence_gets_a_real_bucket() {
    for i in -1000..=1000 {
        let divergence = i as f64 * 0.001;
        assert_ne!(TrendBucket::classify(divergence), TrendBucket::Neutral);
    }
}

#[test]
fn upward_buckets_are_exactly_the_three_upward_labels() {
    assert!(TrendBucket::HighUpward.is_upward());
    assert!(TrendBucket::MediumUpward.is_upward());
    assert!(TrendBucket::LowUpward.is_upward());
    assert!(!TrendBucket::LowDownward.is_upward());
    assert!(!TrendBucket::HighDownward.is_upward());
    assert!(!TrendBucket::Neutral.is_upward());
}

#[test]
fn labels_match_the_published_names() {
    assert_eq!(TrendBucket::HighUpward.to_string(), "High Upward");
    assert_eq!(TrendBucket::HighDownward.to_string(), "High Downward");
    assert_eq!(TrendBucket::Neutral.to_string(), "Neutral");
}

#[test]
fn result_is_aligned_with_the_input_series() {
    let series = monthly_series(40, |t| 100.0 + (t as f64).sin() * 10.0);
    let result = MomentumAnalyzer::default().analyze(&series).unwrap();

    assert_eq!(result.len(), series.len());
    assert_eq!(result.dates, series.dates());
    assert_eq!(result.signal.len(), series.len());
    assert_eq!(result.divergence.len(), series.len());
    assert_eq!(result.buckets.len(), series.len());
}

#[test]
fn steady_climb_reads_as_upward_momentum() {
    let series = monthly_series(48, |t| 100.0 + t as f64 * 10.0);
    let result = MomentumAnalyzer::default().analyze(&series).unwrap();

    let latest = result.latest_bucket().unwrap();
    assert!(latest.is_upward(), "latest bucket was {}", latest);
    assert!(*result.macd.last().unwrap() > 0.0);
}

#[test]
fn steady_decline_reads_as_downward_momentum() {
    let series = monthly_series(48, |t| 1000.0 - t as f64 * 10.0);
    let result = MomentumAnalyzer::default().analyze(&series).unwrap();

    let latest = result.latest_bucket().unwrap();
    assert!(!latest.is_upward(), "latest bucket was {}", latest);
    assert!(*result.macd.last().unwrap() < 0.0);
}

#[test]
fn empty_series_is_an_error() {
    let result = MomentumAnalyzer::default().analyze(&MonthlySeries::new());
    assert!(matches!(result, Err(CompassError::InsufficientData(_))));
}
