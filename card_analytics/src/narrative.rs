//! Narrative templates for analysis read-outs
//!
//! String generation only; every function maps structured results to a
//! sentence or two of collector-facing commentary. Dispatch on the trend
//! bucket is an exhaustive match, so commentary and classification can
//! never drift apart.

use crate::momentum::TrendBucket;
use crate::report::ComparisonReport;
use crate::seasonal::month_name;
use chrono::{Datelike, NaiveDate};

/// Commentary for the most recent momentum bucket
pub fn trend_commentary(category: &str, bucket: TrendBucket) -> String {
    match bucket {
        TrendBucket::HighUpward => format!(
            "The {} market shows strong upward momentum; values are likely to keep \
             rising in the near term. Buyers may want to act before prices climb further.",
            category
        ),
        TrendBucket::MediumUpward => format!(
            "The {} market shows moderate upward momentum, with values likely to \
             increase gradually. A reasonable window to buy before prices rise.",
            category
        ),
        TrendBucket::LowUpward => format!(
            "The {} market is edging upward. Cautious buying may be favorable while \
             the trend develops.",
            category
        ),
        TrendBucket::LowDownward => format!(
            "The {} market is drifting slightly downward. Consider waiting for the \
             trend to stabilize before buying.",
            category
        ),
        TrendBucket::HighDownward => format!(
            "The {} market shows strong downward momentum; values may fall sharply. \
             Holding off on purchases is likely the better move.",
            category
        ),
        TrendBucket::Neutral => format!(
            "The {} market shows no clear momentum in either direction; values are \
             holding steady.",
            category
        ),
    }
}

/// Commentary for the projected percentage change over the forecast
pub fn forecast_commentary(category: &str, pct_change: f64, end_date: NaiveDate) -> String {
    let end_month = format!("{} {}", month_name(end_date.month()), end_date.year());

    if pct_change < 0.0 {
        format!(
            "The projected market value change for {} is {:.2}% through {}. The \
             expected decline could open a buying window at lower prices.",
            category, pct_change, end_month
        )
    } else if pct_change > 0.0 {
        format!(
            "The projected market value change for {} is {:.2}% through {}. Values \
             are expected to rise, so earlier purchases may be advantageous.",
            category, pct_change, end_month
        )
    } else {
        format!(
            "The projected market value change for {} is 0.00% through {}. Prices \
             are expected to hold steady.",
            category, end_month
        )
    }
}

/// Commentary for the seasonal best month to buy
pub fn best_month_commentary(category: &str, best_month: u32) -> String {
    format!(
        "Historically, {} is the cheapest month for {} cards on average, making it \
         the most favorable time of year to buy.",
        month_name(best_month),
        category
    )
}

/// Commentary for a two-category comparison
pub fn comparison_commentary(report: &ComparisonReport) -> String {
    format!(
        "{} has the better forecast outlook ({:.2}% vs {:.2}%), while {} shows the \
         stronger momentum ({} vs {}).",
        report.better_outlook,
        report.first.pct_change,
        report.second.pct_change,
        report.better_momentum,
        report.first.latest_trend,
        report.second.latest_trend,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_commentary_mentions_category() {
        let text = trend_commentary("Pokemon", TrendBucket::HighUpward);
        assert!(text.contains("Pokemon"));
        assert!(text.contains("upward"));
    }

    #[test]
    fn test_forecast_commentary_directions() {
        let end = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();

        let falling = forecast_commentary("Marvel", -12.5, end);
        assert!(falling.contains("-12.50%"));
        assert!(falling.contains("August 2025"));

        let rising = forecast_commentary("Marvel", 4.0, end);
        assert!(rising.contains("4.00%"));

        let flat = forecast_commentary("Marvel", 0.0, end);
        assert!(flat.contains("0.00%"));
    }

    #[test]
    fn test_best_month_commentary() {
        let text = best_month_commentary("Baseball", 2);
        assert!(text.contains("February"));
        assert!(text.contains("Baseball"));
    }
}
