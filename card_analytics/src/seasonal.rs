//! Seasonal averages and the best month to buy

use crate::error::{CompassError, Result};
use crate::series::MonthlySeries;
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

/// Mean market value per calendar month, with the cheapest month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalAverages {
    /// Calendar month number (1-12) -> mean value across all years
    pub by_month: BTreeMap<u32, f64>,
    /// Month number with the lowest mean; ties resolve to the lowest
    /// month number
    pub best_month: u32,
}

impl SeasonalAverages {
    pub fn mean_for(&self, month: u32) -> Option<f64> {
        self.by_month.get(&month).copied()
    }

    pub fn best_month_name(&self) -> &'static str {
        month_name(self.best_month)
    }
}

/// Average a monthly mean series by calendar month across years and
/// locate the minimum
pub fn seasonal_averages(mean_by_month: &MonthlySeries) -> Result<SeasonalAverages> {
    let mut grouped: BTreeMap<u32, (f64, usize)> = BTreeMap::new();

    for (date, value) in mean_by_month.iter() {
        let entry = grouped.entry(date.month()).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    if grouped.is_empty() {
        return Err(CompassError::InsufficientData(
            "no calendar months represented in the series".to_string(),
        ));
    }

    let by_month: BTreeMap<u32, f64> = grouped
        .into_iter()
        .map(|(month, (sum, count))| (month, sum / count as f64))
        .collect();

    // Ascending iteration with a strict comparison keeps the earliest
    // month on ties
    let mut best_month = 0;
    let mut best_mean = f64::INFINITY;
    for (&month, &mean) in &by_month {
        if mean < best_mean {
            best_month = month;
            best_mean = mean;
        }
    }

    Ok(SeasonalAverages {
        by_month,
        best_month,
    })
}

/// English name for a calendar month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
