//! Monthly aggregation over the cleaned dataset

use crate::data::CleanedDataset;
use crate::error::{CompassError, Result};
use crate::series::MonthlySeries;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Sum of market values per month for one category.
///
/// Feeds the forecaster and the momentum analyzer.
pub fn sum_by_month(data: &CleanedDataset, category: &str) -> Result<MonthlySeries> {
    let grouped = group_by_month(data, category)?;

    Ok(MonthlySeries::from_pairs(
        grouped.into_iter().map(|(date, (sum, _))| (date, sum)),
    ))
}

/// Mean of market values per month for one category.
///
/// Feeds the seasonal extremum finder.
pub fn mean_by_month(data: &CleanedDataset, category: &str) -> Result<MonthlySeries> {
    let grouped = group_by_month(data, category)?;

    Ok(MonthlySeries::from_pairs(
        grouped
            .into_iter()
            .map(|(date, (sum, count))| (date, sum / count as f64)),
    ))
}

/// Group one category's records by month-start date, accumulating
/// (sum, count) per month. Errors when the category has no records so
/// downstream analysis never sees an empty series.
fn group_by_month(
    data: &CleanedDataset,
    category: &str,
) -> Result<BTreeMap<NaiveDate, (f64, usize)>> {
    let mut grouped: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();

    for record in data.records() {
        if record.category != category {
            continue;
        }

        let entry = grouped.entry(record.date).or_insert((0.0, 0));
        entry.0 += record.market_value;
        entry.1 += 1;
    }

    if grouped.is_empty() {
        return Err(CompassError::EmptyCategory(category.to_string()));
    }

    Ok(grouped)
}
