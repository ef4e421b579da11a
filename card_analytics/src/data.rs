//! Dataset loading and cleaning
//!
//! Raw records arrive as tabular data with the columns
//! `Category, Year, Month, market_value`, where `Month` is a full
//! calendar-month name. Cleaning derives a first-of-month date for every
//! record, drops excluded categories, and sorts chronologically.

use crate::error::{CompassError, Result};
use chrono::{Month, NaiveDate};
use polars::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Columns the input dataset must provide
pub const REQUIRED_COLUMNS: [&str; 4] = ["Category", "Year", "Month", "market_value"];

/// One observed listing for a category in a given month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub category: String,
    pub year: i32,
    pub month: u32,
    pub market_value: f64,
    /// First day of (year, month), derived at load time
    pub date: NaiveDate,
}

impl Record {
    /// Build a record, deriving the month-start date
    pub fn new(category: impl Into<String>, year: i32, month: u32, market_value: f64) -> Result<Self> {
        let date = first_of_month(year, month)?;
        Ok(Self {
            category: category.into(),
            year,
            month,
            market_value,
            date,
        })
    }
}

/// Cleaned dataset: records sorted ascending by date, exclusions removed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanedDataset {
    records: Vec<Record>,
}

impl CleanedDataset {
    /// Build a dataset from already-parsed records; sorts by date
    /// (stable, so same-month records keep their relative order)
    pub fn from_records(mut records: Vec<Record>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories present, in sorted order
    pub fn categories(&self) -> Vec<String> {
        let mut names: Vec<String> = self.records.iter().map(|r| r.category.clone()).collect();
        names.sort();
        names.dedup();
        names
    }
}

/// Data loader for the raw pricing dataset
#[derive(Debug, Clone)]
pub struct DataLoader {
    excluded_categories: Vec<String>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self {
            excluded_categories: vec!["Lorcana".to_string()],
        }
    }
}

impl DataLoader {
    /// Create a loader with an explicit set of excluded categories
    pub fn new<I, S>(excluded_categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_categories: excluded_categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Load and clean a dataset from a CSV file
    pub fn from_csv<P: AsRef<Path>>(&self, path: P) -> Result<CleanedDataset> {
        let file = File::open(path)?;
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        self.from_dataframe(df)
    }

    /// Clean a dataset from an existing DataFrame
    pub fn from_dataframe(&self, df: DataFrame) -> Result<CleanedDataset> {
        let column_names = df.get_column_names();
        for required in REQUIRED_COLUMNS {
            if !column_names.iter().any(|name| *name == required) {
                return Err(CompassError::Data(format!(
                    "required column '{}' is missing from the dataset",
                    required
                )));
            }
        }

        let categories = column_as_str(&df, "Category")?;
        let years = column_as_i32(&df, "Year")?;
        let months = column_as_str(&df, "Month")?;
        let values = column_as_f64(&df, "market_value")?;

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            if self.excluded_categories.iter().any(|c| *c == categories[i]) {
                continue;
            }

            let month = parse_month_name(&months[i])?;
            records.push(Record {
                category: categories[i].clone(),
                year: years[i],
                month,
                market_value: values[i],
                date: first_of_month(years[i], month)?,
            });
        }

        debug!(records = records.len(), "cleaned dataset loaded");
        Ok(CleanedDataset::from_records(records))
    }
}

/// Parse a full calendar-month name into its month number (1-12)
pub fn parse_month_name(name: &str) -> Result<u32> {
    name.trim()
        .parse::<Month>()
        .map(|m| m.number_from_month())
        .map_err(|_| CompassError::Parse(format!("unrecognized month name '{}'", name)))
}

/// First calendar day of (year, month)
pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        CompassError::Parse(format!("invalid year/month combination {}-{}", year, month))
    })
}

fn column_as_str(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let col = df
        .column(name)
        .map_err(|e| CompassError::Data(format!("column '{}' not found: {}", name, e)))?;

    match col.dtype() {
        DataType::Utf8 => col
            .utf8()
            .map_err(CompassError::from)?
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| CompassError::Data(format!("column '{}' contains null values", name))),
        _ => Err(CompassError::Data(format!(
            "column '{}' cannot be read as text",
            name
        ))),
    }
}

fn column_as_i32(df: &DataFrame, name: &str) -> Result<Vec<i32>> {
    let col = df
        .column(name)
        .map_err(|e| CompassError::Data(format!("column '{}' not found: {}", name, e)))?;

    let values: Option<Vec<i32>> = match col.dtype() {
        DataType::Int64 => col
            .i64()
            .map_err(CompassError::from)?
            .into_iter()
            .map(|v| v.map(|x| x as i32))
            .collect(),
        DataType::Int32 => col
            .i32()
            .map_err(CompassError::from)?
            .into_iter()
            .collect(),
        _ => {
            return Err(CompassError::Data(format!(
                "column '{}' cannot be read as integers",
                name
            )))
        }
    };

    values.ok_or_else(|| CompassError::Data(format!("column '{}' contains null values", name)))
}

fn column_as_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .map_err(|e| CompassError::Data(format!("column '{}' not found: {}", name, e)))?;

    let values: Option<Vec<f64>> = match col.dtype() {
        DataType::Float64 => col
            .f64()
            .map_err(CompassError::from)?
            .into_iter()
            .collect(),
        DataType::Float32 => col
            .f32()
            .map_err(CompassError::from)?
            .into_iter()
            .map(|v| v.map(|x| x as f64))
            .collect(),
        DataType::Int64 => col
            .i64()
            .map_err(CompassError::from)?
            .into_iter()
            .map(|v| v.map(|x| x as f64))
            .collect(),
        DataType::Int32 => col
            .i32()
            .map_err(CompassError::from)?
            .into_iter()
            .map(|v| v.map(|x| x as f64))
            .collect(),
        _ => {
            return Err(CompassError::Data(format!(
                "column '{}' cannot be read as numbers",
                name
            )))
        }
    };

    values.ok_or_else(|| CompassError::Data(format!("column '{}' contains null values", name)))
}
