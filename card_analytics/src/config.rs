//! Runtime configuration for the analytics pipeline

use crate::error::{CompassError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for dataset cleaning and the analytics pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompassConfig {
    /// Categories selectable by the presentation layer
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    /// Categories removed from the dataset during cleaning
    #[serde(default = "default_excluded_categories")]
    pub excluded_categories: Vec<String>,
    /// Number of months to forecast ahead
    #[serde(default = "default_forecast_horizon")]
    pub forecast_horizon: usize,
    /// Short EMA span for the momentum oscillator
    #[serde(default = "default_short_span")]
    pub short_span: usize,
    /// Long EMA span for the momentum oscillator
    #[serde(default = "default_long_span")]
    pub long_span: usize,
    /// Signal line EMA span for the momentum oscillator
    #[serde(default = "default_signal_span")]
    pub signal_span: usize,
}

fn default_categories() -> Vec<String> {
    [
        "Fortnite",
        "Marvel",
        "Pokemon",
        "Star Wars",
        "Magic the Gathering",
        "Baseball",
        "Basketball",
        "Football",
        "Hockey",
        "Soccer",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_excluded_categories() -> Vec<String> {
    vec!["Lorcana".to_string()]
}

fn default_forecast_horizon() -> usize {
    12
}

fn default_short_span() -> usize {
    12
}

fn default_long_span() -> usize {
    26
}

fn default_signal_span() -> usize {
    9
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            excluded_categories: default_excluded_categories(),
            forecast_horizon: default_forecast_horizon(),
            short_span: default_short_span(),
            long_span: default_long_span(),
            signal_span: default_signal_span(),
        }
    }
}

impl CompassConfig {
    /// Whether a category is part of the selectable set
    pub fn is_known_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Whether a category is excluded during cleaning
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_categories.iter().any(|c| c == name)
    }
}

/// Load configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CompassConfig> {
    let content = fs::read_to_string(path)?;
    let config: CompassConfig = serde_json::from_str(&content)
        .map_err(|e| CompassError::Data(format!("invalid config file: {}", e)))?;
    Ok(config)
}
