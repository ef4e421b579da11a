//! # Card Analytics
//!
//! Market analytics for collectible card categories.
//!
//! ## Features
//!
//! - Dataset loading and cleaning (month-name parsing, chronological
//!   sorting, category exclusions)
//! - Monthly aggregation into total and mean series per category
//! - Seasonal exponential-smoothing forecast with a symmetric 95%
//!   confidence band
//! - MACD momentum analysis with six-bucket trend classification
//! - Seasonal "best month to buy" detection
//! - Side-by-side comparison of two categories
//!
//! ## Quick Start
//!
//! ```no_run
//! use card_analytics::{Analyzer, CompassConfig, DataLoader};
//!
//! fn main() -> card_analytics::Result<()> {
//!     let config = CompassConfig::default();
//!     let loader = DataLoader::new(config.excluded_categories.clone());
//!     let data = loader.from_csv("data.csv")?;
//!
//!     let analyzer = Analyzer::new(config);
//!     let bundle = analyzer.analyze(&data, "Pokemon")?;
//!
//!     println!("{}", bundle.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod config;
pub mod data;
pub mod error;
pub mod forecast;
pub mod momentum;
pub mod narrative;
pub mod report;
pub mod seasonal;
pub mod series;

// Re-export commonly used types
pub use crate::config::CompassConfig;
pub use crate::data::{CleanedDataset, DataLoader, Record};
pub use crate::error::{CompassError, Result};
pub use crate::forecast::{ForecastResult, Forecaster};
pub use crate::momentum::{MomentumAnalyzer, MomentumResult, TrendBucket};
pub use crate::report::{AnalysisBundle, Analyzer, CategorySummary, ComparisonReport};
pub use crate::seasonal::SeasonalAverages;
pub use crate::series::MonthlySeries;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
