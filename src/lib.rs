//! # CardBoard Compass
//!
//! Workspace facade for the CardBoard Compass analytics stack. The
//! analytical pipeline (loading, aggregation, forecasting, momentum,
//! seasonal analysis, and reporting) lives in [`card_analytics`]; the
//! underlying indicator and forecasting math lives in [`market_math`].

pub use card_analytics;
pub use market_math;
