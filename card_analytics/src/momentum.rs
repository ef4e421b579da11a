//! Momentum analysis: MACD, signal line, and trend buckets
//!
//! Computes the MACD oscillator over a monthly series (spans 12/26,
//! signal 9) and classifies each point's divergence into one of six
//! ordered momentum buckets.

use crate::error::{CompassError, Result};
use crate::series::MonthlySeries;
use chrono::NaiveDate;
use market_math::oscillators::Macd;
use serde::Serialize;
use std::fmt;

/// Momentum trend buckets, from strongest upward to strongest downward.
///
/// There is intentionally no "Medium Downward" bucket; the published
/// classification jumps from Low Downward straight to High Downward.
/// `Neutral` is the classifier's fallback and is only reachable for a
/// NaN divergence, since the five thresholds cover the whole real line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendBucket {
    HighUpward,
    MediumUpward,
    LowUpward,
    LowDownward,
    HighDownward,
    Neutral,
}

impl TrendBucket {
    /// Classify a divergence value. Thresholds are evaluated top to
    /// bottom; the first match wins.
    pub fn classify(divergence: f64) -> Self {
        if divergence > 0.02 {
            TrendBucket::HighUpward
        } else if divergence > 0.005 {
            TrendBucket::MediumUpward
        } else if divergence > -0.005 {
            TrendBucket::LowUpward
        } else if divergence > -0.02 {
            TrendBucket::LowDownward
        } else if divergence <= -0.02 {
            TrendBucket::HighDownward
        } else {
            TrendBucket::Neutral
        }
    }

    /// Whether this bucket signals upward momentum
    pub fn is_upward(&self) -> bool {
        matches!(
            self,
            TrendBucket::HighUpward | TrendBucket::MediumUpward | TrendBucket::LowUpward
        )
    }

    /// Human-readable bucket label
    pub fn label(&self) -> &'static str {
        match self {
            TrendBucket::HighUpward => "High Upward",
            TrendBucket::MediumUpward => "Medium Upward",
            TrendBucket::LowUpward => "Low Upward",
            TrendBucket::LowDownward => "Low Downward",
            TrendBucket::HighDownward => "High Downward",
            TrendBucket::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for TrendBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// MACD series and per-point trend buckets, aligned to the input series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MomentumResult {
    pub dates: Vec<NaiveDate>,
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub divergence: Vec<f64>,
    pub buckets: Vec<TrendBucket>,
}

impl MomentumResult {
    pub fn len(&self) -> usize {
        self.macd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macd.is_empty()
    }

    /// Bucket of the most recent observation
    pub fn latest_bucket(&self) -> Option<TrendBucket> {
        self.buckets.last().copied()
    }
}

/// Momentum analyzer for monthly series
#[derive(Debug, Clone)]
pub struct MomentumAnalyzer {
    short_span: usize,
    long_span: usize,
    signal_span: usize,
}

impl Default for MomentumAnalyzer {
    fn default() -> Self {
        Self {
            short_span: 12,
            long_span: 26,
            signal_span: 9,
        }
    }
}

impl MomentumAnalyzer {
    pub fn new(short_span: usize, long_span: usize, signal_span: usize) -> Self {
        Self {
            short_span,
            long_span,
            signal_span,
        }
    }

    /// Compute MACD, signal, divergence, and buckets for a series
    pub fn analyze(&self, series: &MonthlySeries) -> Result<MomentumResult> {
        if series.is_empty() {
            return Err(CompassError::InsufficientData(
                "momentum analysis requires a non-empty series".to_string(),
            ));
        }

        let oscillator = Macd::new(self.short_span, self.long_span, self.signal_span)
            .map_err(|e| CompassError::Data(e.to_string()))?;
        let macd = oscillator
            .compute(&series.values())
            .map_err(|e| CompassError::Data(e.to_string()))?;

        let buckets = macd.divergence.iter().map(|&d| TrendBucket::classify(d)).collect();

        Ok(MomentumResult {
            dates: series.dates(),
            macd: macd.macd,
            signal: macd.signal,
            divergence: macd.divergence,
            buckets,
        })
    }
}
