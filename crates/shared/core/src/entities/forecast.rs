use std::fmt;

use serde::{Deserialize, Serialize};

use crate::values::Timestamp;

/// Direction of a historical series, judged by comparing its two halves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimate for a single future period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// 1-based distance from the last historical point
    pub period: u32,
    pub predicted_value: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Percentage in [50, 95]
    pub confidence: f64,
}

impl ForecastPoint {
    /// Width of the confidence band
    pub fn interval_width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    /// Returns true if `value` falls inside the band (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower_bound && value <= self.upper_bound
    }
}

/// Complete output of one forecast call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    /// Ascending by period, one entry per requested period
    pub forecasts: Vec<ForecastPoint>,
    pub trend: Trend,
    pub seasonality: bool,
    /// Data-sufficiency proxy in [0, 90], not a backtested metric
    pub accuracy: f64,
    pub data_points: usize,
    pub algorithm: String,
    pub generated_at: Timestamp,
}

impl ForecastResult {
    /// Number of forecast periods
    pub fn horizon(&self) -> usize {
        self.forecasts.len()
    }

    /// Look up the estimate for a given period
    pub fn point(&self, period: u32) -> Option<&ForecastPoint> {
        self.forecasts.iter().find(|p| p.period == period)
    }
}

/// Comparison of a past forecast against the amounts that were later observed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastValidation {
    pub periods_compared: usize,
    pub mean_absolute_error: f64,
    /// None when every observed amount was zero
    pub mean_absolute_percentage_error: Option<f64>,
    /// `100 - MAPE`, clamped to [0, 100]
    pub accuracy: Option<f64>,
    /// Fraction in [0, 1] of observations inside their confidence band
    pub within_bounds_rate: f64,
}
