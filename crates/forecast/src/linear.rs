use std::sync::Arc;

use fincast_core::{ForecastPoint, ForecastResult, HistoricalPoint};
use fincast_ports::{AnalyticsError, AnalyticsResult, Clock, Forecaster};
use fincast_stats::{LinearRegression, classify_trend, detect_seasonality, std_dev};
use rust_decimal::prelude::ToPrimitive;

/// Model name reported in every result
pub const ALGORITHM: &str = "Linear Regression with Time Series Analysis";

/// Shortest history the model accepts
pub const MIN_HISTORY: usize = 3;

/// Two-sided 95% normal quantile; not adjusted for sample size
const Z_95: f64 = 1.96;

const BASE_CONFIDENCE: f64 = 60.0;
const CONFIDENCE_PER_POINT: f64 = 2.0;
const CONFIDENCE_DECAY_PER_PERIOD: f64 = 2.0;
const MAX_CONFIDENCE: f64 = 95.0;
const MIN_CONFIDENCE: f64 = 50.0;

/// History length at which the accuracy proxy saturates
const FULL_ACCURACY_POINTS: f64 = 12.0;
const MAX_ACCURACY: f64 = 90.0;

/// Linear-trend forecaster
///
/// Fits `amount ~ index` by least squares, where the index is the position in
/// the history (calendar gaps are ignored), and extrapolates it. Every period
/// gets the same band of `1.96 * stddev(history)` around its estimate; the
/// estimate and the lower bound are clamped at zero.
pub struct LinearTrendForecaster {
    clock: Arc<dyn Clock>,
}

impl LinearTrendForecaster {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Confidence for a forecast `period` steps ahead of `data_points` of history
    ///
    /// Starts at `60 + 2 * data_points` (capped at 95) and drops 2 points per
    /// period, never below 50.
    pub fn confidence(data_points: usize, period: u32) -> f64 {
        let base = (BASE_CONFIDENCE + CONFIDENCE_PER_POINT * data_points as f64).min(MAX_CONFIDENCE);
        (base - CONFIDENCE_DECAY_PER_PERIOD * period as f64).max(MIN_CONFIDENCE)
    }

    /// Data-sufficiency proxy: 90 at twelve or more points, proportionally less below
    pub fn accuracy(data_points: usize) -> f64 {
        ((data_points as f64 / FULL_ACCURACY_POINTS).min(1.0) * MAX_ACCURACY).round()
    }

    fn amounts(history: &[HistoricalPoint]) -> AnalyticsResult<Vec<f64>> {
        history
            .iter()
            .map(|point| point.amount.to_f64())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                AnalyticsError::DegenerateInput("amount not representable as f64".to_string())
            })
    }
}

impl Forecaster for LinearTrendForecaster {
    fn forecast(
        &self,
        history: &[HistoricalPoint],
        periods: u32,
    ) -> AnalyticsResult<ForecastResult> {
        if periods == 0 {
            return Err(AnalyticsError::InvalidPeriods(periods));
        }
        if history.len() < MIN_HISTORY {
            return Err(AnalyticsError::InsufficientData {
                required: MIN_HISTORY,
                actual: history.len(),
            });
        }

        let amounts = Self::amounts(history)?;
        let indices: Vec<f64> = (0..amounts.len()).map(|i| i as f64).collect();
        let model = LinearRegression::fit(&indices, &amounts)?;

        let band = Z_95 * std_dev(&amounts)?;
        let last_index = amounts.len() - 1;

        let forecasts = (1..=periods)
            .map(|period| {
                let future_index = (last_index + period as usize) as f64;
                let predicted = model.predict(future_index).max(0.0);

                ForecastPoint {
                    period,
                    predicted_value: predicted,
                    lower_bound: (predicted - band).max(0.0),
                    upper_bound: predicted + band,
                    confidence: Self::confidence(history.len(), period),
                }
            })
            .collect();

        Ok(ForecastResult {
            forecasts,
            trend: classify_trend(&amounts),
            seasonality: detect_seasonality(&amounts),
            accuracy: Self::accuracy(history.len()),
            data_points: history.len(),
            algorithm: ALGORITHM.to_string(),
            generated_at: self.clock.now(),
        })
    }

    fn name(&self) -> &str {
        ALGORITHM
    }
}
