use fincast_core::{ForecastResult, HistoricalPoint};

use crate::error::AnalyticsResult;

/// Port for budget forecasting models
pub trait Forecaster: Send + Sync {
    /// Project `periods` future values from a chronological history
    ///
    /// Fails with `InsufficientData` when the history is too short for the model.
    fn forecast(&self, history: &[HistoricalPoint], periods: u32)
    -> AnalyticsResult<ForecastResult>;

    /// Get the name of the model
    fn name(&self) -> &str;
}
