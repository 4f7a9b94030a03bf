//! Fincast Forecasting
//!
//! Budget forecasting for the fincast analytics engine:
//!
//! - [`LinearTrendForecaster`] extrapolates an ordinal linear trend with a
//!   fixed-width 95% band, plus trend/seasonality metadata
//! - [`validate_forecast`] scores a past forecast against observed amounts

mod linear;
mod validation;

pub use linear::{ALGORITHM, LinearTrendForecaster, MIN_HISTORY};
pub use validation::validate_forecast;

// Re-export the trait from ports for convenience
pub use fincast_ports::{AnalyticsError, AnalyticsResult, Forecaster};
