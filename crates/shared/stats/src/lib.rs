//! Fincast Statistics
//!
//! Pure numeric building blocks shared by the forecasting and anomaly engines:
//!
//! - **kernel**: mean, population variance, standard deviation, ordinary least squares
//! - **trend**: half-split trend direction and a coarse quarterly seasonality check
//!
//! Every function is stateless and reads only its arguments.

pub mod kernel;
pub mod trend;

pub use kernel::{LinearRegression, mean, std_dev, variance};
pub use trend::{classify_trend, detect_seasonality};

// Re-export the error types from ports for convenience
pub use fincast_ports::{AnalyticsError, AnalyticsResult};
