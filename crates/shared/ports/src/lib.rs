//! Fincast Ports
//!
//! Port definitions (traits) for the fincast budget analytics engine.
//! These define the boundaries between the analytics engines and their callers.

mod anomaly;
mod clock;
mod error;
mod forecast;
mod risk;

pub use anomaly::AnomalyDetector;
pub use clock::Clock;
pub use error::{AnalyticsError, AnalyticsResult};
pub use forecast::Forecaster;
pub use risk::RiskScorer;
