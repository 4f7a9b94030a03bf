//! Fincast Anomaly Detection
//!
//! Flags expenses that sit unusually far from a project's average spend.

mod zscore;

pub use zscore::{DEFAULT_THRESHOLD, MIN_SAMPLE_SIZE, ZScoreDetector};

// Re-export the trait from ports for convenience
pub use fincast_ports::AnomalyDetector;
