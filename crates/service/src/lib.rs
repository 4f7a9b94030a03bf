//! Fincast Service - Budget analytics calling layer
//!
//! Wraps the analytics engines for request handlers:
//!
//! - **Config**: JSON file + environment overrides
//! - **Request**: JSON envelope, one variant per operation
//! - **Service**: request defaults, size limits, dispatch and logging
//!
//! ## Architecture
//!
//! ```text
//!               ┌───────────────────────┐
//!               │   AnalyticsService    │
//!               │ (config, logging)     │
//!               └───────────┬───────────┘
//!                           │
//!        ┌──────────────────┼──────────────────┐
//!        ▼                  ▼                  ▼
//! ┌──────────────┐  ┌──────────────┐  ┌──────────────┐
//! │  Forecaster  │  │   Anomaly    │  │    Risk      │
//! │ (linear)     │  │  (z-score)   │  │  (weighted)  │
//! └──────┬───────┘  └──────┬───────┘  └──────────────┘
//!        └────────┬────────┘
//!                 ▼
//!         ┌──────────────┐
//!         │    Stats     │
//!         └──────────────┘
//! ```

pub mod config;
pub mod request;
pub mod service;

// Re-export main types
pub use config::{AnalyticsConfig, AnomalySettings, ConfigError, ForecastSettings, SENSITIVITY_ENV};
pub use request::{
    AnalyticsOutcome, AnalyticsRequest, AnalyticsResponse, AnomalyRequest, ErrorKind,
    ForecastRequest, RiskRequest, ValidationRequest,
};
pub use service::{AnalyticsService, ServiceError};
