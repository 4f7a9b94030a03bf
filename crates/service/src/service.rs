//! Analytics service - the calling layer around the engines
//!
//! Resolves request defaults from configuration, bounds request sizes,
//! dispatches to the engines and logs each operation. The engines themselves
//! stay silent; everything observable happens here.

use std::sync::Arc;

use fincast_anomaly::ZScoreDetector;
use fincast_clock::SystemClock;
use fincast_core::{Anomaly, ForecastResult, ForecastValidation, RiskAssessment};
use fincast_forecast::{LinearTrendForecaster, validate_forecast};
use fincast_ports::{AnalyticsError, AnomalyDetector, Clock, Forecaster, RiskScorer};
use fincast_risk::WeightedRiskScorer;
use log::{debug, info, warn};
use thiserror::Error;

use crate::config::{AnalyticsConfig, ConfigError};
use crate::request::{
    AnalyticsOutcome, AnalyticsRequest, AnalyticsResponse, AnomalyRequest, ErrorKind,
    ForecastRequest, RiskRequest, ValidationRequest,
};

/// Errors surfaced to callers of the service
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid request: {0}")]
    Request(String),
}

impl ServiceError {
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, ServiceError::Analytics(e) if e.is_insufficient_data())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Analytics(e) if e.is_insufficient_data() => ErrorKind::InsufficientData,
            ServiceError::Analytics(_) | ServiceError::Request(_) => ErrorKind::InvalidInput,
            ServiceError::Config(_) => ErrorKind::Config,
        }
    }

    /// Error envelope carrying this error's kind and message
    pub fn to_response(&self) -> AnalyticsResponse {
        AnalyticsResponse::Error {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// Facade over the forecasting, anomaly and risk engines
pub struct AnalyticsService {
    config: AnalyticsConfig,
    forecaster: Box<dyn Forecaster>,
    detector: ZScoreDetector,
    scorer: Box<dyn RiskScorer>,
}

impl AnalyticsService {
    /// Create a service whose timestamps and schedule checks use `clock`
    pub fn new(config: AnalyticsConfig, clock: Arc<dyn Clock>) -> Self {
        debug!(
            "Analytics service configured: clock={}, default_periods={}, max_periods={}, anomaly_threshold={}",
            clock.name(),
            config.forecast.default_periods,
            config.forecast.max_periods,
            config.anomaly.threshold
        );

        Self {
            forecaster: Box::new(LinearTrendForecaster::new(clock.clone())),
            detector: ZScoreDetector::with_threshold(config.anomaly.threshold),
            scorer: Box::new(WeightedRiskScorer::new(clock)),
            config,
        }
    }

    /// Create a service on wall-clock time
    pub fn with_system_clock(config: AnalyticsConfig) -> Self {
        Self::new(config, Arc::new(SystemClock::new()))
    }

    /// Replace the forecasting model
    pub fn with_forecaster(mut self, forecaster: Box<dyn Forecaster>) -> Self {
        self.forecaster = forecaster;
        self
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Forecast a project's spending
    pub fn forecast(&self, request: &ForecastRequest) -> Result<ForecastResult, ServiceError> {
        let periods = request
            .periods
            .unwrap_or(self.config.forecast.default_periods);

        if periods > self.config.forecast.max_periods {
            warn!(
                "Forecast rejected: periods={} exceeds max_periods={}",
                periods, self.config.forecast.max_periods
            );
            return Err(ServiceError::Request(format!(
                "periods {} exceeds the maximum of {}",
                periods, self.config.forecast.max_periods
            )));
        }

        match self.forecaster.forecast(&request.history, periods) {
            Ok(result) => {
                info!(
                    "Forecast generated: model={}, data_points={}, periods={}, trend={}, seasonality={}",
                    self.forecaster.name(),
                    result.data_points,
                    result.horizon(),
                    result.trend,
                    result.seasonality
                );
                Ok(result)
            }
            Err(e) => {
                warn!(
                    "Forecast failed: data_points={}, periods={}, error={}",
                    request.history.len(),
                    periods,
                    e
                );
                Err(e.into())
            }
        }
    }

    /// Flag unusual expenses
    pub fn detect_anomalies(&self, request: &AnomalyRequest) -> Result<Vec<Anomaly>, ServiceError> {
        let detector = match request.threshold {
            Some(t) if !t.is_finite() || t < 0.0 => {
                warn!("Anomaly detection rejected: threshold={}", t);
                return Err(ServiceError::Request(format!(
                    "threshold must be a non-negative number, got {t}"
                )));
            }
            Some(t) => ZScoreDetector::with_threshold(t),
            None => self.detector,
        };

        let anomalies = detector.detect(&request.expenses);

        info!(
            "Anomaly detection complete: expenses={}, threshold={}, anomalies={}",
            request.expenses.len(),
            detector.threshold(),
            anomalies.len()
        );

        Ok(anomalies)
    }

    /// Score a project's risk
    ///
    /// Structural problems in the snapshot are logged but do not block scoring.
    pub fn assess_risk(&self, request: &RiskRequest) -> RiskAssessment {
        let issues = request.project.validate();
        if !issues.is_empty() {
            warn!("Project snapshot has structural issues: {:?}", issues);
        }

        let assessment = self.scorer.score(&request.project);

        let overdue = request
            .project
            .timeline
            .overdue_milestones(assessment.calculated_at)
            .count();
        if overdue > 0 {
            debug!("Project has {} overdue milestone(s)", overdue);
        }

        info!(
            "Risk assessed: model={}, score={}, level={}, factors={}",
            self.scorer.name(),
            assessment.score,
            assessment.level,
            assessment.factors.len()
        );

        assessment
    }

    /// Compare a past forecast with what was actually spent
    pub fn validate_forecast(
        &self,
        request: &ValidationRequest,
    ) -> Result<ForecastValidation, ServiceError> {
        let validation = validate_forecast(&request.forecast, &request.actuals)?;

        info!(
            "Forecast validated: periods_compared={}, mae={:.2}, accuracy={:?}",
            validation.periods_compared, validation.mean_absolute_error, validation.accuracy
        );

        Ok(validation)
    }

    /// Dispatch a request and wrap the outcome in a response envelope
    pub fn handle(&self, request: &AnalyticsRequest) -> AnalyticsResponse {
        let outcome = match request {
            AnalyticsRequest::Forecast(r) => self.forecast(r).map(AnalyticsOutcome::Forecast),
            AnalyticsRequest::Anomalies(r) => {
                self.detect_anomalies(r).map(AnalyticsOutcome::Anomalies)
            }
            AnalyticsRequest::Risk(r) => Ok(AnalyticsOutcome::Risk(self.assess_risk(r))),
            AnalyticsRequest::ValidateForecast(r) => {
                self.validate_forecast(r).map(AnalyticsOutcome::Validation)
            }
        };

        match outcome {
            Ok(result) => AnalyticsResponse::Ok { result },
            Err(e) => e.to_response(),
        }
    }

    /// Parse a JSON request and handle it; malformed input becomes an error response
    pub fn respond(&self, json: &str) -> AnalyticsResponse {
        match serde_json::from_str::<AnalyticsRequest>(json) {
            Ok(request) => {
                debug!("Handling {} request", request.operation());
                self.handle(&request)
            }
            Err(e) => {
                warn!("Malformed request: {}", e);
                AnalyticsResponse::Error {
                    kind: ErrorKind::InvalidInput,
                    message: format!("Malformed request: {e}"),
                }
            }
        }
    }

    /// Like [`respond`](Self::respond), rendered as pretty-printed JSON
    pub fn handle_json(&self, json: &str) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.respond(json))
    }
}
