//! Request/response envelope
//!
//! One JSON request per operation, tagged by `operation`:
//!
//! ```text
//! { "operation": "forecast",         "history": [...], "periods": 6 }
//! { "operation": "anomalies",        "expenses": [...], "threshold": 2.5 }
//! { "operation": "risk",             "project": {...} }
//! { "operation": "validateForecast", "forecast": {...}, "actuals": [...] }
//! ```
//!
//! Responses carry either `"status": "ok"` with a `result`, or
//! `"status": "error"` with a `kind` and a `message`.

use fincast_core::{
    Amount, Anomaly, ExpenseRecord, ForecastResult, ForecastValidation, HistoricalPoint,
    ProjectSnapshot, RiskAssessment,
};
use serde::{Deserialize, Serialize};

/// Incoming request, one variant per operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase")]
pub enum AnalyticsRequest {
    Forecast(ForecastRequest),
    Anomalies(AnomalyRequest),
    Risk(RiskRequest),
    ValidateForecast(ValidationRequest),
}

impl AnalyticsRequest {
    pub fn operation(&self) -> &'static str {
        match self {
            AnalyticsRequest::Forecast(_) => "forecast",
            AnalyticsRequest::Anomalies(_) => "anomalies",
            AnalyticsRequest::Risk(_) => "risk",
            AnalyticsRequest::ValidateForecast(_) => "validateForecast",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    /// Chronological history, oldest first
    pub history: Vec<HistoricalPoint>,
    /// Horizon; the configured default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyRequest {
    pub expenses: Vec<ExpenseRecord>,
    /// Per-request z-score threshold; the configured one applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRequest {
    pub project: ProjectSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    pub forecast: ForecastResult,
    /// Observed amounts, starting with the first forecast period
    pub actuals: Vec<Amount>,
}

/// Successful result of any operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalyticsOutcome {
    Forecast(ForecastResult),
    Anomalies(Vec<Anomaly>),
    Risk(RiskAssessment),
    Validation(ForecastValidation),
}

/// Failure category, so callers can present too-little-history distinctly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    InsufficientData,
    InvalidInput,
    Config,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AnalyticsResponse {
    Ok { result: AnalyticsOutcome },
    Error { kind: ErrorKind, message: String },
}

impl AnalyticsResponse {
    pub fn is_ok(&self) -> bool {
        matches!(self, AnalyticsResponse::Ok { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_forecast_request() {
        let json = r#"{
            "operation": "forecast",
            "history": [{"amount": 100}, {"amount": "120.5", "date": "2024-02-01T00:00:00Z"}],
            "periods": 4
        }"#;

        let request: AnalyticsRequest = serde_json::from_str(json).unwrap();

        match request {
            AnalyticsRequest::Forecast(r) => {
                assert_eq!(r.history.len(), 2);
                assert_eq!(r.history[1].amount, dec!(120.5));
                assert!(r.history[1].date.is_some());
                assert_eq!(r.periods, Some(4));
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn test_parse_anomaly_request_without_threshold() {
        let json = r#"{
            "operation": "anomalies",
            "expenses": [{
                "id": "e1", "date": "2024-01-05T00:00:00Z", "amount": 40,
                "category": "Travel", "description": "Taxi"
            }]
        }"#;

        let request: AnalyticsRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.operation(), "anomalies");
        assert!(matches!(
            request,
            AnalyticsRequest::Anomalies(AnomalyRequest {
                threshold: None,
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        let json = r#"{ "operation": "train", "data": [] }"#;
        assert!(serde_json::from_str::<AnalyticsRequest>(json).is_err());
    }

    #[test]
    fn test_error_response_shape() {
        let response = AnalyticsResponse::Error {
            kind: ErrorKind::InsufficientData,
            message: "need more".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(value["kind"], "insufficientData");
        assert!(!response.is_ok());
    }
}
