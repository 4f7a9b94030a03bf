use std::fmt;

use serde::{Deserialize, Serialize};

use super::ExpenseRecord;
use crate::values::{Amount, Timestamp};

/// How far outside the normal spending pattern an expense sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Medium => f.write_str("medium"),
            Severity::High => f.write_str("high"),
        }
    }
}

/// Which side of the mean an anomalous expense falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Overspending,
    Underspending,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Overspending => f.write_str("overspending"),
            Direction::Underspending => f.write_str("underspending"),
        }
    }
}

/// A flagged expense together with its classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    pub id: String,
    pub date: Timestamp,
    pub amount: Amount,
    pub category: String,
    pub description: String,
    /// Absolute z-score, always >= 0
    pub z_score: f64,
    pub severity: Severity,
    pub direction: Direction,
    pub recommendation: String,
}

impl Anomaly {
    /// Build an anomaly from the flagged record and its classification
    pub fn from_record(
        record: &ExpenseRecord,
        z_score: f64,
        severity: Severity,
        direction: Direction,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            id: record.id.clone(),
            date: record.date,
            amount: record.amount,
            category: record.category.clone(),
            description: record.description.clone(),
            z_score,
            severity,
            direction,
            recommendation: recommendation.into(),
        }
    }
}
