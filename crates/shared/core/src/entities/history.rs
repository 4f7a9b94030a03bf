use serde::{Deserialize, Serialize};

use crate::values::{Amount, Timestamp};

/// One observation of a project's historical spending series
///
/// The time ordinal of a point is its position in the supplied sequence.
/// Calendar dates are carried for the caller's benefit only and never
/// influence the regression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPoint {
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
}

impl HistoricalPoint {
    pub fn new(amount: Amount) -> Self {
        Self { amount, date: None }
    }

    pub fn with_date(amount: Amount, date: Timestamp) -> Self {
        Self {
            amount,
            date: Some(date),
        }
    }
}

impl From<Amount> for HistoricalPoint {
    fn from(amount: Amount) -> Self {
        Self::new(amount)
    }
}
