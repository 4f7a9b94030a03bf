use serde::{Deserialize, Serialize};

use crate::values::{Amount, Timestamp};

/// A booked expense, supplied read-only by the budget store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: String,
    pub date: Timestamp,
    pub amount: Amount,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl ExpenseRecord {
    pub fn new(
        id: impl Into<String>,
        date: Timestamp,
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }
}
