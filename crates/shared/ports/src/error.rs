use thiserror::Error;

/// Errors raised by the analytics computations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Statistic is undefined for an empty sequence")]
    EmptyInput,

    #[error("Forecast horizon must be at least 1 period, got {0}")]
    InvalidPeriods(u32),
}

impl AnalyticsError {
    /// Returns true for the too-little-history case callers present separately
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, AnalyticsError::InsufficientData { .. })
    }
}

pub type AnalyticsResult<T> = std::result::Result<T, AnalyticsError>;
