//! Fincast Core Domain
//!
//! Pure domain types for the fincast budget analytics engine.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Anomaly detection
    Anomaly,
    // Project snapshot
    BudgetLine,
    BudgetSnapshot,
    Currency,
    Direction,
    ExpenseRecord,
    // Forecasting
    ForecastPoint,
    ForecastResult,
    ForecastValidation,
    HistoricalPoint,
    Milestone,
    MilestoneStatus,
    Priority,
    ProjectRisk,
    ProjectSnapshot,
    Rating,
    // Risk scoring
    RiskAssessment,
    RiskFactor,
    RiskLevel,
    RiskStatus,
    Severity,
    SnapshotIssue,
    TeamMember,
    TeamRole,
    Timeline,
    Trend,
};
pub use values::{Amount, Timestamp};
