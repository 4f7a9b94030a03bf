mod anomaly;
mod assessment;
mod expense;
mod forecast;
mod history;
mod project;

pub use anomaly::{Anomaly, Direction, Severity};
pub use assessment::{RiskAssessment, RiskFactor, RiskLevel};
pub use expense::ExpenseRecord;
pub use forecast::{ForecastPoint, ForecastResult, ForecastValidation, Trend};
pub use history::HistoricalPoint;
pub use project::{
    BudgetLine, BudgetSnapshot, Currency, Milestone, MilestoneStatus, Priority, ProjectRisk,
    ProjectSnapshot, Rating, RiskStatus, SnapshotIssue, TeamMember, TeamRole, Timeline,
};
