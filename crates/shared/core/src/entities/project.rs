use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::values::{Amount, Timestamp};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Project priority as set by the portfolio owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
    Usd,
    Eur,
    Gbp,
}

/// Allocation for one spending category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLine {
    pub category: String,
    pub allocated: Amount,
    #[serde(default)]
    pub spent: Amount,
}

/// Budget figures of a project at the time of the snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSnapshot {
    pub allocated: Amount,
    #[serde(default)]
    pub spent: Amount,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub breakdown: Vec<BudgetLine>,
}

impl BudgetSnapshot {
    pub fn new(allocated: Amount, spent: Amount) -> Self {
        Self {
            allocated,
            spent,
            currency: Currency::default(),
            breakdown: Vec::new(),
        }
    }

    /// Spent as a percentage of allocated, unrounded
    ///
    /// An allocation of zero yields 0% rather than an undefined ratio.
    ///
    /// Ratios too large for `Decimal` are computed in floating point instead.
    pub fn utilization(&self) -> f64 {
        if self.allocated.is_zero() {
            return 0.0;
        }
        self.utilization_decimal()
            .and_then(|u| u.to_f64())
            .unwrap_or_else(|| self.utilization_f64())
    }

    /// Utilization rounded to a whole percentage (half away from zero)
    pub fn utilization_percent(&self) -> i64 {
        if self.allocated.is_zero() {
            return 0;
        }
        self.utilization_decimal()
            .map(|u| u.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|u| u.to_i64())
            .unwrap_or_else(|| self.utilization_f64().round() as i64)
    }

    pub fn remaining(&self) -> Amount {
        self.allocated - self.spent
    }

    /// Sum of the per-category allocations
    pub fn breakdown_total(&self) -> Amount {
        self.breakdown.iter().map(|line| line.allocated).sum()
    }

    fn utilization_decimal(&self) -> Option<Decimal> {
        self.spent
            .checked_div(self.allocated)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    }

    fn utilization_f64(&self) -> f64 {
        match (self.spent.to_f64(), self.allocated.to_f64()) {
            (Some(spent), Some(allocated)) if allocated != 0.0 => spent / allocated * 100.0,
            _ => 0.0,
        }
    }
}

/// Planned start and end of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl Timeline {
    pub fn new(start_date: Timestamp, end_date: Timestamp) -> Self {
        Self {
            start_date,
            end_date,
            milestones: Vec::new(),
        }
    }

    pub fn with_milestone(mut self, milestone: Milestone) -> Self {
        self.milestones.push(milestone);
        self
    }

    /// Milestones dated before `now` that are not completed
    pub fn overdue_milestones(&self, now: Timestamp) -> impl Iterator<Item = &Milestone> {
        self.milestones
            .iter()
            .filter(move |m| m.date < now && m.status != MilestoneStatus::Completed)
    }

    /// Share of the planned duration that has elapsed at `now`, in percent
    ///
    /// Not clamped: values below 0 mean the project has not started, values
    /// above 100 mean the end date has passed. A timeline whose end is not
    /// after its start counts as fully elapsed once `now` reaches the start.
    pub fn elapsed_percent(&self, now: Timestamp) -> f64 {
        let total = (self.end_date - self.start_date).num_milliseconds();
        let elapsed = (now - self.start_date).num_milliseconds();

        if total <= 0 {
            return if elapsed >= 0 { 100.0 } else { 0.0 };
        }

        elapsed as f64 / total as f64 * 100.0
    }

    /// Planned duration in whole days, rounded up
    pub fn duration_days(&self) -> i64 {
        let millis = (self.end_date - self.start_date).num_milliseconds().abs();
        (millis as f64 / MILLIS_PER_DAY).ceil() as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    #[default]
    Upcoming,
    InProgress,
    Completed,
    Delayed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub name: String,
    pub date: Timestamp,
    #[serde(default)]
    pub status: MilestoneStatus,
    #[serde(default)]
    pub description: String,
}

impl Milestone {
    pub fn new(name: impl Into<String>, date: Timestamp) -> Self {
        Self {
            name: name.into(),
            date,
            status: MilestoneStatus::Upcoming,
            description: String::new(),
        }
    }

    pub fn with_status(mut self, status: MilestoneStatus) -> Self {
        self.status = status;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Lead,
    #[default]
    Member,
    Stakeholder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub user_id: String,
    #[serde(default)]
    pub role: TeamRole,
}

impl TeamMember {
    pub fn new(user_id: impl Into<String>, role: TeamRole) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }
}

/// Probability or impact rating of a registered risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    #[default]
    Identified,
    Mitigated,
    Occurred,
    Closed,
}

/// Entry in a project's risk registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRisk {
    pub title: String,
    pub probability: Rating,
    pub impact: Rating,
    #[serde(default)]
    pub status: RiskStatus,
}

impl ProjectRisk {
    pub fn new(title: impl Into<String>, probability: Rating, impact: Rating) -> Self {
        Self {
            title: title.into(),
            probability,
            impact,
            status: RiskStatus::Identified,
        }
    }
}

/// Structural problems a snapshot can carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SnapshotIssue {
    EndNotAfterStart,
    BreakdownExceedsAllocation,
    NegativeBudget,
}

/// Read-only view of a project, as needed for risk scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    pub budget: BudgetSnapshot,
    pub timeline: Timeline,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub risks: Vec<ProjectRisk>,
}

impl ProjectSnapshot {
    /// Check the invariants the project store enforces on save
    ///
    /// Returns every issue found; an empty list means the snapshot is well formed.
    pub fn validate(&self) -> Vec<SnapshotIssue> {
        let mut issues = Vec::new();

        if self.timeline.start_date >= self.timeline.end_date {
            issues.push(SnapshotIssue::EndNotAfterStart);
        }

        if self.budget.allocated.is_sign_negative() || self.budget.spent.is_sign_negative() {
            issues.push(SnapshotIssue::NegativeBudget);
        }

        if !self.budget.breakdown.is_empty()
            && self.budget.breakdown_total() > self.budget.allocated
        {
            issues.push(SnapshotIssue::BreakdownExceedsAllocation);
        }

        issues
    }
}
