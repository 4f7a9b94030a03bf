use std::fmt;

use serde::{Deserialize, Serialize};

use crate::values::Timestamp;

/// Coarse bucket of a composite risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// `high` above 70, `medium` above 40, otherwise `low`
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            RiskLevel::High
        } else if score > 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => f.write_str("low"),
            RiskLevel::Medium => f.write_str("medium"),
            RiskLevel::High => f.write_str("high"),
        }
    }
}

/// A named condition contributing points to the composite risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskFactor {
    /// More than 90% of the budget spent
    HighBudgetUtilization,
    /// More than 75% (and at most 90%) of the budget spent
    MediumBudgetUtilization,
    /// Elapsed time runs more than 10 points ahead of budget utilization
    BehindSchedule,
    /// Fewer than three team members
    SmallTeam,
    CriticalPriority,
    /// More than five entries in the risk registry
    ManyIdentifiedRisks,
}

impl RiskFactor {
    pub fn points(&self) -> u32 {
        match self {
            RiskFactor::HighBudgetUtilization => 30,
            RiskFactor::MediumBudgetUtilization => 15,
            RiskFactor::BehindSchedule => 25,
            RiskFactor::SmallTeam => 10,
            RiskFactor::CriticalPriority => 15,
            RiskFactor::ManyIdentifiedRisks => 20,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskFactor::HighBudgetUtilization => "High budget utilization (>90%)",
            RiskFactor::MediumBudgetUtilization => "Medium budget utilization (75-90%)",
            RiskFactor::BehindSchedule => "Behind schedule",
            RiskFactor::SmallTeam => "Small team size",
            RiskFactor::CriticalPriority => "Critical priority project",
            RiskFactor::ManyIdentifiedRisks => "High number of identified risks",
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Composite risk score of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// In [0, 100]
    pub score: u8,
    pub level: RiskLevel,
    /// Factor texts in evaluation order
    pub factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub calculated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(40), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(41), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(70), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(71), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }

    #[test]
    fn test_factor_points_sum_past_cap() {
        let all = [
            RiskFactor::HighBudgetUtilization,
            RiskFactor::BehindSchedule,
            RiskFactor::SmallTeam,
            RiskFactor::CriticalPriority,
            RiskFactor::ManyIdentifiedRisks,
        ];
        let total: u32 = all.iter().map(RiskFactor::points).sum();

        assert_eq!(total, 100);
        assert_eq!(RiskFactor::SmallTeam.to_string(), "Small team size");
    }
}
