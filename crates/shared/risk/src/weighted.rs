use std::sync::Arc;

use fincast_core::{Priority, ProjectSnapshot, RiskAssessment, RiskFactor, RiskLevel, Timestamp};
use fincast_ports::{Clock, RiskScorer};

const HIGH_UTILIZATION_PCT: f64 = 90.0;
const MEDIUM_UTILIZATION_PCT: f64 = 75.0;

/// Points by which elapsed time may lead budget utilization before the
/// project counts as behind schedule
const SCHEDULE_SLACK_PCT: f64 = 10.0;

const MIN_TEAM_SIZE: usize = 3;
const MAX_REGISTERED_RISKS: usize = 5;
const MAX_SCORE: u32 = 100;

/// Additive point model over a project snapshot
///
/// Rules are evaluated in a fixed order and each contributes its factor's
/// points; the sum is capped at 100. The schedule rule compares elapsed time
/// against budget burn, so the score depends on the clock's current instant.
pub struct WeightedRiskScorer {
    clock: Arc<dyn Clock>,
}

impl WeightedRiskScorer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Score a project as of `now`
    pub fn score_at(&self, project: &ProjectSnapshot, now: Timestamp) -> RiskAssessment {
        let factors = Self::factors(project, now);
        let total: u32 = factors.iter().map(RiskFactor::points).sum();
        let score = total.min(MAX_SCORE) as u8;

        RiskAssessment {
            score,
            level: RiskLevel::from_score(score),
            factors: factors.iter().map(|f| f.description().to_string()).collect(),
            recommendations: Self::recommendations(score),
            calculated_at: now,
        }
    }

    /// Factors that fire for `project` at `now`, in evaluation order
    pub fn factors(project: &ProjectSnapshot, now: Timestamp) -> Vec<RiskFactor> {
        let utilization = project.budget.utilization();
        let time_progress = project.timeline.elapsed_percent(now);

        [
            Self::utilization_factor(utilization),
            Self::schedule_factor(time_progress, utilization),
            Self::team_factor(project.team.len()),
            Self::priority_factor(project.priority),
            Self::registry_factor(project.risks.len()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Budget burn: above 90% is high, above 75% medium
    pub fn utilization_factor(utilization_pct: f64) -> Option<RiskFactor> {
        if utilization_pct > HIGH_UTILIZATION_PCT {
            Some(RiskFactor::HighBudgetUtilization)
        } else if utilization_pct > MEDIUM_UTILIZATION_PCT {
            Some(RiskFactor::MediumBudgetUtilization)
        } else {
            None
        }
    }

    /// Time running more than 10 points ahead of budget burn
    pub fn schedule_factor(time_progress_pct: f64, utilization_pct: f64) -> Option<RiskFactor> {
        (time_progress_pct > utilization_pct + SCHEDULE_SLACK_PCT)
            .then_some(RiskFactor::BehindSchedule)
    }

    pub fn team_factor(team_size: usize) -> Option<RiskFactor> {
        (team_size < MIN_TEAM_SIZE).then_some(RiskFactor::SmallTeam)
    }

    pub fn priority_factor(priority: Priority) -> Option<RiskFactor> {
        (priority == Priority::Critical).then_some(RiskFactor::CriticalPriority)
    }

    /// Counts every registry entry, whatever its status
    pub fn registry_factor(risk_count: usize) -> Option<RiskFactor> {
        (risk_count > MAX_REGISTERED_RISKS).then_some(RiskFactor::ManyIdentifiedRisks)
    }

    /// Fixed advice per score bucket, independent of which factors fired
    pub fn recommendations(score: u8) -> Vec<String> {
        let advice: &[&str] = match RiskLevel::from_score(score) {
            RiskLevel::High => &[
                "Immediate attention required",
                "Consider risk mitigation strategies",
                "Increase monitoring frequency",
            ],
            RiskLevel::Medium => &["Monitor closely", "Review project timeline and budget"],
            RiskLevel::Low => &["Continue normal monitoring"],
        };
        advice.iter().map(|s| s.to_string()).collect()
    }
}

impl RiskScorer for WeightedRiskScorer {
    fn score(&self, project: &ProjectSnapshot) -> RiskAssessment {
        self.score_at(project, self.clock.now())
    }

    fn name(&self) -> &str {
        "Weighted Risk Points"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use fincast_clock::FixedClock;
    use fincast_core::{BudgetSnapshot, ProjectRisk, Rating, TeamMember, TeamRole, Timeline};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn start() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// 100-day project
    fn project(allocated: Decimal, spent: Decimal, team_size: usize) -> ProjectSnapshot {
        ProjectSnapshot {
            budget: BudgetSnapshot::new(allocated, spent),
            timeline: Timeline::new(start(), start() + Duration::days(100)),
            team: (0..team_size)
                .map(|i| TeamMember::new(format!("user-{i}"), TeamRole::Member))
                .collect(),
            priority: Priority::Medium,
            risks: Vec::new(),
        }
    }

    fn scorer_at(day: i64) -> WeightedRiskScorer {
        WeightedRiskScorer::new(Arc::new(FixedClock::new(start() + Duration::days(day))))
    }

    #[test]
    fn test_high_utilization_alone() {
        let p = project(dec!(1000), dec!(950), 5);

        let assessment = scorer_at(50).score(&p);

        assert_eq!(assessment.score, 30);
        assert_eq!(assessment.level, RiskLevel::Low);
        assert_eq!(assessment.factors, vec!["High budget utilization (>90%)"]);
        assert_eq!(assessment.recommendations, vec!["Continue normal monitoring"]);
    }

    #[test]
    fn test_utilization_thresholds_are_exclusive() {
        use RiskFactor::{HighBudgetUtilization, MediumBudgetUtilization};

        assert_eq!(WeightedRiskScorer::utilization_factor(90.0), Some(MediumBudgetUtilization));
        assert_eq!(WeightedRiskScorer::utilization_factor(90.1), Some(HighBudgetUtilization));
        assert_eq!(WeightedRiskScorer::utilization_factor(75.0), None);
        assert_eq!(WeightedRiskScorer::utilization_factor(75.5), Some(MediumBudgetUtilization));
    }

    #[test]
    fn test_behind_schedule() {
        // Day 50 of 100 with only 20% of the budget spent
        let p = project(dec!(1000), dec!(200), 5);

        let assessment = scorer_at(50).score(&p);

        assert_eq!(assessment.score, 25);
        assert_eq!(assessment.factors, vec!["Behind schedule"]);
    }

    #[test]
    fn test_schedule_slack() {
        assert_eq!(WeightedRiskScorer::schedule_factor(60.0, 50.0), None);
        assert_eq!(
            WeightedRiskScorer::schedule_factor(60.5, 50.0),
            Some(RiskFactor::BehindSchedule)
        );
        // Not started yet
        assert_eq!(WeightedRiskScorer::schedule_factor(-20.0, 0.0), None);
    }

    #[test]
    fn test_zero_allocation_counts_as_no_spend() {
        let p = project(Decimal::ZERO, dec!(500), 5);

        assert_eq!(scorer_at(5).score(&p).score, 0);
        // 50% elapsed against 0% utilization
        assert_eq!(scorer_at(50).score(&p).factors, vec!["Behind schedule"]);
    }

    #[test]
    fn test_overspend_beyond_decimal_range_is_high_utilization() {
        let p = project(Decimal::new(1, 28), Decimal::MAX, 5);

        let assessment = scorer_at(50).score(&p);

        assert_eq!(assessment.factors, vec!["High budget utilization (>90%)"]);
        assert_eq!(assessment.score, 30);
    }

    #[test]
    fn test_team_priority_and_registry_rules() {
        assert_eq!(WeightedRiskScorer::team_factor(2), Some(RiskFactor::SmallTeam));
        assert_eq!(WeightedRiskScorer::team_factor(3), None);
        assert_eq!(
            WeightedRiskScorer::priority_factor(Priority::Critical),
            Some(RiskFactor::CriticalPriority)
        );
        assert_eq!(WeightedRiskScorer::priority_factor(Priority::High), None);
        assert_eq!(WeightedRiskScorer::registry_factor(5), None);
        assert_eq!(WeightedRiskScorer::registry_factor(6), Some(RiskFactor::ManyIdentifiedRisks));
    }

    #[test]
    fn test_all_factors_in_order() {
        let mut p = project(dec!(1000), dec!(950), 1);
        p.priority = Priority::Critical;
        p.risks = (0..6)
            .map(|i| ProjectRisk::new(format!("risk {i}"), Rating::High, Rating::Medium))
            .collect();

        // Past the end date: 150% elapsed vs 95% spent
        let assessment = scorer_at(150).score(&p);

        assert_eq!(assessment.score, 100);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(
            assessment.factors,
            vec![
                "High budget utilization (>90%)",
                "Behind schedule",
                "Small team size",
                "Critical priority project",
                "High number of identified risks",
            ]
        );
        assert_eq!(assessment.recommendations.len(), 3);
        assert_eq!(assessment.recommendations[0], "Immediate attention required");
    }

    #[test]
    fn test_medium_level() {
        // 80% spent (15) + small team (10) + critical (15) = 40 -> low
        let mut p = project(dec!(1000), dec!(800), 2);
        p.priority = Priority::Critical;
        let assessment = scorer_at(50).score(&p);
        assert_eq!(assessment.score, 40);
        assert_eq!(assessment.level, RiskLevel::Low);

        // Add a crowded registry: 60 -> medium
        p.risks = (0..7)
            .map(|i| ProjectRisk::new(format!("risk {i}"), Rating::Low, Rating::Low))
            .collect();
        let assessment = scorer_at(50).score(&p);
        assert_eq!(assessment.score, 60);
        assert_eq!(assessment.level, RiskLevel::Medium);
        assert_eq!(
            assessment.recommendations,
            vec!["Monitor closely", "Review project timeline and budget"]
        );
    }

    #[test]
    fn test_calculated_at_comes_from_clock() {
        let p = project(dec!(1000), dec!(100), 4);

        let assessment = scorer_at(10).score(&p);

        assert_eq!(assessment.calculated_at, start() + Duration::days(10));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let scorer = scorer_at(42);
        let p = project(dec!(5000), dec!(4100), 2);

        assert_eq!(scorer.score(&p), scorer.score(&p));
    }

    #[test]
    fn test_score_depends_on_evaluation_instant() {
        let scorer = scorer_at(0);
        let p = project(dec!(1000), dec!(300), 5);

        assert_eq!(scorer.score_at(&p, start() + Duration::days(30)).score, 0);
        assert_eq!(scorer.score_at(&p, start() + Duration::days(60)).score, 25);
    }
}
