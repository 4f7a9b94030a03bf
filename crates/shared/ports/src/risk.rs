use fincast_core::{ProjectSnapshot, RiskAssessment};

/// Port for project risk scoring
///
/// Scoring never fails: edge cases degrade to low scores.
pub trait RiskScorer: Send + Sync {
    fn score(&self, project: &ProjectSnapshot) -> RiskAssessment;

    /// Get the name of the scoring model
    fn name(&self) -> &str;
}
