//! Fincast Risk Scoring
//!
//! Composite project risk from budget burn, schedule, staffing, priority and
//! the size of the risk registry.

mod weighted;

pub use weighted::WeightedRiskScorer;

// Re-export the trait from ports for convenience
pub use fincast_ports::RiskScorer;
