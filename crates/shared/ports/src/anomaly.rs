use fincast_core::{Anomaly, ExpenseRecord};

/// Port for spending anomaly detection
///
/// Detection never fails: inputs too small to judge yield no anomalies.
pub trait AnomalyDetector: Send + Sync {
    /// Flag the unusual expenses, in input order
    fn detect(&self, expenses: &[ExpenseRecord]) -> Vec<Anomaly>;

    /// Get the name of the detector
    fn name(&self) -> &str;
}
