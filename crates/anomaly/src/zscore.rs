use fincast_core::{Anomaly, Direction, ExpenseRecord, Severity};
use fincast_ports::AnomalyDetector;
use fincast_stats::{mean, std_dev};
use rust_decimal::prelude::ToPrimitive;

/// Z-score above which an expense is flagged
pub const DEFAULT_THRESHOLD: f64 = 2.0;

/// Detection is disabled for smaller samples
pub const MIN_SAMPLE_SIZE: usize = 10;

/// Z-score above which an anomaly is high severity
const HIGH_SEVERITY_Z: f64 = 3.0;

/// Z-score above which an anomaly needs review rather than monitoring
const REVIEW_Z: f64 = 2.0;

const INVESTIGATE: &str =
    "Investigate immediately - significant deviation from normal spending pattern";
const REVIEW: &str = "Review expense for accuracy and business justification";
const MONITOR: &str = "Monitor for recurring patterns";

/// Z-score detector over a project's whole expense history
///
/// Each expense is compared to the mean and population standard deviation of
/// all amounts passed in the same call. Fewer than ten expenses, or a set of
/// identical amounts, produce no anomalies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScoreDetector {
    threshold: f64,
}

impl ZScoreDetector {
    /// Create a detector with the default threshold of 2.0
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    fn severity(z_score: f64) -> Severity {
        if z_score > HIGH_SEVERITY_Z {
            Severity::High
        } else {
            Severity::Medium
        }
    }

    fn recommendation(z_score: f64) -> &'static str {
        if z_score > HIGH_SEVERITY_Z {
            INVESTIGATE
        } else if z_score > REVIEW_Z {
            REVIEW
        } else {
            MONITOR
        }
    }
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl AnomalyDetector for ZScoreDetector {
    fn detect(&self, expenses: &[ExpenseRecord]) -> Vec<Anomaly> {
        if expenses.len() < MIN_SAMPLE_SIZE {
            return Vec::new();
        }

        // Identical amounts: nothing can exceed any threshold. Compared as
        // Decimal, since their f64 images can leave a spurious tiny deviation.
        let first = expenses[0].amount;
        if expenses.iter().all(|e| e.amount == first) {
            return Vec::new();
        }

        let Some(amounts) = expenses
            .iter()
            .map(|e| e.amount.to_f64())
            .collect::<Option<Vec<f64>>>()
        else {
            return Vec::new();
        };

        let (Ok(avg), Ok(sd)) = (mean(&amounts), std_dev(&amounts)) else {
            return Vec::new();
        };

        if sd == 0.0 {
            return Vec::new();
        }

        expenses
            .iter()
            .zip(&amounts)
            .filter_map(|(expense, &amount)| {
                let z_score = ((amount - avg) / sd).abs();
                if z_score <= self.threshold {
                    return None;
                }

                let direction = if amount > avg {
                    Direction::Overspending
                } else {
                    Direction::Underspending
                };

                Some(Anomaly::from_record(
                    expense,
                    z_score,
                    Self::severity(z_score),
                    direction,
                    Self::recommendation(z_score),
                ))
            })
            .collect()
    }

    fn name(&self) -> &str {
        "Z-Score"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn expenses(amounts: &[Decimal]) -> Vec<ExpenseRecord> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        amounts
            .iter()
            .enumerate()
            .map(|(i, &amount)| {
                ExpenseRecord::new(
                    format!("exp-{i}"),
                    start + Duration::days(i as i64),
                    amount,
                    "Technology",
                    format!("expense #{i}"),
                )
            })
            .collect()
    }

    fn with_outlier(baseline: usize, outlier: Decimal) -> Vec<ExpenseRecord> {
        let mut amounts = vec![dec!(100); baseline];
        amounts.push(outlier);
        expenses(&amounts)
    }

    #[test]
    fn test_nine_expenses_never_flag() {
        let records = expenses(&[
            dec!(1),
            dec!(1),
            dec!(1),
            dec!(1),
            dec!(1),
            dec!(1),
            dec!(1),
            dec!(1),
            dec!(1_000_000),
        ]);

        assert!(ZScoreDetector::new().detect(&records).is_empty());
    }

    #[test]
    fn test_single_outlier_in_ten() {
        let records = with_outlier(9, dec!(10000));

        let anomalies = ZScoreDetector::new().detect(&records);

        assert_eq!(anomalies.len(), 1);
        let a = &anomalies[0];
        assert_eq!(a.id, "exp-9");
        assert_eq!(a.direction, Direction::Overspending);
        // With one outlier among n values its population z-score is sqrt(n - 1)
        assert_relative_eq!(a.z_score, 3.0, epsilon = 1e-12);
        assert_eq!(a.recommendation, REVIEW);
    }

    #[test]
    fn test_single_outlier_in_twenty_is_high_severity() {
        let records = with_outlier(19, dec!(10000));

        let anomalies = ZScoreDetector::new().detect(&records);

        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].severity, Severity::High);
        assert_eq!(anomalies[0].direction, Direction::Overspending);
        assert_eq!(anomalies[0].recommendation, INVESTIGATE);
        assert_relative_eq!(anomalies[0].z_score, 19f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_low_outlier_is_underspending() {
        let mut amounts = vec![dec!(1000); 19];
        amounts.push(dec!(0));

        let anomalies = ZScoreDetector::new().detect(&expenses(&amounts));

        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].direction, Direction::Underspending);
    }

    #[test]
    fn test_identical_amounts_have_no_anomalies() {
        let records = expenses(&[dec!(250); 30]);

        assert!(ZScoreDetector::with_threshold(0.0).detect(&records).is_empty());
    }

    #[test]
    fn test_identical_fractional_amounts_have_no_anomalies() {
        for amount in [dec!(19.99), dec!(0.1), dec!(33.33), dec!(0.7), dec!(1234.56)] {
            let records = expenses(&[amount; 10]);

            let anomalies = ZScoreDetector::with_threshold(0.5).detect(&records);

            assert!(anomalies.is_empty(), "{amount} flagged {} records", anomalies.len());
        }
    }

    #[test]
    fn test_low_threshold_reaches_monitor_tier() {
        let records = expenses(&[
            dec!(100),
            dec!(100),
            dec!(100),
            dec!(100),
            dec!(100),
            dec!(200),
            dec!(200),
            dec!(200),
            dec!(200),
            dec!(200),
        ]);

        // Every value sits exactly one standard deviation from the mean
        let anomalies = ZScoreDetector::with_threshold(0.5).detect(&records);

        assert_eq!(anomalies.len(), 10);
        for a in &anomalies {
            assert_eq!(a.severity, Severity::Medium);
            assert_eq!(a.recommendation, MONITOR);
        }
        assert_eq!(anomalies[0].direction, Direction::Underspending);
        assert_eq!(anomalies[9].direction, Direction::Overspending);
    }

    #[test]
    fn test_output_preserves_input_order() {
        let mut amounts = vec![dec!(100); 18];
        amounts.insert(3, dec!(9000));
        amounts.push(dec!(8000));

        let anomalies = ZScoreDetector::new().detect(&expenses(&amounts));

        let ids: Vec<&str> = anomalies.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["exp-3", "exp-19"]);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let records = with_outlier(9, dec!(10000));

        // z is exactly 3.0 for the outlier
        assert!(ZScoreDetector::with_threshold(3.0).detect(&records).is_empty());
        assert_eq!(ZScoreDetector::with_threshold(2.99).detect(&records).len(), 1);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let detector = ZScoreDetector::new();
        let records = with_outlier(14, dec!(4200));

        assert_eq!(detector.detect(&records), detector.detect(&records));
    }
}
