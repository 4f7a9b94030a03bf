//! Trend and seasonality heuristics
//!
//! Both checks are deliberately coarse. The seasonality test in particular is
//! a quarter-of-three windowing rule, not a statistical test.

use fincast_core::Trend;

use crate::kernel::{mean, variance};

/// Percentage change between halves beyond which a series is trending
const TREND_CHANGE_PCT: f64 = 10.0;

/// Observations per quarter window
const QUARTER_LEN: usize = 3;

/// Shortest series the seasonality check looks at
const MIN_SEASONAL_POINTS: usize = 12;

/// Complete quarters needed before comparing variances
const MIN_QUARTERS: usize = 4;

/// Quarterly-mean variance must exceed this share of the overall variance
const SEASONAL_VARIANCE_RATIO: f64 = 0.5;

/// Classify a series by comparing the averages of its two halves
///
/// The first half holds `n / 2` values (rounded down) and the second half the
/// rest, so the middle value of an odd-length series counts toward the second
/// half. A change of more than 10% either way is a trend. Series shorter than
/// two values, or whose first half averages to zero, are `Stable`.
pub fn classify_trend(values: &[f64]) -> Trend {
    if values.len() < 2 {
        return Trend::Stable;
    }

    let (first, second) = values.split_at(values.len() / 2);
    let (Ok(first_avg), Ok(second_avg)) = (mean(first), mean(second)) else {
        return Trend::Stable;
    };

    if first_avg == 0.0 {
        return Trend::Stable;
    }

    let change_pct = (second_avg - first_avg) / first_avg * 100.0;

    if change_pct > TREND_CHANGE_PCT {
        Trend::Increasing
    } else if change_pct < -TREND_CHANGE_PCT {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

/// Detect a quarterly pattern
///
/// Splits the series into consecutive windows of three (dropping an incomplete
/// trailing window) and reports seasonality when the variance of the window
/// means exceeds half the variance of the whole series. Series with fewer than
/// twelve values or four complete quarters report `false`.
pub fn detect_seasonality(values: &[f64]) -> bool {
    if values.len() < MIN_SEASONAL_POINTS {
        return false;
    }

    let quarter_means: Vec<f64> = values
        .chunks_exact(QUARTER_LEN)
        .filter_map(|quarter| mean(quarter).ok())
        .collect();

    if quarter_means.len() < MIN_QUARTERS {
        return false;
    }

    match (variance(&quarter_means), variance(values)) {
        (Ok(quarterly), Ok(overall)) => quarterly > overall * SEASONAL_VARIANCE_RATIO,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increasing_series() {
        assert_eq!(classify_trend(&[10.0, 20.0, 30.0, 40.0, 50.0]), Trend::Increasing);
    }

    #[test]
    fn test_decreasing_series() {
        assert_eq!(classify_trend(&[50.0, 40.0, 30.0, 20.0, 10.0]), Trend::Decreasing);
    }

    #[test]
    fn test_flat_series() {
        assert_eq!(classify_trend(&[10.0, 10.0, 10.0, 10.0]), Trend::Stable);
    }

    #[test]
    fn test_change_within_ten_percent_is_stable() {
        // First half avg 100, second half avg 110: exactly 10% is not a trend
        assert_eq!(classify_trend(&[100.0, 100.0, 110.0, 110.0]), Trend::Stable);
        assert_eq!(classify_trend(&[100.0, 100.0, 111.0, 111.0]), Trend::Increasing);
    }

    #[test]
    fn test_middle_value_belongs_to_second_half() {
        // Halves [100] and [100, 200]: +50%
        assert_eq!(classify_trend(&[100.0, 100.0, 200.0]), Trend::Increasing);
    }

    #[test]
    fn test_short_series_is_stable() {
        assert_eq!(classify_trend(&[]), Trend::Stable);
        assert_eq!(classify_trend(&[500.0]), Trend::Stable);
    }

    #[test]
    fn test_zero_first_half_is_stable() {
        assert_eq!(classify_trend(&[0.0, 0.0, 50.0, 80.0]), Trend::Stable);
    }

    #[test]
    fn test_quarterly_pattern_is_seasonal() {
        let values = [
            100.0, 100.0, 100.0, 500.0, 500.0, 500.0, 100.0, 100.0, 100.0, 500.0, 500.0, 500.0,
        ];
        assert!(detect_seasonality(&values));
    }

    #[test]
    fn test_pattern_within_quarters_is_not_seasonal() {
        let values = [
            100.0, 500.0, 300.0, 100.0, 500.0, 300.0, 100.0, 500.0, 300.0, 100.0, 500.0, 300.0,
        ];
        assert!(!detect_seasonality(&values));
    }

    #[test]
    fn test_constant_series_is_not_seasonal() {
        assert!(!detect_seasonality(&[250.0; 24]));
    }

    #[test]
    fn test_short_series_is_not_seasonal() {
        let values = [
            100.0, 100.0, 100.0, 500.0, 500.0, 500.0, 100.0, 100.0, 100.0, 500.0, 500.0,
        ];
        assert!(!detect_seasonality(&values));
    }

    #[test]
    fn test_trailing_partial_quarter_is_dropped() {
        let values = [
            100.0, 100.0, 100.0, 500.0, 500.0, 500.0, 100.0, 100.0, 100.0, 500.0, 500.0, 500.0,
            100.0, 100.0,
        ];
        assert!(detect_seasonality(&values));
    }
}
