use fincast_core::{Amount, ForecastResult, ForecastValidation};
use fincast_ports::{AnalyticsError, AnalyticsResult};
use rust_decimal::prelude::ToPrimitive;

/// Score a forecast against the amounts observed after it was made
///
/// `actuals[i]` is matched with period `i + 1`; surplus forecasts or actuals
/// are ignored. Percentage error is averaged over non-zero actuals only, so a
/// window of all-zero actuals reports no MAPE and no accuracy.
pub fn validate_forecast(
    result: &ForecastResult,
    actuals: &[Amount],
) -> AnalyticsResult<ForecastValidation> {
    let pairs: Vec<(f64, f64, bool)> = actuals
        .iter()
        .enumerate()
        .filter_map(|(i, actual)| {
            let point = result.point(i as u32 + 1)?;
            let actual = actual.to_f64()?;
            Some((point.predicted_value, actual, point.contains(actual)))
        })
        .collect();

    if pairs.is_empty() {
        return Err(AnalyticsError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let compared = pairs.len() as f64;
    let mean_absolute_error = pairs
        .iter()
        .map(|(predicted, actual, _)| (predicted - actual).abs())
        .sum::<f64>()
        / compared;

    let percentage_errors: Vec<f64> = pairs
        .iter()
        .filter(|(_, actual, _)| *actual != 0.0)
        .map(|(predicted, actual, _)| ((predicted - actual) / actual).abs() * 100.0)
        .collect();
    let mape = if percentage_errors.is_empty() {
        None
    } else {
        Some(percentage_errors.iter().sum::<f64>() / percentage_errors.len() as f64)
    };

    let inside = pairs.iter().filter(|(_, _, inside)| *inside).count() as f64;

    Ok(ForecastValidation {
        periods_compared: pairs.len(),
        mean_absolute_error,
        mean_absolute_percentage_error: mape,
        accuracy: mape.map(|m| (100.0 - m).clamp(0.0, 100.0)),
        within_bounds_rate: inside / compared,
    })
}
