//! Descriptive statistics and simple linear regression
//!
//! Variance is the population variance (divides by `n`), matching how the
//! confidence bands and z-scores downstream are defined.

use fincast_ports::{AnalyticsError, AnalyticsResult};

/// Arithmetic mean
pub fn mean(xs: &[f64]) -> AnalyticsResult<f64> {
    if xs.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }
    Ok(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Population variance: mean squared deviation from the mean
pub fn variance(xs: &[f64]) -> AnalyticsResult<f64> {
    let m = mean(xs)?;
    let sum_sq: f64 = xs.iter().map(|x| (x - m).powi(2)).sum();
    Ok(sum_sq / xs.len() as f64)
}

/// Population standard deviation
pub fn std_dev(xs: &[f64]) -> AnalyticsResult<f64> {
    variance(xs).map(f64::sqrt)
}

/// Ordinary least squares fit of `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegression {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearRegression {
    /// Fit a line through paired observations
    ///
    /// Requires at least two pairs of equal length and at least two distinct
    /// `xs`; otherwise the slope is undefined and `DegenerateInput` is returned.
    pub fn fit(xs: &[f64], ys: &[f64]) -> AnalyticsResult<Self> {
        if xs.len() != ys.len() {
            return Err(AnalyticsError::DegenerateInput(format!(
                "mismatched lengths: {} xs, {} ys",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(AnalyticsError::DegenerateInput(format!(
                "regression needs at least 2 points, got {}",
                xs.len()
            )));
        }

        let x_mean = mean(xs)?;
        let y_mean = mean(ys)?;

        let mut sxy = 0.0;
        let mut sxx = 0.0;
        for (x, y) in xs.iter().zip(ys) {
            let dx = x - x_mean;
            sxy += dx * (y - y_mean);
            sxx += dx * dx;
        }

        if sxx == 0.0 {
            return Err(AnalyticsError::DegenerateInput(
                "independent variable has zero variance".to_string(),
            ));
        }

        let slope = sxy / sxx;
        Ok(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
