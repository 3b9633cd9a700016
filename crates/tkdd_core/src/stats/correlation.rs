//! Pearson correlation: target matrices and the paired significance test

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::StatsError;

use super::{MIN_OBSERVATIONS, ensure_observations, two_tailed_t};

/// Pearson r over one paired sample. Returns NaN when either side has
/// zero variance (the coefficient is undefined there, and callers are
/// expected to surface that rather than a fake zero).
#[must_use]
pub fn pearson_r(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        f64::NAN
    } else {
        covariance / denominator
    }
}

/// One row of a target correlation table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationEntry {
    pub variable: String,
    pub r: f64,
}

/// Pearson r of `target` against each listed input, in input order. The
/// target's trivial self-pair is skipped even when it appears in the
/// list, mirroring how a correlation matrix row is read with the
/// diagonal dropped.
pub fn correlations_with_target(
    table: &Dataset,
    target: &str,
    inputs: &[&str],
) -> Result<Vec<CorrelationEntry>, StatsError> {
    ensure_observations(table)?;
    let y = table.numeric(target)?;

    let mut entries = Vec::with_capacity(inputs.len());
    for name in inputs {
        if *name == target {
            continue;
        }
        let x = table.numeric(name)?;
        entries.push(CorrelationEntry {
            variable: (*name).to_string(),
            r: pearson_r(x, y),
        });
    }
    Ok(entries)
}

/// Result of a paired Pearson significance test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PearsonTest {
    pub r: f64,
    /// Two-tailed p-value for H0: no linear association. NaN when the
    /// test is undefined (fewer than 3 observations, or r itself NaN).
    pub p_value: f64,
    pub n: usize,
}

/// Pearson r between two numeric columns of `table` plus the two-tailed
/// p-value from t = r * sqrt((n-2) / (1-r^2)) with n-2 degrees of
/// freedom. |r| = 1 pins the p-value at zero.
pub fn pearson_test(table: &Dataset, a: &str, b: &str) -> Result<PearsonTest, StatsError> {
    let n = ensure_observations(table)?;
    let x = table.numeric(a)?;
    let y = table.numeric(b)?;

    let r = pearson_r(x, y);
    Ok(PearsonTest {
        r,
        p_value: pearson_p_value(r, n),
        n,
    })
}

fn pearson_p_value(r: f64, n: usize) -> f64 {
    debug_assert!(n >= MIN_OBSERVATIONS);
    if r.is_nan() {
        return f64::NAN;
    }
    let df = n as f64 - 2.0;
    if df < 1.0 {
        return f64::NAN;
    }
    let denominator = 1.0 - r * r;
    if denominator <= 0.0 {
        // |r| = 1: the t statistic diverges
        return 0.0;
    }
    let t = r.abs() * (df / denominator).sqrt();
    two_tailed_t(t, df)
}
