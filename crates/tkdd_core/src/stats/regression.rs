//! Ordinary least squares with t-based significance
//!
//! Fits target = b0 + b1 x1 + ... + bk xk by the normal equations,
//! solved through a Cholesky factorization of X'X. A design matrix that
//! is not full rank (duplicated or constant predictors) fails the
//! factorization and is reported as `SingularMatrix` rather than
//! producing meaningless coefficients.

use nalgebra::{DMatrix, DVector};
use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::StatsError;

use super::{SIGNIFICANCE_LEVEL, two_tailed_t};

/// Term name reported for the fitted constant
pub const INTERCEPT: &str = "intercept";

/// Plain-language significance call at the crate-wide alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Significance {
    Significant,
    NotSignificant,
}

impl Significance {
    /// p below [`SIGNIFICANCE_LEVEL`] is significant; a NaN p-value is
    /// reported as not significant.
    #[must_use]
    pub fn from_p(p_value: f64) -> Self {
        if p_value < SIGNIFICANCE_LEVEL {
            Significance::Significant
        } else {
            Significance::NotSignificant
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Significance::Significant => "Significant",
            Significance::NotSignificant => "Not significant",
        }
    }
}

/// One fitted term: the intercept or one predictor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionTerm {
    pub term: String,
    pub coefficient: f64,
    pub t_statistic: f64,
    /// Two-tailed p-value with n - k - 1 degrees of freedom
    pub p_value: f64,
    pub significance: Significance,
}

/// Full OLS fit, intercept term first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionSummary {
    pub target: String,
    pub observations: usize,
    pub terms: Vec<RegressionTerm>,
    pub r_squared: f64,
}

impl RegressionSummary {
    /// Terms other than the intercept
    #[must_use]
    pub fn predictors(&self) -> &[RegressionTerm] {
        &self.terms[1..]
    }
}

/// Fit `target` on `predictors` by least squares.
///
/// Requires strictly more observations than fitted terms (n > k + 1),
/// otherwise the residual degrees of freedom would be zero and every
/// standard error undefined.
pub fn fit_ols(
    table: &Dataset,
    target: &str,
    predictors: &[&str],
) -> Result<RegressionSummary, StatsError> {
    let y_col = table.numeric(target)?;
    let n = y_col.len();
    let k = predictors.len();
    if n < k + 2 {
        return Err(StatsError::InsufficientData { needed: k + 2, got: n });
    }

    let mut x_cols = Vec::with_capacity(k);
    for name in predictors {
        x_cols.push(table.numeric(name)?);
    }

    // Design matrix with a leading column of ones for the intercept.
    let mut design = DMatrix::zeros(n, k + 1);
    for row in 0..n {
        design[(row, 0)] = 1.0;
        for (j, col) in x_cols.iter().enumerate() {
            design[(row, j + 1)] = col[row];
        }
    }
    let y = DVector::from_column_slice(y_col);

    let xtx = design.transpose() * &design;
    let xty = design.transpose() * &y;
    let cholesky = xtx.cholesky().ok_or(StatsError::SingularMatrix)?;
    let beta = cholesky.solve(&xty);
    // Unscaled covariance (X'X)^-1; scaled by sigma^2 below.
    let covariance = cholesky.inverse();

    let fitted = &design * &beta;
    let residuals = &y - &fitted;
    let rss: f64 = residuals.iter().map(|r| r * r).sum();
    let df = (n - k - 1) as f64;
    let sigma_sq = rss / df;

    let mean_y = y_col.iter().sum::<f64>() / n as f64;
    let tss: f64 = y_col.iter().map(|v| (v - mean_y).powi(2)).sum();
    let r_squared = if tss == 0.0 { f64::NAN } else { 1.0 - rss / tss };

    let mut terms = Vec::with_capacity(k + 1);
    for i in 0..=k {
        let term = if i == 0 {
            INTERCEPT.to_string()
        } else {
            predictors[i - 1].to_string()
        };
        let coefficient = beta[i];
        let std_error = (sigma_sq * covariance[(i, i)]).sqrt();
        let t_statistic = coefficient / std_error;
        let p_value = two_tailed_t(t_statistic.abs(), df);
        terms.push(RegressionTerm {
            term,
            coefficient,
            t_statistic,
            p_value,
            significance: Significance::from_p(p_value),
        });
    }

    Ok(RegressionSummary {
        target: target.to_string(),
        observations: n,
        terms,
        r_squared,
    })
}
