//! Statistical summarizer behind the analysis views
//!
//! Four pure operations over loaded tables:
//! - Pearson correlation of one target against a set of inputs
//! - Paired Pearson test with a two-tailed p-value
//! - Ordinary least squares with per-term t statistics
//! - Chi-square independence test over two categorical columns
//!
//! All significance decisions in the crate share [`SIGNIFICANCE_LEVEL`].

mod contingency;
mod correlation;
mod regression;

pub use contingency::{ChiSquareTest, ContingencyTable, chi_square_independence};
pub use correlation::{CorrelationEntry, PearsonTest, correlations_with_target, pearson_r, pearson_test};
pub use regression::{INTERCEPT, RegressionSummary, RegressionTerm, Significance, fit_ols};

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::dataset::Dataset;
use crate::error::StatsError;

/// Significance threshold for every test in the crate (alpha = 5%)
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Fewest rows any summarizer operation accepts
pub const MIN_OBSERVATIONS: usize = 2;

pub(crate) fn ensure_observations(table: &Dataset) -> Result<usize, StatsError> {
    let rows = table.rows();
    if rows < MIN_OBSERVATIONS {
        return Err(StatsError::InsufficientData {
            needed: MIN_OBSERVATIONS,
            got: rows,
        });
    }
    Ok(rows)
}

/// Two-tailed p-value of |t| under Student's t with `df` degrees of
/// freedom. NaN inputs and non-positive `df` yield NaN.
pub(crate) fn two_tailed_t(t_abs: f64, df: f64) -> f64 {
    if t_abs.is_nan() {
        return f64::NAN;
    }
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => 2.0 * (1.0 - dist.cdf(t_abs)),
        Err(_) => f64::NAN,
    }
}
