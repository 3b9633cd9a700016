//! Contingency tables and the chi-square test of independence

use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::dataset::Dataset;
use crate::error::StatsError;

use super::{MIN_OBSERVATIONS, SIGNIFICANCE_LEVEL, ensure_observations};

/// Observed cross-tabulation of two categorical columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContingencyTable {
    pub row_variable: String,
    pub col_variable: String,
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    /// Observed counts, row-major, aligned with the label vectors
    pub observed: Vec<Vec<u64>>,
}

impl ContingencyTable {
    #[must_use]
    pub fn row_totals(&self) -> Vec<u64> {
        self.observed.iter().map(|row| row.iter().sum()).collect()
    }

    #[must_use]
    pub fn col_totals(&self) -> Vec<u64> {
        let mut totals = vec![0; self.col_labels.len()];
        for row in &self.observed {
            for (total, &count) in totals.iter_mut().zip(row) {
                *total += count;
            }
        }
        totals
    }

    #[must_use]
    pub fn grand_total(&self) -> u64 {
        self.observed.iter().flatten().sum()
    }

    /// Expected counts under independence:
    /// row total * column total / grand total. Every retained label has
    /// at least one observation, so no expected cell is zero.
    #[must_use]
    pub fn expected(&self) -> Vec<Vec<f64>> {
        let row_totals = self.row_totals();
        let col_totals = self.col_totals();
        let grand = self.grand_total() as f64;
        row_totals
            .iter()
            .map(|&row_total| {
                col_totals
                    .iter()
                    .map(|&col_total| row_total as f64 * col_total as f64 / grand)
                    .collect()
            })
            .collect()
    }
}

/// Chi-square independence test over a contingency table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChiSquareTest {
    pub statistic: f64,
    /// (rows - 1) * (cols - 1)
    pub dof: usize,
    pub p_value: f64,
}

impl ChiSquareTest {
    /// True when the data rejects independence at the crate-wide alpha
    #[must_use]
    pub fn rejects_independence(&self) -> bool {
        self.p_value < SIGNIFICANCE_LEVEL
    }

    /// Decision in words, for report output
    #[must_use]
    pub fn verdict(&self) -> &'static str {
        if self.rejects_independence() {
            "reject independence: the variables are associated"
        } else {
            "fail to reject independence: no evidence of association"
        }
    }
}

/// Cross-tabulate two text columns and test them for independence.
///
/// `row_order` fixes the display order of the row categories; rows whose
/// category is not in the declared order are excluded from the table and
/// the test, the way an ordered categorical drops unknown levels.
/// Declared but unobserved categories contribute no row, so the test
/// never sees a zero expected count. Column categories always appear in
/// first-observation order.
pub fn chi_square_independence(
    table: &Dataset,
    row_variable: &str,
    col_variable: &str,
    row_order: Option<&[&str]>,
) -> Result<(ContingencyTable, ChiSquareTest), StatsError> {
    ensure_observations(table)?;
    let row_values = table.text(row_variable)?;
    let col_values = table.text(col_variable)?;

    let row_labels: Vec<String> = match row_order {
        Some(order) => order
            .iter()
            .filter(|&&label| row_values.iter().any(|v| v == label))
            .map(|&label| label.to_string())
            .collect(),
        None => {
            let mut labels: Vec<String> = Vec::new();
            for value in row_values {
                if !labels.contains(value) {
                    labels.push(value.clone());
                }
            }
            labels
        }
    };

    let mut col_labels: Vec<String> = Vec::new();
    for (col_value, row_value) in col_values.iter().zip(row_values) {
        if row_labels.iter().any(|l| l == row_value) && !col_labels.contains(col_value) {
            col_labels.push(col_value.clone());
        }
    }

    let mut observed = vec![vec![0u64; col_labels.len()]; row_labels.len()];
    for (row_value, col_value) in row_values.iter().zip(col_values) {
        let Some(ri) = row_labels.iter().position(|l| l == row_value) else {
            continue;
        };
        let Some(ci) = col_labels.iter().position(|l| l == col_value) else {
            continue;
        };
        observed[ri][ci] += 1;
    }

    let contingency = ContingencyTable {
        row_variable: row_variable.to_string(),
        col_variable: col_variable.to_string(),
        row_labels,
        col_labels,
        observed,
    };

    let used = contingency.grand_total() as usize;
    if used < MIN_OBSERVATIONS {
        return Err(StatsError::InsufficientData {
            needed: MIN_OBSERVATIONS,
            got: used,
        });
    }

    let expected = contingency.expected();
    let mut statistic = 0.0;
    for (observed_row, expected_row) in contingency.observed.iter().zip(&expected) {
        for (&o, &e) in observed_row.iter().zip(expected_row) {
            let diff = o as f64 - e;
            statistic += diff * diff / e;
        }
    }

    let dof = (contingency.row_labels.len() - 1) * (contingency.col_labels.len() - 1);
    // dof 0 means one of the variables is constant over the retained
    // rows; the table carries no evidence either way.
    let p_value = if dof == 0 {
        1.0
    } else {
        match ChiSquared::new(dof as f64) {
            Ok(dist) => 1.0 - dist.cdf(statistic),
            Err(_) => f64::NAN,
        }
    };

    Ok((
        contingency,
        ChiSquareTest {
            statistic,
            dof,
            p_value,
        },
    ))
}
