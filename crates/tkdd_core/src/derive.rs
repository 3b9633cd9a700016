//! Derived columns and ranking
//!
//! Derivations append to a table, never rewrite it, and re-running one is
//! a no-op: if the target column already exists the table is returned
//! unchanged. That keeps view handlers free to derive unconditionally.

use std::cmp::Ordering;

use crate::columns;
use crate::dataset::Dataset;
use crate::error::ColumnError;

/// Append `target` computed row-wise from the named `sources`, unless it
/// already exists. The closure receives the source cells of one row in
/// the order the sources were given. Returns true when the column was
/// inserted, false when it was already there.
pub fn derive_column<F>(
    table: &mut Dataset,
    target: &str,
    sources: &[&str],
    f: F,
) -> Result<bool, ColumnError>
where
    F: Fn(&[f64]) -> f64,
{
    if table.has_column(target) {
        return Ok(false);
    }

    let rows = table.rows();
    let mut out = Vec::with_capacity(rows);
    {
        let cols: Vec<&[f64]> = sources
            .iter()
            .map(|name| table.numeric(name))
            .collect::<Result<_, _>>()?;
        let mut row_buf = vec![0.0; cols.len()];
        for row in 0..rows {
            for (cell, col) in row_buf.iter_mut().zip(&cols) {
                *cell = col[row];
            }
            out.push(f(&row_buf));
        }
    }
    table.insert_numeric(target, out);
    Ok(true)
}

/// Disbursed over ceiling as a percentage, per province. A zero ceiling
/// yields NaN for that row instead of an infinity.
pub fn realization_percentage(table: &mut Dataset) -> Result<bool, ColumnError> {
    derive_column(
        table,
        columns::REALIZATION_PCT,
        &[columns::DISBURSED, columns::CEILING],
        |cells| {
            if cells[1] == 0.0 {
                f64::NAN
            } else {
                cells[0] / cells[1] * 100.0
            }
        },
    )
}

/// Normalize two columns against their row-wise sum, appending both
/// shares as percentages. Rows where the pair sums to zero get NaN in
/// both shares. Each target is only inserted if absent, so a re-run (or
/// a partial earlier run) leaves existing columns alone.
pub fn share_pair(
    table: &mut Dataset,
    a: &str,
    b: &str,
    target_a: &str,
    target_b: &str,
) -> Result<bool, ColumnError> {
    if table.has_column(target_a) && table.has_column(target_b) {
        return Ok(false);
    }

    let (share_a, share_b) = {
        let col_a = table.numeric(a)?;
        let col_b = table.numeric(b)?;
        let mut share_a = Vec::with_capacity(col_a.len());
        let mut share_b = Vec::with_capacity(col_b.len());
        for (&va, &vb) in col_a.iter().zip(col_b) {
            let total = va + vb;
            if total == 0.0 {
                share_a.push(f64::NAN);
                share_b.push(f64::NAN);
            } else {
                share_a.push(va / total * 100.0);
                share_b.push(vb / total * 100.0);
            }
        }
        (share_a, share_b)
    };

    let inserted_a = table.insert_numeric(target_a, share_a);
    let inserted_b = table.insert_numeric(target_b, share_b);
    Ok(inserted_a || inserted_b)
}

/// The ceiling/disbursed share pair used by the comparison view
pub fn transfer_share_pair(table: &mut Dataset) -> Result<bool, ColumnError> {
    share_pair(
        table,
        columns::CEILING,
        columns::DISBURSED,
        columns::CEILING_SHARE_PCT,
        columns::DISBURSED_SHARE_PCT,
    )
}

/// Row order sorted descending by `column`. The sort is stable, so tied
/// rows keep their source order; NaN rows sink to the end.
pub fn rank_by_desc(table: &Dataset, column: &str) -> Result<Vec<usize>, ColumnError> {
    let values = table.numeric(column)?;
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| cmp_desc(values[a], values[b]));
    Ok(order)
}

fn cmp_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
