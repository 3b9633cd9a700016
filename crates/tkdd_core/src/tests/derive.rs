//! Tests for derived columns and ranking
//!
//! These tests verify that:
//! - Realization and share columns compute the documented formulas
//! - Re-running a derivation is a no-op, not an error or a rewrite
//! - Zero denominators produce NaN rows instead of infinities
//! - Descending ranking is stable and sinks NaN to the end

use crate::columns;
use crate::derive::{
    derive_column, rank_by_desc, realization_percentage, share_pair, transfer_share_pair,
};
use crate::error::ColumnError;

use super::support::{self, table_from_csv};

#[test]
fn test_realization_percentage_values() {
    let mut table = support::transfers_fixture();
    let inserted = realization_percentage(&mut table).unwrap();
    assert!(inserted);
    assert_eq!(
        table.numeric(columns::REALIZATION_PCT).unwrap(),
        &[100.0, 110.0, 90.0]
    );
}

#[test]
fn test_realization_is_idempotent() {
    let mut table = support::transfers_fixture();
    assert!(realization_percentage(&mut table).unwrap());
    let first: Vec<f64> = table.numeric(columns::REALIZATION_PCT).unwrap().to_vec();
    let n_columns = table.column_names().len();

    // Second run: no insert, same cells, same shape
    assert!(!realization_percentage(&mut table).unwrap());
    assert_eq!(table.numeric(columns::REALIZATION_PCT).unwrap(), &first[..]);
    assert_eq!(table.column_names().len(), n_columns);
}

#[test]
fn test_zero_ceiling_yields_nan() {
    let mut table = table_from_csv(
        "province,tkdd_ceiling,tkdd_disbursed\n\
         Alpha,0,50\n\
         Bravo,100,90\n",
    );
    realization_percentage(&mut table).unwrap();
    let values = table.numeric(columns::REALIZATION_PCT).unwrap();
    assert!(values[0].is_nan());
    assert_eq!(values[1], 90.0);
}

#[test]
fn test_share_pair_sums_to_hundred() {
    let mut table = support::transfers_fixture();
    assert!(transfer_share_pair(&mut table).unwrap());

    let ceiling_share = table.numeric(columns::CEILING_SHARE_PCT).unwrap();
    let disbursed_share = table.numeric(columns::DISBURSED_SHARE_PCT).unwrap();
    for (a, b) in ceiling_share.iter().zip(disbursed_share) {
        assert!((a + b - 100.0).abs() < 1e-9, "shares sum to {}", a + b);
    }
    // Row 0: 100 vs 100 splits evenly
    assert_eq!(ceiling_share[0], 50.0);
}

#[test]
fn test_share_pair_zero_sum_yields_nan() {
    let mut table = table_from_csv("a,b\n0,0\n1,3\n");
    assert!(share_pair(&mut table, "a", "b", "a_share", "b_share").unwrap());
    assert!(table.numeric("a_share").unwrap()[0].is_nan());
    assert!(table.numeric("b_share").unwrap()[0].is_nan());
    assert_eq!(table.numeric("a_share").unwrap()[1], 25.0);
    assert_eq!(table.numeric("b_share").unwrap()[1], 75.0);
}

#[test]
fn test_share_pair_leaves_existing_target_alone() {
    let mut table = table_from_csv("a,b,a_share\n1,1,999\n3,1,999\n");
    // a_share already exists; only b_share is inserted
    assert!(share_pair(&mut table, "a", "b", "a_share", "b_share").unwrap());
    assert_eq!(table.numeric("a_share").unwrap(), &[999.0, 999.0]);
    assert_eq!(table.numeric("b_share").unwrap(), &[50.0, 25.0]);

    // Now both exist: full no-op
    assert!(!share_pair(&mut table, "a", "b", "a_share", "b_share").unwrap());
}

#[test]
fn test_derive_column_sees_sources_in_given_order() {
    let mut table = table_from_csv("x,y\n10,3\n20,4\n");
    derive_column(&mut table, "diff", &["x", "y"], |cells| cells[0] - cells[1]).unwrap();
    assert_eq!(table.numeric("diff").unwrap(), &[7.0, 16.0]);
}

#[test]
fn test_derive_missing_source_fails() {
    let mut table = support::transfers_fixture();
    let err = derive_column(&mut table, "out", &["no_such"], |c| c[0]).unwrap_err();
    assert_eq!(err, ColumnError::NotFound("no_such".to_string()));
    assert!(!table.has_column("out"));
}

#[test]
fn test_derive_text_source_fails() {
    let mut table = support::transfers_fixture();
    let err = derive_column(&mut table, "out", &[columns::PROVINCE], |c| c[0]).unwrap_err();
    assert_eq!(err, ColumnError::NotNumeric(columns::PROVINCE.to_string()));
}

#[test]
fn test_rank_desc_order() {
    let mut table = support::transfers_fixture();
    realization_percentage(&mut table).unwrap();
    // Realization [100, 110, 90] ranks Bravo, Alpha, Charlie
    let order = rank_by_desc(&table, columns::REALIZATION_PCT).unwrap();
    assert_eq!(order, vec![1, 0, 2]);
}

#[test]
fn test_rank_ties_keep_source_order() {
    let table = table_from_csv("v\n5\n9\n5\n1\n5\n");
    let order = rank_by_desc(&table, "v").unwrap();
    assert_eq!(order, vec![1, 0, 2, 4, 3]);
}

#[test]
fn test_rank_nan_sinks_last() {
    let mut table = table_from_csv(
        "province,tkdd_ceiling,tkdd_disbursed\n\
         Alpha,0,50\n\
         Bravo,100,90\n\
         Charlie,100,110\n",
    );
    realization_percentage(&mut table).unwrap();
    let order = rank_by_desc(&table, columns::REALIZATION_PCT).unwrap();
    assert_eq!(order, vec![2, 1, 0]);
}

#[test]
fn test_rank_missing_column_fails() {
    let table = support::transfers_fixture();
    assert_eq!(
        rank_by_desc(&table, "absent"),
        Err(ColumnError::NotFound("absent".to_string()))
    );
}
