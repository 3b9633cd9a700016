//! Shared fixtures for the pipeline tests

use std::fmt::Write as _;
use std::fs;

use tempfile::TempDir;

use crate::dataset::Dataset;

/// Three provinces with ceilings [100, 200, 50] and disbursements
/// [100, 220, 45]; realization comes out [100%, 110%, 90%].
pub const TRANSFERS_CSV: &str = "\
province,tkdd_ceiling,tkdd_disbursed
Alpha,100,100
Bravo,200,220
Charlie,50,45
";

/// Parse a CSV literal into a table
pub fn table_from_csv(text: &str) -> Dataset {
    Dataset::from_reader("fixture", text.as_bytes()).expect("fixture parses")
}

pub fn transfers_fixture() -> Dataset {
    table_from_csv(TRANSFERS_CSV)
}

// One wiggle pattern per indicator. Each column below mixes a linear
// trend with its own pattern so no two predictors are collinear and the
// regression design stays full rank.
const W_HDI: [f64; 16] = [
    3.0, -1.0, 4.0, -1.0, 5.0, -9.0, 2.0, -6.0, 5.0, -3.0, 5.0, -8.0, 9.0, 7.0, -9.0, 3.0,
];
const W_CEILING: [f64; 16] = [
    2.0, 7.0, -1.0, 8.0, 2.0, -8.0, 1.0, 8.0, -2.0, 8.0, 4.0, -5.0, 9.0, 0.0, -4.0, 5.0,
];
const W_POPULATION: [f64; 16] = [
    1.0, -4.0, 1.0, 4.0, 2.0, -1.0, 3.0, 5.0, -6.0, 2.0, 3.0, -7.0, 3.0, 0.0, -9.0, 5.0,
];
const W_APBN: [f64; 16] = [
    1.0, 7.0, -3.0, 2.0, 0.0, 5.0, 0.0, 8.0, 0.0, -7.0, 5.0, 6.0, 8.0, -8.0, 7.0, 2.0,
];
const W_POOR: [f64; 16] = [
    2.0, -2.0, 3.0, 6.0, 0.0, -6.0, 7.0, 7.0, -4.0, 6.0, 8.0, -4.0, 7.0, 1.0, -6.0, 6.0,
];
const W_GRDP: [f64; 16] = [
    6.0, -9.0, 3.0, 1.0, 4.0, -7.0, 1.0, 8.0, 0.0, -5.0, 5.0, 9.0, -9.0, 9.0, 4.0, -5.0,
];
const W_GRDP_PC: [f64; 16] = [
    4.0, -6.0, 6.0, 9.0, 2.0, 0.0, 9.0, 4.0, -4.0, 5.0, 7.0, -2.0, 0.0, 9.0, 6.0, -9.0,
];
const W_GROWTH: [f64; 16] = [
    5.0, -5.0, 1.0, 1.0, 6.0, -5.0, 1.0, 9.0, 0.0, -4.0, 6.0, 9.0, -3.0, 9.0, 9.0, -5.0,
];

/// Deterministic 16-province table carrying every socioeconomic column,
/// with categories consistent with the numeric values (HDI bands from
/// the HDI score, realization bands from the disbursement factor).
pub fn socioeconomic_csv() -> String {
    let mut csv = String::from(
        "province,tkdd_ceiling,tkdd_disbursed,population,apbn_per_capita,poor_pct,\
         grdp_current,grdp_per_capita,grdp_growth,hdi,hdi_category,realization_category\n",
    );
    for i in 0..16 {
        let t = i as f64;
        let hdi = 61.0 + 1.25 * t + 0.45 * W_HDI[i];
        let ceiling = 6_000.0 + 900.0 * t + 600.0 * W_CEILING[i];
        let factor = if i % 2 == 0 { 0.96 } else { 1.04 };
        let disbursed = ceiling * factor;
        let population = 2_000_000.0 + 210_000.0 * t + 140_000.0 * W_POPULATION[i];
        let apbn_per_capita = 3_200.0 + 55.0 * t + 90.0 * W_APBN[i];
        let poor_pct = 18.0 - 0.55 * t + 0.5 * W_POOR[i];
        let grdp_current = 90_000.0 + 9_000.0 * t + 7_000.0 * W_GRDP[i];
        let grdp_per_capita = 28_000.0 + 1_500.0 * t + 1_300.0 * W_GRDP_PC[i];
        let grdp_growth = 4.8 + 0.1 * t + 0.55 * W_GROWTH[i];
        let hdi_category = if hdi >= 80.0 {
            "Very High"
        } else if hdi >= 70.0 {
            "High"
        } else {
            "Medium"
        };
        let realization_category = if factor > 1.0 { ">100%" } else { "90-100%" };
        writeln!(
            csv,
            "Province {:02},{ceiling:.2},{disbursed:.2},{population:.0},{apbn_per_capita:.2},\
             {poor_pct:.2},{grdp_current:.2},{grdp_per_capita:.2},{grdp_growth:.2},{hdi:.2},\
             {hdi_category},{realization_category}",
            i + 1,
        )
        .expect("write to string");
    }
    csv
}

pub fn socioeconomic_fixture() -> Dataset {
    table_from_csv(&socioeconomic_csv())
}

/// Materialize both source files in a temp directory laid out the way
/// the catalog expects
pub fn fixture_data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("transfers_2023.csv"), TRANSFERS_CSV).expect("write transfers");
    fs::write(dir.path().join("socioeconomic_2023.csv"), socioeconomic_csv())
        .expect("write socioeconomic");
    dir
}
