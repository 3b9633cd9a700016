//! Criterion benchmarks for the tkdd_core pipeline
//!
//! Run with: cargo bench -p tkdd_core

use std::fmt::Write as _;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tkdd_core::columns;
use tkdd_core::dataset::Dataset;
use tkdd_core::derive;
use tkdd_core::stats;

fn transfers_csv(rows: usize) -> String {
    let mut csv = String::from("province,tkdd_ceiling,tkdd_disbursed\n");
    for i in 0..rows {
        let ceiling = 5_000.0 + 37.0 * i as f64;
        let disbursed = ceiling * (0.9 + 0.002 * (i % 100) as f64);
        writeln!(csv, "Province {i},{ceiling:.2},{disbursed:.2}").expect("write to string");
    }
    csv
}

fn numeric_table(rows: usize) -> Dataset {
    let mut csv = String::from("y,x1,x2,x3,x4,x5,x6,x7,x8\n");
    for i in 0..rows {
        let t = i as f64;
        let cells = [
            100.0 + 3.0 * t + (i % 7) as f64,
            t,
            t * t % 97.0,
            50.0 + (i % 13) as f64,
            (i % 5) as f64 * 7.0,
            1_000.0 - 2.0 * t + (i % 11) as f64,
            (i % 17) as f64,
            3.0 + (i % 23) as f64 * 0.4,
            t % 29.0,
        ];
        let line: Vec<String> = cells.iter().map(|v| format!("{v:.4}")).collect();
        writeln!(csv, "{}", line.join(",")).expect("write to string");
    }
    Dataset::from_reader("bench", csv.as_bytes()).expect("bench table parses")
}

fn categorical_table(rows: usize) -> Dataset {
    let bands = ["Very High", "High", "Medium"];
    let outcomes = ["90-100%", ">100%"];
    let mut csv = String::from("band,outcome\n");
    for i in 0..rows {
        writeln!(csv, "{},{}", bands[i % 3], outcomes[(i / 3) % 2]).expect("write to string");
    }
    Dataset::from_reader("bench", csv.as_bytes()).expect("bench table parses")
}

fn bench_csv_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_load");
    for rows in [38, 380, 3_800] {
        let csv = transfers_csv(rows);
        group.bench_with_input(BenchmarkId::new("rows", rows), &csv, |b, csv| {
            b.iter(|| Dataset::from_reader("bench", black_box(csv.as_bytes())).unwrap())
        });
    }
    group.finish();
}

fn bench_derive_and_rank(c: &mut Criterion) {
    let base = Dataset::from_reader("bench", transfers_csv(3_800).as_bytes()).unwrap();

    c.bench_function("derive_and_rank_3800", |b| {
        b.iter(|| {
            let mut table = black_box(&base).clone();
            derive::realization_percentage(&mut table).unwrap();
            derive::transfer_share_pair(&mut table).unwrap();
            derive::rank_by_desc(&table, columns::REALIZATION_PCT).unwrap()
        })
    });
}

fn bench_ols(c: &mut Criterion) {
    let predictors = ["x1", "x2", "x3", "x4", "x5", "x6", "x7", "x8"];
    let mut group = c.benchmark_group("ols_fit");
    for rows in [38, 380, 3_800] {
        let table = numeric_table(rows);
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| stats::fit_ols(black_box(table), "y", &predictors).unwrap())
        });
    }
    group.finish();
}

fn bench_chi_square(c: &mut Criterion) {
    let table = categorical_table(3_800);

    c.bench_function("chi_square_3800", |b| {
        b.iter(|| {
            stats::chi_square_independence(black_box(&table), "band", "outcome", None).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_csv_load,
    bench_derive_and_rank,
    bench_ols,
    bench_chi_square,
);
criterion_main!(benches);
