//! Plain-text rendering of topic reports
//!
//! Formatting only: every number arrives fully computed from the core
//! library. JSON output bypasses this module entirely.

use std::fmt::Write as _;

use tkdd_core::stats::{RegressionSummary, Significance};
use tkdd_core::views::{
    AssociationReport, DriversReport, ProvinceComparison, RankedRealization, Topic, TopicReport,
};

/// Render one report as a text block ready for stdout
pub fn render_report(topic: Topic, report: &TopicReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", topic.title());
    let _ = writeln!(out);
    match report {
        TopicReport::Comparison { rows } => render_comparison(&mut out, rows),
        TopicReport::Ranking { rows } => render_ranking(&mut out, rows),
        TopicReport::Drivers(drivers) => render_drivers(&mut out, drivers),
        TopicReport::Association(association) => render_association(&mut out, association),
    }
    out
}

fn render_comparison(out: &mut String, rows: &[ProvinceComparison]) {
    let _ = writeln!(
        out,
        "{:<26} {:>14} {:>14} {:>12} {:>11} {:>11}",
        "province", "ceiling", "disbursed", "realization", "ceiling%", "disbursed%"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<26} {:>14} {:>14} {:>12} {:>11} {:>11}",
            row.province,
            format_amount(row.ceiling),
            format_amount(row.disbursed),
            format_pct(row.realization_pct),
            format_pct(row.ceiling_share_pct),
            format_pct(row.disbursed_share_pct),
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "amounts in millions of rupiah; shares normalize each pair");
}

fn render_ranking(out: &mut String, rows: &[RankedRealization]) {
    for (rank, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:<26} {:>8}",
            rank + 1,
            row.province,
            format_pct(row.realization_pct)
        );
    }
}

fn render_drivers(out: &mut String, drivers: &DriversReport) {
    let points = drivers.scatter.first().map_or(0, |s| s.points.len());
    let _ = writeln!(
        out,
        "scatter data: {} predictors x {} provinces (use --format json for the points)",
        drivers.scatter.len(),
        points
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "correlation with {}:", drivers.target);
    for entry in &drivers.correlations {
        let _ = writeln!(out, "  {:<18} {:>6.2}", entry.variable, entry.r);
    }
    let _ = writeln!(out);

    render_regression(out, &drivers.regression);
}

fn render_regression(out: &mut String, regression: &RegressionSummary) {
    let _ = writeln!(
        out,
        "ols: {} ~ {} predictors (n = {}, r^2 = {:.4})",
        regression.target,
        regression.terms.len() - 1,
        regression.observations,
        regression.r_squared
    );
    let _ = writeln!(
        out,
        "  {:<18} {:>14} {:>8} {:>8}  {}",
        "term", "coefficient", "t", "p", "significance"
    );
    for term in &regression.terms {
        let _ = writeln!(
            out,
            "  {:<18} {:>14.4} {:>8.2} {:>8.4}  {}",
            term.term,
            term.coefficient,
            term.t_statistic,
            term.p_value,
            term.significance.label()
        );
    }
}

fn render_association(out: &mut String, association: &AssociationReport) {
    let pearson = &association.pearson;
    let _ = writeln!(
        out,
        "pearson r = {:.4} (n = {}), p = {:.4} -> {}",
        pearson.r,
        pearson.n,
        pearson.p_value,
        Significance::from_p(pearson.p_value).label()
    );
    let _ = writeln!(out);

    let contingency = &association.contingency;
    let _ = writeln!(
        out,
        "{} x {} contingency:",
        contingency.row_variable, contingency.col_variable
    );
    let mut header = format!("  {:<12}", "");
    for label in &contingency.col_labels {
        let _ = write!(header, " {label:>10}");
    }
    let _ = writeln!(out, "{header} {:>10}", "total");
    let row_totals = contingency.row_totals();
    for ((label, counts), total) in contingency
        .row_labels
        .iter()
        .zip(&contingency.observed)
        .zip(&row_totals)
    {
        let mut line = format!("  {label:<12}");
        for count in counts {
            let _ = write!(line, " {count:>10}");
        }
        let _ = writeln!(out, "{line} {total:>10}");
    }
    let mut totals_line = format!("  {:<12}", "total");
    for total in contingency.col_totals() {
        let _ = write!(totals_line, " {total:>10}");
    }
    let _ = writeln!(out, "{totals_line} {:>10}", contingency.grand_total());
    let _ = writeln!(out);

    let chi = &association.chi_square;
    let _ = writeln!(
        out,
        "chi-square = {:.4} (dof = {}), p = {:.4}",
        chi.statistic, chi.dof, chi.p_value
    );
    let _ = writeln!(out, "{}", association.verdict);
}

/// Thousands-separated whole amount, e.g. 70920000 -> "70,920,000"
pub fn format_amount(value: f64) -> String {
    let rounded = value.abs().round() as i64;

    let digits = rounded.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let formatted: String = grouped.chars().rev().collect();

    if value < 0.0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// One-decimal percentage; undefined values show as "n/a"
pub fn format_pct(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{value:.1}%")
    }
}
