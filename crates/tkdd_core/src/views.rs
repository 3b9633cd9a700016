//! Topic registry and view handlers
//!
//! Each analysis topic from the 2023 study is one handler behind the
//! [`ViewHandler`] trait; [`handler_for`] is the lookup table that maps a
//! selected topic to its handler. Handlers read through the catalog,
//! derive what they need on a private working copy, and return a
//! structured [`TopicReport`] for the presentation layer to format.

use serde::Serialize;

use crate::catalog::{DataCatalog, SourceId};
use crate::columns;
use crate::dataset::Dataset;
use crate::derive;
use crate::error::ViewError;
use crate::stats::{
    self, ChiSquareTest, ContingencyTable, CorrelationEntry, PearsonTest, RegressionSummary,
};

/// The five analysis topics, in original menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    CeilingVsDisbursement,
    RealizationRanking,
    DisbursementDrivers,
    DisbursementVsHdi,
    HdiDrivers,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::CeilingVsDisbursement,
        Topic::RealizationRanking,
        Topic::DisbursementDrivers,
        Topic::DisbursementVsHdi,
        Topic::HdiDrivers,
    ];

    /// Stable key used on the command line and in JSON output
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Topic::CeilingVsDisbursement => "ceiling-vs-disbursement",
            Topic::RealizationRanking => "realization-ranking",
            Topic::DisbursementDrivers => "disbursement-drivers",
            Topic::DisbursementVsHdi => "disbursement-vs-hdi",
            Topic::HdiDrivers => "hdi-drivers",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.key() == key)
    }

    /// Human-readable heading for report output
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Topic::CeilingVsDisbursement => "TKDD ceiling vs. disbursement by province, 2023",
            Topic::RealizationRanking => "TKDD realization percentage by province, 2023",
            Topic::DisbursementDrivers => "What drives TKDD disbursement?",
            Topic::DisbursementVsHdi => "TKDD disbursement and human development",
            Topic::HdiDrivers => "What drives the Human Development Index?",
        }
    }
}

/// One ranked row of the ceiling/disbursement comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvinceComparison {
    pub province: String,
    pub ceiling: f64,
    pub disbursed: f64,
    pub realization_pct: f64,
    pub ceiling_share_pct: f64,
    pub disbursed_share_pct: f64,
}

/// One ranked row of the realization ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRealization {
    pub province: String,
    pub realization_pct: f64,
}

/// Raw paired points of one predictor against the target, for plotting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub variable: String,
    /// (predictor, target) per province
    pub points: Vec<(f64, f64)>,
}

/// Scatter data, target correlations and the multiple regression for
/// one "drivers of X" topic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriversReport {
    pub target: String,
    pub scatter: Vec<ScatterSeries>,
    pub correlations: Vec<CorrelationEntry>,
    pub regression: RegressionSummary,
}

/// Continuous and categorical association between disbursement and HDI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationReport {
    pub pearson: PearsonTest,
    pub contingency: ContingencyTable,
    pub chi_square: ChiSquareTest,
    pub verdict: String,
}

/// Structured output of one topic
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopicReport {
    Comparison { rows: Vec<ProvinceComparison> },
    Ranking { rows: Vec<RankedRealization> },
    Drivers(DriversReport),
    Association(AssociationReport),
}

/// A pre-canned analysis over the catalog
pub trait ViewHandler: Sync {
    /// The topic this handler serves
    fn topic(&self) -> Topic;

    /// Run the topic's pipeline stages. Pure apart from the catalog's
    /// first-load memoization; the same catalog gives the same report.
    fn build(&self, catalog: &DataCatalog) -> Result<TopicReport, ViewError>;
}

// Indexed by Topic discriminant; keep in Topic::ALL order.
static HANDLERS: [&dyn ViewHandler; 5] = [
    &CeilingVsDisbursementView,
    &RealizationRankingView,
    &DisbursementDriversView,
    &DisbursementVsHdiView,
    &HdiDriversView,
];

/// Handler lookup for a selected topic
#[must_use]
pub fn handler_for(topic: Topic) -> &'static dyn ViewHandler {
    HANDLERS[topic as usize]
}

/// Build one topic's report through its registered handler
pub fn build_topic(catalog: &DataCatalog, topic: Topic) -> Result<TopicReport, ViewError> {
    handler_for(topic).build(catalog)
}

/// Predictors of the disbursement regression, in report order
const DISBURSEMENT_PREDICTORS: [&str; 8] = [
    columns::HDI,
    columns::CEILING,
    columns::POPULATION,
    columns::APBN_PER_CAPITA,
    columns::POOR_PCT,
    columns::GRDP_CURRENT,
    columns::GRDP_PER_CAPITA,
    columns::GRDP_GROWTH,
];

/// Predictors of the HDI regression, in report order
const HDI_PREDICTORS: [&str; 8] = [
    columns::CEILING,
    columns::POPULATION,
    columns::APBN_PER_CAPITA,
    columns::POOR_PCT,
    columns::GRDP_CURRENT,
    columns::GRDP_PER_CAPITA,
    columns::GRDP_GROWTH,
    columns::DISBURSED,
];

struct CeilingVsDisbursementView;

impl ViewHandler for CeilingVsDisbursementView {
    fn topic(&self) -> Topic {
        Topic::CeilingVsDisbursement
    }

    fn build(&self, catalog: &DataCatalog) -> Result<TopicReport, ViewError> {
        let mut table = catalog.dataset(SourceId::Transfers)?.clone();
        derive::realization_percentage(&mut table)?;
        derive::transfer_share_pair(&mut table)?;
        let order = derive::rank_by_desc(&table, columns::REALIZATION_PCT)?;

        let province = table.text(columns::PROVINCE)?;
        let ceiling = table.numeric(columns::CEILING)?;
        let disbursed = table.numeric(columns::DISBURSED)?;
        let realization = table.numeric(columns::REALIZATION_PCT)?;
        let ceiling_share = table.numeric(columns::CEILING_SHARE_PCT)?;
        let disbursed_share = table.numeric(columns::DISBURSED_SHARE_PCT)?;

        let rows = order
            .iter()
            .map(|&i| ProvinceComparison {
                province: province[i].clone(),
                ceiling: ceiling[i],
                disbursed: disbursed[i],
                realization_pct: realization[i],
                ceiling_share_pct: ceiling_share[i],
                disbursed_share_pct: disbursed_share[i],
            })
            .collect();
        Ok(TopicReport::Comparison { rows })
    }
}

struct RealizationRankingView;

impl ViewHandler for RealizationRankingView {
    fn topic(&self) -> Topic {
        Topic::RealizationRanking
    }

    fn build(&self, catalog: &DataCatalog) -> Result<TopicReport, ViewError> {
        let mut table = catalog.dataset(SourceId::Transfers)?.clone();
        derive::realization_percentage(&mut table)?;
        let order = derive::rank_by_desc(&table, columns::REALIZATION_PCT)?;

        let province = table.text(columns::PROVINCE)?;
        let realization = table.numeric(columns::REALIZATION_PCT)?;

        let rows = order
            .iter()
            .map(|&i| RankedRealization {
                province: province[i].clone(),
                realization_pct: realization[i],
            })
            .collect();
        Ok(TopicReport::Ranking { rows })
    }
}

struct DisbursementDriversView;

impl ViewHandler for DisbursementDriversView {
    fn topic(&self) -> Topic {
        Topic::DisbursementDrivers
    }

    fn build(&self, catalog: &DataCatalog) -> Result<TopicReport, ViewError> {
        let table = catalog.dataset(SourceId::Socioeconomic)?;
        build_drivers(table, columns::DISBURSED, &DISBURSEMENT_PREDICTORS)
    }
}

struct DisbursementVsHdiView;

impl ViewHandler for DisbursementVsHdiView {
    fn topic(&self) -> Topic {
        Topic::DisbursementVsHdi
    }

    fn build(&self, catalog: &DataCatalog) -> Result<TopicReport, ViewError> {
        let table = catalog.dataset(SourceId::Socioeconomic)?;
        let pearson = stats::pearson_test(table, columns::HDI, columns::DISBURSED)?;
        let (contingency, chi_square) = stats::chi_square_independence(
            table,
            columns::HDI_CATEGORY,
            columns::REALIZATION_CATEGORY,
            Some(&columns::HDI_CATEGORY_ORDER),
        )?;
        let verdict = chi_square.verdict().to_string();
        Ok(TopicReport::Association(AssociationReport {
            pearson,
            contingency,
            chi_square,
            verdict,
        }))
    }
}

struct HdiDriversView;

impl ViewHandler for HdiDriversView {
    fn topic(&self) -> Topic {
        Topic::HdiDrivers
    }

    fn build(&self, catalog: &DataCatalog) -> Result<TopicReport, ViewError> {
        let table = catalog.dataset(SourceId::Socioeconomic)?;
        build_drivers(table, columns::HDI, &HDI_PREDICTORS)
    }
}

fn build_drivers(
    table: &Dataset,
    target: &str,
    predictors: &[&str],
) -> Result<TopicReport, ViewError> {
    let y = table.numeric(target)?;

    let mut scatter = Vec::with_capacity(predictors.len());
    for name in predictors {
        let x = table.numeric(name)?;
        scatter.push(ScatterSeries {
            variable: (*name).to_string(),
            points: x.iter().copied().zip(y.iter().copied()).collect(),
        });
    }

    let correlations = stats::correlations_with_target(table, target, predictors)?;
    let regression = stats::fit_ols(table, target, predictors)?;

    Ok(TopicReport::Drivers(DriversReport {
        target: target.to_string(),
        scatter,
        correlations,
        regression,
    }))
}
