//! TKDD transfer analysis library
//!
//! This crate implements the data pipeline behind the 2023 study of TKDD
//! (Transfer ke Daerah dan Dana Desa) across Indonesia's 38 provinces.
//! It supports:
//! - Load-once access to the two delimited sources via a catalog
//! - Idempotent derived columns (realization percentage, share pairs)
//! - Descending rankings with stable tie handling
//! - Pearson correlation, matrix-style and as a paired significance test
//! - Ordinary least squares with t statistics and p-values per term
//! - Chi-square independence tests over categorical pairs
//! - Five pre-canned topic views returning structured reports
//!
//! The library computes and stays silent about presentation; the `tkdd`
//! binary renders reports as text or JSON.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod catalog;
pub mod derive;
pub mod error;
pub mod stats;
pub mod views;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod columns;
pub mod dataset;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use catalog::{DataCatalog, SourceId};
pub use dataset::{ColumnData, Dataset};
pub use error::{ColumnError, LoadError, StatsError, ViewError};
pub use views::{Topic, TopicReport, build_topic, handler_for};
