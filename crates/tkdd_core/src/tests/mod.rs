//! Integration tests for the TKDD analysis pipeline
//!
//! Tests are organized by pipeline stage:
//! - `loader` - CSV ingestion and catalog memoization
//! - `derive` - Derived columns and ranking
//! - `correlation` - Pearson r and the paired significance test
//! - `regression` - OLS coefficients, t statistics and error cases
//! - `contingency` - Cross-tabulation and the chi-square test
//! - `views` - End-to-end topic reports over fixture data

mod derive;
mod support;
