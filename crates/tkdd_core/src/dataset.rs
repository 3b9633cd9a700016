//! Column-oriented table model and CSV ingestion
//!
//! A `Dataset` is an immutable snapshot of one delimited source: named
//! columns of equal length, each either fully numeric or text. Column type
//! is inferred at load time: a column is numeric when every one of its
//! cells parses as `f64`, otherwise it stays text. Derived columns can be
//! appended later but existing cells are never rewritten.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::error::{ColumnError, LoadError};

/// Cell storage for a single column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

/// One loaded table: equal-length named columns plus the source they
/// came from (kept for error messages)
#[derive(Debug, Clone)]
pub struct Dataset {
    source: String,
    names: Vec<String>,
    index: FxHashMap<String, usize>,
    columns: Vec<ColumnData>,
    rows: usize,
}

impl Dataset {
    /// Read a comma-separated file with a header row.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let source = path.display().to_string();
        let file = File::open(path).map_err(|e| LoadError::Io {
            source: source.clone(),
            reason: e.to_string(),
        })?;
        Self::from_reader(&source, file)
    }

    /// Parse CSV text from any reader. `source` is only used to label
    /// errors, so tests can pass a fixture name.
    pub fn from_reader<R: Read>(source: &str, reader: R) -> Result<Self, LoadError> {
        let malformed = |record: Option<u64>, reason: String| LoadError::Malformed {
            source: source.to_string(),
            record,
            reason,
        };

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| malformed(Some(1), e.to_string()))?
            .clone();
        if headers.is_empty() {
            return Err(malformed(Some(1), "no header row".to_string()));
        }

        let mut names = Vec::with_capacity(headers.len());
        let mut index = FxHashMap::default();
        for (i, name) in headers.iter().enumerate() {
            if name.is_empty() {
                return Err(malformed(Some(1), format!("header {} is empty", i + 1)));
            }
            if index.insert(name.to_string(), i).is_some() {
                return Err(malformed(Some(1), format!("duplicate header {name:?}")));
            }
            names.push(name.to_string());
        }

        // The reader runs strict, so ragged rows surface here as errors
        // carrying the offending line.
        let mut records = Vec::new();
        for result in csv_reader.records() {
            let record = result.map_err(|e| {
                let line = e.position().map(|p| p.line());
                malformed(line, e.to_string())
            })?;
            records.push(record);
        }

        // Infer each column's type: numeric only when every cell parses.
        let mut columns = Vec::with_capacity(names.len());
        for col in 0..names.len() {
            let parsed: Option<Vec<f64>> = records
                .iter()
                .map(|record| record[col].parse::<f64>().ok())
                .collect();
            columns.push(match parsed {
                Some(values) => ColumnData::Numeric(values),
                None => ColumnData::Text(
                    records.iter().map(|record| record[col].to_string()).collect(),
                ),
            });
        }

        Ok(Self {
            source: source.to_string(),
            names,
            index,
            columns,
            rows: records.len(),
        })
    }

    /// Label of the source this table was read from
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of data rows (the header does not count)
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names in source order, derived columns last
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnData> {
        self.index.get(name).map(|&i| &self.columns[i])
    }

    /// Borrow a numeric column by name
    pub fn numeric(&self, name: &str) -> Result<&[f64], ColumnError> {
        match self.column(name) {
            Some(ColumnData::Numeric(values)) => Ok(values),
            Some(ColumnData::Text(_)) => Err(ColumnError::NotNumeric(name.to_string())),
            None => Err(ColumnError::NotFound(name.to_string())),
        }
    }

    /// Borrow a text column by name
    pub fn text(&self, name: &str) -> Result<&[String], ColumnError> {
        match self.column(name) {
            Some(ColumnData::Text(values)) => Ok(values),
            Some(ColumnData::Numeric(_)) => Err(ColumnError::NotText(name.to_string())),
            None => Err(ColumnError::NotFound(name.to_string())),
        }
    }

    /// Append a numeric column. Returns false (leaving the table
    /// untouched) when a column with this name already exists, which is
    /// what makes re-running a derivation a no-op.
    ///
    /// # Panics
    ///
    /// Panics when `values.len()` differs from the table's row count;
    /// derivations always compute from columns of this same table.
    pub fn insert_numeric(&mut self, name: &str, values: Vec<f64>) -> bool {
        assert_eq!(
            values.len(),
            self.rows,
            "derived column {name:?} has wrong length"
        );
        if self.has_column(name) {
            return false;
        }
        self.index.insert(name.to_string(), self.columns.len());
        self.names.push(name.to_string());
        self.columns.push(ColumnData::Numeric(values));
        true
    }
}
