use std::fmt;

/// Errors related to column lookups on a loaded table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnError {
    NotFound(String),
    NotNumeric(String),
    NotText(String),
}

impl fmt::Display for ColumnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnError::NotFound(name) => write!(f, "column {name:?} not found"),
            ColumnError::NotNumeric(name) => {
                write!(f, "column {name:?} holds text, expected numbers")
            }
            ColumnError::NotText(name) => {
                write!(f, "column {name:?} holds numbers, expected categories")
            }
        }
    }
}

impl std::error::Error for ColumnError {}

/// Errors raised while reading a source file into a table
///
/// Cloneable so the catalog can memoize a failed load and hand the same
/// outcome to every later request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The source could not be opened or read
    Io { source: String, reason: String },
    /// The source was read but is not a well-formed table.
    /// `record` is the 1-based line in the file when known (the header
    /// row is line 1).
    Malformed {
        source: String,
        record: Option<u64>,
        reason: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { source, reason } => {
                write!(f, "failed to read {source}: {reason}")
            }
            LoadError::Malformed {
                source,
                record: Some(record),
                reason,
            } => {
                write!(f, "malformed data in {source} (line {record}): {reason}")
            }
            LoadError::Malformed {
                source,
                record: None,
                reason,
            } => {
                write!(f, "malformed data in {source}: {reason}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Errors from the statistical operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Too few usable observations for the requested statistic
    InsufficientData { needed: usize, got: usize },
    /// The regression design matrix is not full rank
    SingularMatrix,
    Column(ColumnError),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::InsufficientData { needed, got } => {
                write!(f, "not enough observations: needed {needed}, got {got}")
            }
            StatsError::SingularMatrix => {
                write!(f, "design matrix is singular (linearly dependent predictors)")
            }
            StatsError::Column(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Column(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ColumnError> for StatsError {
    fn from(e: ColumnError) -> Self {
        StatsError::Column(e)
    }
}

/// Umbrella error surfaced by the topic view handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    Load(LoadError),
    Stats(StatsError),
    Column(ColumnError),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::Load(e) => write!(f, "{e}"),
            ViewError::Stats(e) => write!(f, "{e}"),
            ViewError::Column(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewError::Load(e) => Some(e),
            ViewError::Stats(e) => Some(e),
            ViewError::Column(e) => Some(e),
        }
    }
}

impl From<LoadError> for ViewError {
    fn from(e: LoadError) -> Self {
        ViewError::Load(e)
    }
}

impl From<StatsError> for ViewError {
    fn from(e: StatsError) -> Self {
        ViewError::Stats(e)
    }
}

impl From<ColumnError> for ViewError {
    fn from(e: ColumnError) -> Self {
        ViewError::Column(e)
    }
}
