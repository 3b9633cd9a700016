//! Memoized access to the two fixed 2023 sources
//!
//! Every view starts from one of two files under the data directory, and
//! several views share a file. The catalog reads each file at most once,
//! including under concurrent first requests, and hands out shared
//! references to the cached table. A failed load is memoized the same
//! way: later requests get a clone of the original error rather than a
//! retry.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::LoadError;

/// The two fixed sources of the 2023 analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceId {
    /// Ceiling and disbursement per province
    Transfers,
    /// Transfers joined with socioeconomic indicators
    Socioeconomic,
}

impl SourceId {
    pub const ALL: [SourceId; 2] = [SourceId::Transfers, SourceId::Socioeconomic];

    /// File name under the data directory
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            SourceId::Transfers => "transfers_2023.csv",
            SourceId::Socioeconomic => "socioeconomic_2023.csv",
        }
    }
}

/// Lazy, load-once handle over the data directory.
///
/// Construct one per run and pass it by shared reference into every view
/// handler; the handlers never read files themselves.
#[derive(Debug)]
pub struct DataCatalog {
    data_dir: PathBuf,
    slots: [OnceLock<Result<Dataset, LoadError>>; 2],
}

impl DataCatalog {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            slots: [OnceLock::new(), OnceLock::new()],
        }
    }

    /// Directory the source files are read from
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of one source file
    #[must_use]
    pub fn path_for(&self, id: SourceId) -> PathBuf {
        self.data_dir.join(id.file_name())
    }

    /// The table for `id`, loading it on first request. The `OnceLock`
    /// guarantees the file is read at most once even when two threads
    /// ask at the same time; whichever outcome wins is the one everyone
    /// sees from then on.
    pub fn dataset(&self, id: SourceId) -> Result<&Dataset, LoadError> {
        self.slots[id as usize]
            .get_or_init(|| Dataset::from_path(&self.path_for(id)))
            .as_ref()
            .map_err(Clone::clone)
    }
}
