//! Coverage records and the result-set wire form

use super::file::FileCoverage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Coverage keyed by source file path
pub type FileMap = BTreeMap<String, FileCoverage>;

/// One run's entry inside a result set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunData {
    /// Coverage per file
    #[serde(default)]
    pub coverage: FileMap,
    /// Unix seconds at which the run was recorded
    #[serde(default)]
    pub timestamp: i64,
}

/// Contents of a `.resultset.json`, keyed by command name.
///
/// A repeated command key inside one file keeps the last entry.
pub type ResultSet = BTreeMap<String, RunData>;

/// Coverage measured by a single run (or the merge of several)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRecord {
    /// Command name the run was recorded under
    pub command_name: String,
    /// Coverage per file
    pub coverage: FileMap,
    /// Unix seconds at which the run was recorded
    pub timestamp: i64,
}

impl CoverageRecord {
    /// Create a record
    #[must_use]
    pub fn new(command_name: impl Into<String>, coverage: FileMap, timestamp: i64) -> Self {
        Self {
            command_name: command_name.into(),
            coverage,
            timestamp,
        }
    }

    /// Build a record from one `(command, data)` result-set entry
    #[must_use]
    pub fn from_entry(command_name: &str, data: RunData) -> Self {
        Self::new(command_name, data.coverage, data.timestamp)
    }

    /// Split a parsed result set into one record per command
    #[must_use]
    pub fn from_result_set(set: ResultSet) -> Vec<Self> {
        set.into_iter()
            .map(|(command, data)| Self::from_entry(&command, data))
            .collect()
    }

    /// Coverage for one file
    #[must_use]
    pub fn file(&self, path: &str) -> Option<&FileCoverage> {
        self.coverage.get(path)
    }

    /// Run data for this record's result-set entry
    #[must_use]
    pub fn run_data(&self) -> RunData {
        RunData {
            coverage: self.coverage.clone(),
            timestamp: self.timestamp,
        }
    }

    /// Single-entry result set for serialization
    #[must_use]
    pub fn to_result_set(&self) -> ResultSet {
        let mut set = ResultSet::new();
        let _ = set.insert(self.command_name.clone(), self.run_data());
        set
    }
}
