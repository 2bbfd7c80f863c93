//! Line coverage summary statistics

use super::record::CoverageRecord;
use serde::{Deserialize, Serialize};

/// Totals across every file in a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    /// Number of files
    pub files: usize,
    /// Executable lines
    pub relevant_lines: usize,
    /// Executable lines hit at least once
    pub covered_lines: usize,
    /// Sum of all line hits
    pub total_hits: u64,
    /// Covered over relevant, as a percentage
    pub covered_percent: f64,
}

impl CoverageSummary {
    /// Summarize a record
    #[must_use]
    pub fn from_record(record: &CoverageRecord) -> Self {
        let mut relevant_lines = 0;
        let mut covered_lines = 0;
        let mut total_hits: u64 = 0;

        for file in record.coverage.values() {
            let lines = file.line_hits();
            relevant_lines += lines.relevant();
            covered_lines += lines.covered();
            total_hits = total_hits.saturating_add(lines.total_hits());
        }

        // Nothing executable counts as fully covered
        let covered_percent = if relevant_lines == 0 {
            100.0
        } else {
            covered_lines as f64 / relevant_lines as f64 * 100.0
        };

        Self {
            files: record.coverage.len(),
            relevant_lines,
            covered_lines,
            total_hits,
            covered_percent,
        }
    }

    /// Lines that are executable but never hit
    #[must_use]
    pub const fn missed_lines(&self) -> usize {
        self.relevant_lines.saturating_sub(self.covered_lines)
    }
}
