//! Result Merger
//!
//! Collects the records from several coverage directories and folds them
//! into one. Merging applies no source filters; filtering happens while
//! recording.
//!
//! All runs must have finished writing their result sets before the merge
//! starts. Nothing here waits for them.

use super::record::{CoverageRecord, FileMap};
use super::resultset::{read_result_set, write_json_atomic};
use crate::result::{CovkitError, CovkitResult};
use std::path::Path;

/// Output file written by [`ResultMerger::run`] when no path is given
pub const DEFAULT_OUTPUT: &str = "results.json";

/// Merge records into one.
///
/// Hit counts are summed per file and line. The merged command name is the
/// sorted input names joined with `", "`, and the timestamp is the newest
/// input timestamp.
pub fn merge_records(records: &[CoverageRecord]) -> CovkitResult<CoverageRecord> {
    let (first, rest) = records.split_first().ok_or(CovkitError::NoInputs)?;

    let mut coverage = first.coverage.clone();
    for record in rest {
        merge_into(&mut coverage, &record.coverage)?;
    }

    let mut names: Vec<&str> = records.iter().map(|r| r.command_name.as_str()).collect();
    names.sort_unstable();

    let timestamp = records
        .iter()
        .map(|r| r.timestamp)
        .max()
        .unwrap_or_default();

    Ok(CoverageRecord::new(names.join(", "), coverage, timestamp))
}

fn merge_into(acc: &mut FileMap, incoming: &FileMap) -> CovkitResult<()> {
    for (file, coverage) in incoming {
        match acc.get_mut(file) {
            Some(existing) => *existing = existing.combine(coverage, file)?,
            None => {
                let _ = acc.insert(file.clone(), coverage.clone());
            }
        }
    }
    Ok(())
}

/// Accumulates records from result directories
#[derive(Debug, Default)]
pub struct ResultMerger {
    records: Vec<CoverageRecord>,
}

impl ResultMerger {
    /// Create an empty merger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `<dir>/.resultset.json` and queue every command in it.
    ///
    /// Returns how many records the directory contributed.
    pub fn add_dir(&mut self, dir: &Path) -> CovkitResult<usize> {
        let set = read_result_set(dir)?;
        let records = CoverageRecord::from_result_set(set);
        for record in &records {
            tracing::debug!(
                dir = %dir.display(),
                command = %record.command_name,
                files = record.coverage.len(),
                "discovered record"
            );
        }

        let count = records.len();
        self.records.extend(records);
        Ok(count)
    }

    /// Queue an already parsed record
    pub fn add_record(&mut self, record: CoverageRecord) {
        self.records.push(record);
    }

    /// Records queued so far, in discovery order
    #[must_use]
    pub fn records(&self) -> &[CoverageRecord] {
        &self.records
    }

    /// Merge everything queued so far
    pub fn merge(&self) -> CovkitResult<CoverageRecord> {
        merge_records(&self.records)
    }

    /// Read every directory in order and merge the result
    pub fn merge_dirs<P: AsRef<Path>>(dirs: &[P]) -> CovkitResult<CoverageRecord> {
        if dirs.is_empty() {
            return Err(CovkitError::NoInputs);
        }

        let mut merger = Self::new();
        for dir in dirs {
            let _ = merger.add_dir(dir.as_ref())?;
        }
        merger.merge()
    }

    /// Merge `dirs` and write the merged result set to `output`.
    ///
    /// Nothing is written unless every directory was read and merged.
    pub fn run<P: AsRef<Path>>(dirs: &[P], output: &Path) -> CovkitResult<CoverageRecord> {
        let merged = Self::merge_dirs(dirs)?;
        write_merged(&merged, output)?;
        Ok(merged)
    }
}

/// Write a merged record as a pretty-printed result set
pub fn write_merged(merged: &CoverageRecord, output: &Path) -> CovkitResult<()> {
    write_json_atomic(output, &merged.to_result_set())?;
    tracing::info!(
        output = %output.display(),
        command = %merged.command_name,
        files = merged.coverage.len(),
        "merged coverage written"
    );
    Ok(())
}
