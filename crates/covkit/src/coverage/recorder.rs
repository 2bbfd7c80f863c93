//! Recording sessions
//!
//! A session is started from an explicit [`RecordingSettings`] value and
//! owns everything it records; no process-wide coverage state exists.

use super::file::FileCoverage;
use super::lines::BranchHits;
use super::record::{CoverageRecord, FileMap, ResultSet};
use super::resultset::{read_result_set, write_json_atomic};
use super::summary::CoverageSummary;
use crate::result::{CovkitError, CovkitResult};
use crate::settings::{Formatter, RecordingSettings};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::PathBuf;

/// An active coverage recording
#[derive(Debug)]
pub struct RecordingSession {
    settings: RecordingSettings,
    started_at: DateTime<Utc>,
    coverage: FileMap,
}

impl RecordingSession {
    /// Start recording with `settings`
    #[must_use]
    pub fn start(settings: RecordingSettings) -> Self {
        tracing::info!(
            command = %settings.command_name,
            coverage_dir = %settings.coverage_dir.display(),
            filters = settings.filters.len(),
            "coverage recording started"
        );
        Self {
            settings,
            started_at: Utc::now(),
            coverage: FileMap::new(),
        }
    }

    /// Settings this session was started with
    #[must_use]
    pub fn settings(&self) -> &RecordingSettings {
        &self.settings
    }

    /// When recording started
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Files recorded so far, before filtering
    #[must_use]
    pub fn files(&self) -> &FileMap {
        &self.coverage
    }

    /// Record coverage for `path`, combining with earlier data for it
    pub fn record(&mut self, path: impl Into<String>, coverage: FileCoverage) -> CovkitResult<()> {
        let path = path.into();
        match self.coverage.get_mut(&path) {
            Some(existing) => *existing = existing.combine(&coverage, &path)?,
            None => {
                let _ = self.coverage.insert(path, coverage);
            }
        }
        Ok(())
    }

    /// Record raw line hits for `path`
    pub fn record_file(
        &mut self,
        path: impl Into<String>,
        hits: Vec<Option<u64>>,
    ) -> CovkitResult<()> {
        self.record(path, FileCoverage::lines(hits))
    }

    /// Record line hits together with branch hits for `path`
    pub fn record_branches(
        &mut self,
        path: impl Into<String>,
        hits: Vec<Option<u64>>,
        branches: BranchHits,
    ) -> CovkitResult<()> {
        self.record(path, FileCoverage::with_branches(hits, branches))
    }

    /// Where [`finish`](Self::finish) writes the result set
    #[must_use]
    pub fn result_set_path(&self) -> PathBuf {
        self.settings.result_set_path()
    }

    /// Stop recording and store the filtered result.
    ///
    /// Entries for other commands already in the result set are kept; an
    /// entry with this session's command name is replaced.
    pub fn finish(self) -> CovkitResult<CoverageRecord> {
        let Self {
            settings,
            started_at,
            coverage,
        } = self;

        let total = coverage.len();
        let kept: FileMap = coverage
            .into_iter()
            .filter(|(path, _)| !settings.excludes(path))
            .collect();
        if kept.len() < total {
            tracing::warn!(
                dropped = total - kept.len(),
                kept = kept.len(),
                "files excluded by source filters"
            );
        }

        let record = CoverageRecord::new(
            settings.command_name.clone(),
            kept,
            started_at.timestamp(),
        );

        fs::create_dir_all(&settings.coverage_dir)?;
        let mut stored = load_stored(&settings)?;
        let _ = stored.insert(record.command_name.clone(), record.run_data());
        write_json_atomic(&settings.result_set_path(), &stored)?;

        if settings.formatters.contains(&Formatter::Console) {
            let summary = CoverageSummary::from_record(&record);
            tracing::info!(
                command = %record.command_name,
                files = summary.files,
                covered = summary.covered_lines,
                relevant = summary.relevant_lines,
                percent = summary.covered_percent,
                "coverage summary"
            );
        }

        tracing::info!(
            path = %settings.result_set_path().display(),
            commands = stored.len(),
            "coverage recording stored"
        );
        Ok(record)
    }
}

/// Result set already in the coverage directory.
///
/// A missing or unreadable file starts a fresh set.
fn load_stored(settings: &RecordingSettings) -> CovkitResult<ResultSet> {
    match read_result_set(&settings.coverage_dir) {
        Ok(set) => Ok(set),
        Err(CovkitError::ResultSetMissing { .. }) => Ok(ResultSet::new()),
        Err(CovkitError::Json(e)) => {
            tracing::warn!(error = %e, "discarding unreadable result set");
            Ok(ResultSet::new())
        }
        Err(e) => Err(e),
    }
}
