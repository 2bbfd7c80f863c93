//! Recording settings
//!
//! Everything a recording session needs is carried in [`RecordingSettings`]
//! and handed to [`RecordingSession::start`](crate::coverage::RecordingSession::start).

mod analysis;
mod configurator;
mod filter;

pub use analysis::AnalysisConfig;
pub use configurator::Configurator;
pub use filter::SourceFilter;

use crate::coverage::result_set_path;
use crate::env::{EnvSource, COVERAGE_FLAG_VAR};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Coverage directory used when none is configured
pub const DEFAULT_COVERAGE_DIR: &str = "coverage";
/// Command name used when none is configured
pub const DEFAULT_COMMAND_NAME: &str = "Unit Tests";

/// Report formatter the engine hands the result to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Formatter {
    /// rcov-compatible output for third-party report plugins
    Rcov,
    /// Summary line on the console
    Console,
}

/// Explicit configuration for one recording session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordingSettings {
    /// Project root
    pub root: PathBuf,
    /// Directory the result set is written to
    pub coverage_dir: PathBuf,
    /// Command name the run is recorded under
    pub command_name: String,
    /// Formatters the result is handed to
    pub formatters: Vec<Formatter>,
    /// Exclusion filters applied when the session finishes
    pub filters: Vec<SourceFilter>,
}

impl RecordingSettings {
    /// Default settings rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            coverage_dir: root.join(DEFAULT_COVERAGE_DIR),
            command_name: DEFAULT_COMMAND_NAME.to_string(),
            formatters: vec![Formatter::Rcov],
            filters: vec![SourceFilter::OutsideRoot(root.clone())],
            root,
        }
    }

    /// Default settings for a test run started with `COVERAGE=on`
    #[must_use]
    pub fn from_coverage_flag(env: &impl EnvSource, root: &Path) -> Option<Self> {
        if env.var(COVERAGE_FLAG_VAR).as_deref() != Some("on") {
            return None;
        }
        Some(Self::test_run(root))
    }

    /// Default settings for a plain test run, with a console summary
    #[must_use]
    pub fn test_run(root: impl Into<PathBuf>) -> Self {
        Self::new(root).with_formatters(vec![Formatter::Rcov, Formatter::Console])
    }

    /// Set the coverage directory, relative paths resolve against the root
    #[must_use]
    pub fn with_coverage_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.coverage_dir = self.root.join(dir);
        self
    }

    /// Set the command name
    #[must_use]
    pub fn with_command_name(mut self, name: impl Into<String>) -> Self {
        self.command_name = name.into();
        self
    }

    /// Replace the formatters
    #[must_use]
    pub fn with_formatters(mut self, formatters: Vec<Formatter>) -> Self {
        self.formatters = formatters;
        self
    }

    /// Remove every filter, including the defaults
    #[must_use]
    pub fn clear_filters(mut self) -> Self {
        self.filters.clear();
        self
    }

    /// Add an exclusion filter
    #[must_use]
    pub fn with_filter(mut self, filter: SourceFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Whether any filter drops `path`
    #[must_use]
    pub fn excludes(&self, path: &str) -> bool {
        self.filters.iter().any(|f| f.excludes(path))
    }

    /// Result-set file inside the coverage directory
    #[must_use]
    pub fn result_set_path(&self) -> PathBuf {
        result_set_path(&self.coverage_dir)
    }
}
