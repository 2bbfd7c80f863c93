//! Covkit: coverage recording settings and result-set merging
//!
//! Instrumented test runs each leave a `.resultset.json` in their own
//! coverage directory. Covkit resolves the settings those runs record with
//! and merges their result sets into a single `results.json`.
//!
//! ```no_run
//! use covkit::coverage::ResultMerger;
//! use std::path::Path;
//!
//! let merged = ResultMerger::run(&["coverage/unit", "coverage/integration"], Path::new("results.json"))?;
//! println!("merged {}", merged.command_name);
//! # Ok::<(), covkit::CovkitError>(())
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod coverage;
pub mod env;
pub mod greeting;
mod result;
pub mod settings;

pub use coverage::{
    merge_records, CoverageRecord, CoverageSummary, FileCoverage, LineHits, RecordingSession,
    ResultMerger, ResultSet,
};
pub use env::{EnvSource, ProcessEnv};
pub use result::{CovkitError, CovkitResult};
pub use settings::{AnalysisConfig, Configurator, Formatter, RecordingSettings, SourceFilter};
