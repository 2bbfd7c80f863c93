//! Coverage result sets
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  test process (one per run)          merge step (afterwards)    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  RecordingSettings → RecordingSession → <dir>/.resultset.json   │
//! │                                              ↓                  │
//! │               ResultMerger (dir₁ … dirₙ) → results.json         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Hit counts combine per line. A line nobody hit stays non-executable if
//! any run reported it that way.

mod file;
mod lines;
mod merger;
mod record;
mod recorder;
mod resultset;
mod summary;

pub use file::{DetailedCoverage, FileCoverage};
pub use lines::{combine_branches, combine_line, BranchHits, LineHits};
pub use merger::{merge_records, write_merged, ResultMerger, DEFAULT_OUTPUT};
pub use record::{CoverageRecord, FileMap, ResultSet, RunData};
pub use recorder::RecordingSession;
pub use resultset::{read_result_set, result_set_path, write_json_atomic, RESULTSET_FILE};
pub use summary::CoverageSummary;
