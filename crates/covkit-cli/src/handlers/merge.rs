//! Merge command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::ProgressReporter;
use crate::MergeArgs;
use covkit::coverage::{write_merged, CoverageRecord, CoverageSummary, ResultMerger};

/// Execute the merge command
pub fn execute_merge(config: &CliConfig, args: &MergeArgs) -> CliResult<CoverageRecord> {
    let mut reporter =
        ProgressReporter::new(config.color.should_color(), config.verbosity.is_quiet());

    reporter.start_progress(args.dirs.len() as u64, "Reading result sets");
    let mut merger = ResultMerger::new();
    for dir in &args.dirs {
        let shown = dir.display().to_string();
        match merger.add_dir(dir) {
            Ok(added) => {
                reporter.advance(&shown);
                if config.verbosity.is_verbose() {
                    reporter.info(&format!("{shown}: {added} record(s)"));
                }
            }
            Err(e) => {
                reporter.finish();
                reporter.failure(&format!("Could not read {shown}"));
                return Err(e.into());
            }
        }
    }
    reporter.finish();

    let merged = merger.merge().map_err(|e| {
        reporter.failure("Result sets could not be merged");
        e
    })?;
    tracing::debug!(
        command_name = %merged.command_name,
        files = merged.coverage.len(),
        "merged records"
    );
    write_merged(&merged, &args.output)?;

    reporter.success(&format!(
        "Merged {} records from {} directories into {}",
        merger.records().len(),
        args.dirs.len(),
        args.output.display()
    ));
    reporter.coverage_summary(&CoverageSummary::from_record(&merged));

    Ok(merged)
}
