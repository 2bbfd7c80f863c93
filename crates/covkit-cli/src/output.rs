//! Output formatting and progress reporting

use console::{Style, Term};
use covkit::CoverageSummary;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

#[derive(Debug, Clone, Copy)]
enum Status {
    Success,
    Failure,
    Info,
}

impl Status {
    fn prefix(self, use_color: bool) -> String {
        let (symbol, plain, style) = match self {
            Self::Success => ("✓", "OK", Style::new().green().bold()),
            Self::Failure => ("✗", "FAIL", Style::new().red().bold()),
            Self::Info => ("ℹ", "INFO", Style::new().blue().bold()),
        };
        if use_color {
            style.apply_to(symbol).to_string()
        } else {
            plain.to_string()
        }
    }
}

/// Status reporter for merge runs, writing to stderr
#[derive(Debug)]
pub struct ProgressReporter {
    term: Term,
    bar: Option<ProgressBar>,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode; failures are still reported
    pub quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            bar: None,
            use_color,
            quiet,
        }
    }

    /// Show a bar over `dirs` result directories
    pub fn start_progress(&mut self, dirs: u64, message: &str) {
        if self.quiet {
            return;
        }

        let style = ProgressStyle::with_template("{spinner:.green} {pos}/{len} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        let bar = ProgressBar::new(dirs).with_style(style);
        bar.set_message(message.to_string());
        self.bar = Some(bar);
    }

    /// Mark one directory as read
    pub fn advance(&self, dir: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(dir.to_string());
            bar.inc(1);
        }
    }

    /// Clear the bar
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    /// Print a success line
    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.emit(Status::Success, message);
        }
    }

    /// Print a failure line, even in quiet mode
    pub fn failure(&self, message: &str) {
        self.emit(Status::Failure, message);
    }

    /// Print an info line
    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.emit(Status::Info, message);
        }
    }

    /// Print a line coverage summary
    pub fn coverage_summary(&self, summary: &CoverageSummary) {
        if self.quiet {
            return;
        }

        let percent = format!("{:.2}%", summary.covered_percent);
        let percent = if self.use_color {
            percent_style(summary.covered_percent).apply_to(percent).to_string()
        } else {
            percent
        };

        self.write(&format!(
            "{} / {} lines covered ({percent}) across {} files, {} hits",
            summary.covered_lines, summary.relevant_lines, summary.files, summary.total_hits
        ));
    }

    fn emit(&self, status: Status, message: &str) {
        self.write(&format!("{} {message}", status.prefix(self.use_color)));
    }

    // Lines printed while the bar is drawn go above it
    fn write(&self, line: &str) {
        match self.bar {
            Some(ref bar) if !bar.is_hidden() => bar.println(line),
            _ => {
                let _ = self.term.write_line(line);
            }
        }
    }
}

fn percent_style(percent: f64) -> Style {
    if percent >= 90.0 {
        Style::new().green().bold()
    } else if percent >= 75.0 {
        Style::new().yellow().bold()
    } else {
        Style::new().red().bold()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn summary(covered_percent: f64) -> CoverageSummary {
        CoverageSummary {
            files: 1,
            relevant_lines: 4,
            covered_lines: 3,
            total_hits: 9,
            covered_percent,
        }
    }

    #[test]
    fn test_default_format() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_plain_prefixes() {
        assert_eq!(Status::Success.prefix(false), "OK");
        assert_eq!(Status::Failure.prefix(false), "FAIL");
        assert_eq!(Status::Info.prefix(false), "INFO");
    }

    #[test]
    fn test_colored_prefix_keeps_symbol() {
        assert!(Status::Failure.prefix(true).contains('✗'));
    }

    #[test]
    fn test_percent_bands() {
        assert_eq!(percent_style(95.0), Style::new().green().bold());
        assert_eq!(percent_style(80.0), Style::new().yellow().bold());
        assert_eq!(percent_style(10.0), Style::new().red().bold());
    }

    #[test]
    fn test_progress_lifecycle() {
        let mut reporter = ProgressReporter::new(false, false);
        reporter.start_progress(2, "Reading result sets");
        reporter.advance("a");
        reporter.info("a: 1 record");
        reporter.advance("b");
        reporter.finish();
        assert!(reporter.bar.is_none());
        reporter.coverage_summary(&summary(75.0));
    }

    #[test]
    fn test_quiet_mode_skips_bar() {
        let mut reporter = ProgressReporter::new(false, true);
        reporter.start_progress(10, "hidden");
        assert!(reporter.bar.is_none());
        reporter.success("hidden");
        reporter.failure("shown");
    }
}
