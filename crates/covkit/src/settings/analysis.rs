//! YAML analysis configuration

use crate::result::{CovkitError, CovkitResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Keys read from the file named by `RUBY_COVERAGE_CONFIG`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Directory the result set is written to
    pub report_directory: String,
    /// Command name recorded for the run
    pub analysis_name: String,
    /// Substring a file path must contain to be kept
    pub project_folder_name: String,
}

impl AnalysisConfig {
    /// Load and parse a YAML config file
    pub fn load(path: &Path) -> CovkitResult<Self> {
        let yaml = fs::read_to_string(path)?;
        Self::parse(&yaml, path)
    }

    /// Parse YAML text; `origin` is only used in error messages
    pub fn parse(yaml: &str, origin: &Path) -> CovkitResult<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| CovkitError::yaml(origin, e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
report_directory: coverage/unit
analysis_name: Unit Tests
project_folder_name: ruby-test-repo
";

    #[test]
    fn test_parse_all_keys() {
        let config = AnalysisConfig::parse(SAMPLE, Path::new("cov.yml")).unwrap();
        assert_eq!(config.report_directory, "coverage/unit");
        assert_eq!(config.analysis_name, "Unit Tests");
        assert_eq!(config.project_folder_name, "ruby-test-repo");
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let yaml = format!("{SAMPLE}sonar_key: demo\n");
        assert!(AnalysisConfig::parse(&yaml, Path::new("cov.yml")).is_ok());
    }

    #[test]
    fn test_parse_missing_key() {
        let yaml = "report_directory: coverage\nanalysis_name: x\n";
        let err = AnalysisConfig::parse(yaml, Path::new("cov.yml")).unwrap_err();
        assert!(matches!(err, CovkitError::Yaml { .. }));
        assert!(err.to_string().contains("project_folder_name"));
    }

    #[test]
    fn test_parse_malformed() {
        let err = AnalysisConfig::parse("report_directory: [unclosed", Path::new("bad.yml"))
            .unwrap_err();
        assert!(err.to_string().contains("bad.yml"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = AnalysisConfig::load(Path::new("/nonexistent/covkit.yml")).unwrap_err();
        assert!(matches!(err, CovkitError::Io(_)));
    }
}
