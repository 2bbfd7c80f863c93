//! Source filters
//!
//! A filter decides whether a file's coverage is dropped when a recording
//! session finishes.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Exclusion rule applied to recorded file paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SourceFilter {
    /// Drop files that do not live under the project root
    OutsideRoot(PathBuf),
    /// Drop files whose path does not contain the project folder name
    OutsideProjectFolder(String),
}

impl SourceFilter {
    /// Whether `path` is excluded by this filter
    #[must_use]
    pub fn excludes(&self, path: &str) -> bool {
        match self {
            Self::OutsideRoot(root) => !Path::new(path).starts_with(root),
            Self::OutsideProjectFolder(folder) => !path.contains(folder.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_root() {
        let filter = SourceFilter::OutsideRoot(PathBuf::from("/work/app"));
        assert!(!filter.excludes("/work/app/lib/a.rb"));
        assert!(filter.excludes("/usr/lib/ruby/gems/json.rb"));
        // Component-wise, not a string prefix
        assert!(filter.excludes("/work/application/a.rb"));
    }

    #[test]
    fn test_outside_project_folder() {
        let filter = SourceFilter::OutsideProjectFolder("ruby-test-repo".to_string());
        assert!(!filter.excludes("/ci/checkout/ruby-test-repo/a.rb"));
        assert!(filter.excludes("/ci/checkout/vendor/bundle/simplecov.rb"));
    }

    #[test]
    fn test_serialize_tagged() {
        let filter = SourceFilter::OutsideProjectFolder("app".to_string());
        let json = serde_json::to_string(&filter).unwrap_or_default();
        assert_eq!(json, r#"{"kind":"outside_project_folder","value":"app"}"#);
    }
}
