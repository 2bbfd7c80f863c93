//! Environment lookup
//!
//! Configuration reads go through [`EnvSource`] so callers can hand in a
//! snapshot instead of the live process environment.

use std::collections::HashMap;

/// Path to the YAML analysis configuration; enables the configurator
pub const COVERAGE_CONFIG_VAR: &str = "RUBY_COVERAGE_CONFIG";
/// Optional override for the recorded command name
pub const COVERAGE_NAME_VAR: &str = "RUBY_COVERAGE_NAME";
/// Set to `on` to record the plain test run with default settings
pub const COVERAGE_FLAG_VAR: &str = "COVERAGE";

/// Source of environment variables
pub trait EnvSource {
    /// Look up a variable, `None` when unset or not valid unicode
    fn var(&self, key: &str) -> Option<String>;
}

/// The live process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_source() {
        let mut env = HashMap::new();
        env.insert(COVERAGE_FLAG_VAR.to_string(), "on".to_string());
        assert_eq!(env.var(COVERAGE_FLAG_VAR).as_deref(), Some("on"));
        assert_eq!(env.var(COVERAGE_CONFIG_VAR), None);
    }

    #[test]
    fn test_process_env_unset() {
        assert_eq!(ProcessEnv.var("COVKIT_TEST_SURELY_UNSET_VARIABLE"), None);
    }
}
