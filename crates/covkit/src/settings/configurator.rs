//! Coverage Configurator
//!
//! Resolves the YAML analysis config plus environment overrides into
//! [`RecordingSettings`] and starts the session.

use super::{AnalysisConfig, Formatter, RecordingSettings, SourceFilter};
use crate::coverage::RecordingSession;
use crate::env::{EnvSource, COVERAGE_CONFIG_VAR, COVERAGE_NAME_VAR};
use crate::result::CovkitResult;
use std::path::Path;

/// Builds recording settings from an analysis config
#[derive(Debug, Clone, Copy, Default)]
pub struct Configurator;

impl Configurator {
    /// Resolve settings from a config file.
    ///
    /// `name_override` wins over the file's `analysis_name`. The default
    /// filters are replaced by a single project-folder filter.
    pub fn configure(
        config_path: &Path,
        name_override: Option<&str>,
        root: &Path,
    ) -> CovkitResult<RecordingSettings> {
        let config = AnalysisConfig::load(config_path)?;
        tracing::debug!(path = %config_path.display(), ?config, "loaded analysis config");

        let command_name = name_override.map_or(config.analysis_name, str::to_string);

        Ok(RecordingSettings::new(root)
            .with_coverage_dir(&config.report_directory)
            .with_command_name(command_name)
            .with_formatters(vec![Formatter::Rcov])
            .clear_filters()
            .with_filter(SourceFilter::OutsideProjectFolder(
                config.project_folder_name,
            )))
    }

    /// Resolve settings from `RUBY_COVERAGE_CONFIG` / `RUBY_COVERAGE_NAME`.
    ///
    /// Returns `Ok(None)` without touching the filesystem when the config
    /// variable is unset.
    pub fn from_env(env: &impl EnvSource, root: &Path) -> CovkitResult<Option<RecordingSettings>> {
        let Some(config_path) = env.var(COVERAGE_CONFIG_VAR) else {
            return Ok(None);
        };
        let name = env.var(COVERAGE_NAME_VAR);
        Self::configure(Path::new(&config_path), name.as_deref(), root).map(Some)
    }

    /// Start recording; must come after all other configuration
    #[must_use]
    pub fn start(settings: RecordingSettings) -> RecordingSession {
        RecordingSession::start(settings)
    }

    /// Resolve settings from the environment and start recording
    pub fn start_from_env(
        env: &impl EnvSource,
        root: &Path,
    ) -> CovkitResult<Option<RecordingSession>> {
        Ok(Self::from_env(env, root)?.map(Self::start))
    }
}
