//! Config command handler

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use crate::ConfigArgs;
use covkit::{Configurator, Formatter, RecordingSettings, SourceFilter};
use serde::Serialize;
use std::fmt::Write;

/// Where the resolved settings came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsSource {
    /// `RUBY_COVERAGE_CONFIG` / `--config`
    ConfigFile,
    /// `COVERAGE=on`
    CoverageFlag,
    /// Recording is off
    Disabled,
}

/// Settings as resolved for display
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSettings {
    /// Source of the settings
    pub source: SettingsSource,
    /// The settings, absent when recording is off
    pub settings: Option<RecordingSettings>,
}

/// Execute the config command
pub fn execute_config(args: &ConfigArgs) -> CliResult<()> {
    let resolved = resolve_settings(args)?;
    let rendered = match OutputFormat::from(args.format) {
        OutputFormat::Text => render_settings_text(&resolved),
        OutputFormat::Json => render_settings_json(&resolved)?,
    };
    println!("{rendered}");
    Ok(())
}

/// Resolve settings the way an instrumented process would
pub fn resolve_settings(args: &ConfigArgs) -> CliResult<ResolvedSettings> {
    let root = match args.root {
        Some(ref root) => root.clone(),
        None => std::env::current_dir()?,
    };

    if let Some(ref path) = args.config {
        let settings = Configurator::configure(path, args.name.as_deref(), &root)?;
        return Ok(ResolvedSettings {
            source: SettingsSource::ConfigFile,
            settings: Some(settings),
        });
    }

    if args.coverage {
        return Ok(ResolvedSettings {
            source: SettingsSource::CoverageFlag,
            settings: Some(RecordingSettings::test_run(root)),
        });
    }

    Ok(ResolvedSettings {
        source: SettingsSource::Disabled,
        settings: None,
    })
}

/// Render resolved settings as JSON
pub fn render_settings_json(resolved: &ResolvedSettings) -> CliResult<String> {
    serde_json::to_string_pretty(resolved).map_err(|e| CliError::report_generation(e.to_string()))
}

/// Render resolved settings as text
#[must_use]
pub fn render_settings_text(resolved: &ResolvedSettings) -> String {
    let Some(ref settings) = resolved.settings else {
        return "Coverage recording disabled (set RUBY_COVERAGE_CONFIG or COVERAGE=on)"
            .to_string();
    };

    let mut out = String::new();
    let source = match resolved.source {
        SettingsSource::ConfigFile => "config file",
        SettingsSource::CoverageFlag => "COVERAGE=on",
        SettingsSource::Disabled => "disabled",
    };
    let _ = writeln!(out, "Recording settings ({source}):");
    let _ = writeln!(out, "  Root: {}", settings.root.display());
    let _ = writeln!(out, "  Coverage dir: {}", settings.coverage_dir.display());
    let _ = writeln!(out, "  Command name: {}", settings.command_name);
    let formatters: Vec<&str> = settings.formatters.iter().map(|f| formatter_name(*f)).collect();
    let _ = writeln!(out, "  Formatters: {}", formatters.join(", "));
    let _ = write!(out, "  Filters:");
    if settings.filters.is_empty() {
        let _ = write!(out, " none");
    }
    for filter in &settings.filters {
        let _ = write!(out, "\n    - {}", describe_filter(filter));
    }
    out
}

const fn formatter_name(formatter: Formatter) -> &'static str {
    match formatter {
        Formatter::Rcov => "rcov",
        Formatter::Console => "console",
    }
}

fn describe_filter(filter: &SourceFilter) -> String {
    match filter {
        SourceFilter::OutsideRoot(root) => format!("exclude files outside {}", root.display()),
        SourceFilter::OutsideProjectFolder(folder) => {
            format!("exclude files whose path lacks \"{folder}\"")
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::FormatArg;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn args(config: Option<PathBuf>, coverage: bool, root: &Path) -> ConfigArgs {
        ConfigArgs {
            config,
            name: None,
            coverage,
            root: Some(root.to_path_buf()),
            format: FormatArg::Text,
        }
    }

    #[test]
    fn test_resolve_disabled() {
        let temp = TempDir::new().unwrap();
        let resolved = resolve_settings(&args(None, false, temp.path())).unwrap();
        assert_eq!(resolved.source, SettingsSource::Disabled);
        assert!(resolved.settings.is_none());
        assert!(render_settings_text(&resolved).contains("disabled"));
    }

    #[test]
    fn test_resolve_coverage_flag() {
        let temp = TempDir::new().unwrap();
        let resolved = resolve_settings(&args(None, true, temp.path())).unwrap();
        assert_eq!(resolved.source, SettingsSource::CoverageFlag);
        let text = render_settings_text(&resolved);
        assert!(text.contains("rcov, console"));
        assert!(text.contains("Unit Tests"));
    }

    #[test]
    fn test_resolve_config_file_with_name() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("coverage.yml");
        fs::write(
            &path,
            "report_directory: out\nanalysis_name: Unit\nproject_folder_name: demo-repo\n",
        )
        .unwrap();

        let mut args = args(Some(path), true, temp.path());
        args.name = Some("Nightly".to_string());
        let resolved = resolve_settings(&args).unwrap();
        assert_eq!(resolved.source, SettingsSource::ConfigFile);

        let settings = resolved.settings.as_ref().unwrap();
        assert_eq!(settings.command_name, "Nightly");
        assert_eq!(settings.coverage_dir, temp.path().join("out"));

        let text = render_settings_text(&resolved);
        assert!(text.contains("lacks \"demo-repo\""));
        assert!(!text.contains("outside"));
    }

    #[test]
    fn test_resolve_missing_config_file() {
        let temp = TempDir::new().unwrap();
        let args = args(Some(temp.path().join("nope.yml")), false, temp.path());
        assert!(resolve_settings(&args).is_err());
    }

    #[test]
    fn test_render_json() {
        let temp = TempDir::new().unwrap();
        let resolved = resolve_settings(&args(None, true, temp.path())).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render_settings_json(&resolved).unwrap()).unwrap();
        assert_eq!(json["source"], "coverage_flag");
        assert_eq!(json["settings"]["formatters"], serde_json::json!(["rcov", "console"]));
        assert_eq!(json["settings"]["filters"][0]["kind"], "outside_root");
    }
}
