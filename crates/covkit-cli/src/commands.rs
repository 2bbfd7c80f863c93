//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Covkit: merge coverage result sets from separate test runs
#[derive(Parser, Debug)]
#[command(name = "covkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge .resultset.json files from several coverage directories
    ///
    /// Every run must have finished writing its result set before the
    /// merge starts.
    Merge(MergeArgs),

    /// Show the recording settings resolved from the environment
    Config(ConfigArgs),
}

/// Arguments for the merge command
#[derive(Parser, Debug)]
pub struct MergeArgs {
    /// Coverage directories, each containing a .resultset.json
    #[arg(required = true, num_args = 1..)]
    pub dirs: Vec<PathBuf>,

    /// Merged output file
    #[arg(short, long, default_value = covkit::coverage::DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// YAML analysis configuration
    #[arg(long, env = "RUBY_COVERAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the recorded command name
    #[arg(long, env = "RUBY_COVERAGE_NAME")]
    pub name: Option<String>,

    /// Record with default settings when no config file is given (COVERAGE=on)
    #[arg(
        long,
        env = "COVERAGE",
        action = clap::ArgAction::Set,
        value_parser = parse_coverage_flag,
        default_value = "off"
    )]
    pub coverage: bool,

    /// Project root (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,
}

fn parse_coverage_flag(value: &str) -> Result<bool, String> {
    Ok(value == "on")
}

/// Output format for the config command
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
