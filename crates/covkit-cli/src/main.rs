//! Covkit CLI: merge coverage result sets
//!
//! ## Usage
//!
//! ```bash
//! covkit merge coverage/unit coverage/integration   # writes ./results.json
//! covkit merge -o merged.json run1 run2
//! RUBY_COVERAGE_CONFIG=coverage.yml covkit config   # show resolved settings
//! ```

use clap::Parser;
use covkit_cli::{handlers, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init_tracing(config.verbosity, config.color.should_color());

    match cli.command {
        Commands::Merge(args) => handlers::execute_merge(&config, &args).map(|_| ()),
        Commands::Config(args) => handlers::execute_config(&args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();
    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
