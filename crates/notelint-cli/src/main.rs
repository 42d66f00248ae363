//! notelint command line.

use clap::{ColorChoice, Parser};
use notelint_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, ConfigCommand, LogFormatArg, LogLevelArg};
use crate::commands::{
    Workspace, run_config_init, run_config_show, run_dir, run_file, run_inspect, run_vault,
};
use crate::summary::{print_errors, print_summary};
use crate::types::RunResult;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let workspace = || Workspace::load(&cli.vault, cli.config.as_deref());
    match &cli.command {
        Command::File(args) => Ok(finish(&run_file(&workspace()?, args)?)),
        Command::Dir(args) => Ok(finish(&run_dir(&workspace()?, args)?)),
        Command::Vault(args) => Ok(finish(&run_vault(&workspace()?, args)?)),
        Command::Inspect(args) => {
            run_inspect(args)?;
            Ok(0)
        }
        Command::Config(ConfigCommand::Show) => {
            run_config_show(&workspace()?)?;
            Ok(0)
        }
        Command::Config(ConfigCommand::Init(args)) => {
            let path = run_config_init(&workspace()?, args)?;
            println!("Wrote {}", path.display());
            Ok(0)
        }
    }
}

/// Print the run summary and map document failures to exit code 1.
fn finish(result: &RunResult) -> i32 {
    if result.show_summary {
        print_summary(result);
    } else {
        print_errors(&result.outcome);
    }
    if result.outcome.has_errors() { 1 } else { 0 }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
