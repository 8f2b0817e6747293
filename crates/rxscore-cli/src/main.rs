//! `rxscore` operator CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use rxscore_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    render_document, run_check, run_derive, run_extract, run_schema, run_validate,
};
use crate::summary::{
    print_check_summary, print_derive_summary, print_extract_summary, print_schema,
    print_validate_summary,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli.command) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: &Command) -> anyhow::Result<i32> {
    match command {
        Command::Extract(args) => {
            print_extract_summary(&run_extract(args)?);
            Ok(0)
        }
        Command::Derive(args) => {
            let result = run_derive(args)?;
            if args.dry_run {
                print!("{}", render_document(&result)?);
            } else {
                print_derive_summary(&result);
            }
            Ok(0)
        }
        Command::Check(args) => {
            let result = run_check(args)?;
            print_check_summary(&result);
            Ok(i32::from(result.has_rejections()))
        }
        Command::Validate(args) => {
            let result = run_validate(args)?;
            print_validate_summary(&result);
            Ok(i32::from(result.report.has_errors()))
        }
        Command::Schema(args) => {
            let registry = run_schema(args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(registry.config())?);
            } else {
                print_schema(&registry);
            }
            Ok(0)
        }
    }
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
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
