//! CLI argument definitions for `rxscore`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rxscore",
    version,
    about = "Treatment outcome schema tooling",
    long_about = "Extract valid clinical combinations from raw training data, derive the \
                  shared schema configuration, and validate prediction requests and \
                  training tables against it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient identifiers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract valid (Condition, Drug_Name, Dosage_mg, Side_Effects) combinations.
    Extract(ExtractArgs),

    /// Derive the schema configuration from raw training data.
    Derive(DeriveArgs),

    /// Validate prediction requests (JSON or CSV) against the schema.
    Check(CheckArgs),

    /// Validate a raw training table against the schema.
    Validate(ValidateArgs),

    /// Show the loaded schema and its fingerprint.
    Schema(SchemaArgs),
}

/// Locations of the schema configuration and combination catalog.
#[derive(Args, Clone)]
pub struct SchemaSourceArgs {
    /// Schema configuration document (default: <root>/params.toml).
    #[arg(long = "params", value_name = "PATH")]
    pub params: Option<PathBuf>,

    /// Combination catalog (default: <root>/data/processed/valid_combinations.json).
    #[arg(long = "combinations", value_name = "PATH")]
    pub combinations: Option<PathBuf>,

    /// Fail instead of degrading when a schema source is missing or malformed.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Raw training CSV (default: <root>/data/raw/real_drug_dataset.csv).
    #[arg(long = "raw", value_name = "PATH")]
    pub raw: Option<PathBuf>,

    /// Output catalog (default: <root>/data/processed/valid_combinations.json).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct DeriveArgs {
    /// Raw training CSV (default: <root>/data/raw/real_drug_dataset.csv).
    #[arg(long = "raw", value_name = "PATH")]
    pub raw: Option<PathBuf>,

    /// Output document; `.json` writes JSON, anything else TOML.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the document instead of writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Request file: a JSON object, a JSON array, or a CSV with a header row.
    #[arg(value_name = "REQUESTS")]
    pub requests: PathBuf,

    #[command(flatten)]
    pub schema: SchemaSourceArgs,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Raw training CSV (default: <root>/data/raw/real_drug_dataset.csv).
    #[arg(long = "raw", value_name = "PATH")]
    pub raw: Option<PathBuf>,

    #[command(flatten)]
    pub schema: SchemaSourceArgs,
}

#[derive(Parser)]
pub struct SchemaArgs {
    #[command(flatten)]
    pub schema: SchemaSourceArgs,

    /// Print the schema as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
