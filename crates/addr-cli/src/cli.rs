//! CLI argument definitions for the address pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "addr-pipeline",
    version,
    about = "Canonicalize civic addresses from partitioned CSV exports",
    long_about = "Load per-postal-code address partitions, apply ordered cleanup rules,\n\
                  validate component fields, and emit one canonical address string per\n\
                  row by re-parsing the assembled address lines."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the batch pipeline over the configured partitions.
    Run(RunArgs),

    /// Canonicalize a single assembled address string.
    Normalize(NormalizeArgs),

    /// List the cleanup rules of a run configuration in order.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the run configuration file (JSON).
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override the partition directory from the configuration.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output CSV path (default: <data-dir>/canonical_addresses.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Run the pipeline and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Assembled address text, e.g. "22959 E SMOKY HILL RD, BLDG E APT E101".
    #[arg(value_name = "ADDRESS")]
    pub address: String,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Path to the run configuration file (JSON).
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
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
