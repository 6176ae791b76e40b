//! CLI argument definitions for the duplicate checker.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bpdup",
    version,
    about = "BP Duplicate Checker - find likely duplicate Business Partner names",
    long_about = "Find likely duplicate records in a Business Partner list.\n\n\
                  Names are compared with a weighted fuzzy score (token sort, token set\n\
                  and edit-distance ratio) after removing honorifics and legal forms."
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

    /// Include partner names in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a Business Partner CSV file for likely duplicates.
    Check(CheckArgs),

    /// Score two names against each other and explain the result.
    Score(ScoreArgs),

    /// Write a demonstration input file.
    Example(ExampleArgs),

    /// Print the default settings file.
    Settings,
}

/// Options shared by every command that normalizes names.
#[derive(Args)]
pub struct NameArgs {
    /// Settings file (TOML). Command-line options override its values.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Additional word to ignore when comparing names (repeatable).
    #[arg(long = "ignore-word", value_name = "WORD")]
    pub ignore_words: Vec<String>,

    /// File with words to ignore, one per line or comma separated.
    #[arg(long = "ignore-words-file", value_name = "PATH")]
    pub ignore_words_file: Option<PathBuf>,

    /// Do not start from the built-in honorific and legal-form list.
    #[arg(long = "no-default-ignore-words")]
    pub no_default_ignore_words: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// CSV file with BP_Number, Name1 and Name2 columns.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub names: NameArgs,

    /// Minimum similarity score (0-100) for a pair to be reported.
    #[arg(long = "min-score", value_name = "SCORE")]
    pub min_score: Option<f64>,

    /// Partners listed per record in the ranked export.
    #[arg(long = "top-n", value_name = "N")]
    pub top_n: Option<usize>,

    /// How to treat two names that are both empty after normalization.
    #[arg(long = "empty-names", value_enum)]
    pub empty_names: Option<EmptyNamesArg>,

    /// Compare on a single thread.
    #[arg(long = "sequential")]
    pub sequential: bool,

    /// Write results to this file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Layout of the results file.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ExportFormatArg,

    /// Write the summary sheet to this CSV file.
    #[arg(long = "summary-output", value_name = "PATH")]
    pub summary_output: Option<PathBuf>,

    /// Candidate pairs shown in the terminal.
    #[arg(long = "limit", value_name = "N", default_value_t = 20)]
    pub limit: usize,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// First name.
    pub first: String,

    /// Second name.
    pub second: String,

    #[command(flatten)]
    pub names: NameArgs,
}

#[derive(Args)]
pub struct ExampleArgs {
    /// Path of the CSV file to create.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    /// One row per candidate pair.
    Csv,
    /// One row per record and ranked partner.
    Ranked,
    /// Summary, pairs and skipped records as JSON.
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EmptyNamesArg {
    Exclude,
    Compare,
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
