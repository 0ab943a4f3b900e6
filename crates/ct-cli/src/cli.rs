//! CLI argument definitions for the terminology lookup tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cdisc-ct",
    version,
    about = "CDISC Controlled Terminology lookup",
    long_about = "Look up a Controlled Terminology codelist and its term values\n\
                  from the CDISC Library. Resolves the latest published package\n\
                  version when none is given."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Look up a codelist and report its term values.
    Lookup(LookupArgs),

    /// List the supported terminology standards.
    Standards,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Codelist key to filter on (submission id or NCI code, per --by).
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Which codelist field the key matches against.
    #[arg(long = "by", value_enum, default_value = "id")]
    pub by: KeyKindArg,

    /// Terminology standard to query.
    #[arg(long = "standard", value_name = "NAME", default_value = "SDTM")]
    pub standard: String,

    /// Package version (YYYY-MM-DD). Defaults to the latest published.
    #[arg(long = "ct-version", value_name = "YYYY-MM-DD")]
    pub ct_version: Option<String>,

    /// Directory for the generated CSV tables (default: a temp location).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// CDISC Library API key (falls back to the CDISC_API_KEY env var).
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Override the CDISC Library API root.
    #[arg(long = "base-url", value_name = "URL", hide = true)]
    pub base_url: Option<String>,
}

/// Which merged-row field the lookup key matches against.
#[derive(Clone, Copy, ValueEnum)]
pub enum KeyKindArg {
    /// Codelist submission id (e.g. AGEU).
    Id,
    /// Codelist NCI concept code (e.g. C66781).
    CodelistCode,
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
