//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vizfit",
    version,
    about = "Decide which chart families a dataset can be shown with",
    long_about = "Profile JSON, GeoJSON or CSV datasets, given as files or inline \
                  text, and match them against a catalog of chart requirement specs.\n\n\
                  The catalog defaults to the bundled charts; use --catalog or \
                  VIZFIT_CATALOG_DIR to load spec files from a directory."
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
    /// Classify a dataset and list the compatible charts.
    Classify(ClassifyArgs),

    /// Show the per-column type profile of a dataset.
    Profile(ProfileArgs),

    /// List the charts of the catalog.
    Charts(ChartsArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Dataset file (.json, .geojson or .csv), or the JSON/CSV text itself.
    #[arg(value_name = "INPUT")]
    pub source: String,

    /// Merge records on the fields they all share instead of keeping the
    /// majority keyset.
    #[arg(long = "merge")]
    pub merge: bool,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Directory of chart spec files (default: bundled catalog).
    #[arg(long = "catalog", value_name = "DIR")]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Report why each rejected chart was excluded.
    #[arg(long = "explain")]
    pub explain: bool,
}

#[derive(Args)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args)]
pub struct ChartsArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
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
