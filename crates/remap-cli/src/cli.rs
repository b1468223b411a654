//! CLI argument definitions for the csv-remap tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use remap_model::Delimiter;

#[derive(Parser)]
#[command(
    name = "csv-remap",
    version,
    about = "csv-remap - Reshape delimited text data through mapping documents",
    long_about = "Reshape delimited text data through portable mapping documents.\n\n\
                  Decodes CSV/TSV files from common text encodings, detects the\n\
                  delimiter, and applies per-column renames, type coercions, value\n\
                  conversions, and text/date transformations."
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
    /// Apply a mapping document to an input file and emit the reshaped output.
    Convert(ConvertArgs),

    /// Show the detected encoding, delimiter, and a preview of an input file.
    Inspect(InspectArgs),

    /// Generate an identity mapping document for an input file.
    Template(TemplateArgs),

    /// List the bundled example datasets from a registry file.
    Examples(ExamplesArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the delimited input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Mapping document to apply (single schema or collection).
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: PathBuf,

    /// Schema name to select from a collection document.
    #[arg(long = "schema", value_name = "NAME")]
    pub schema: Option<String>,

    /// Output file (writes to stdout when omitted).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Input delimiter (overrides both detection and the mapping document).
    #[arg(long = "delimiter", value_enum, default_value = "auto")]
    pub delimiter: DelimiterArg,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the delimited input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Maximum number of data rows to preview.
    #[arg(long = "rows", value_name = "N", default_value_t = 10)]
    pub rows: usize,

    /// Input delimiter (overrides detection).
    #[arg(long = "delimiter", value_enum, default_value = "auto")]
    pub delimiter: DelimiterArg,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Path to the delimited input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file for the mapping document (stdout when omitted).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Input delimiter (overrides detection).
    #[arg(long = "delimiter", value_enum, default_value = "auto")]
    pub delimiter: DelimiterArg,
}

#[derive(Parser)]
pub struct ExamplesArgs {
    /// Registry JSON file listing the example datasets.
    #[arg(long = "registry", value_name = "FILE")]
    pub registry: PathBuf,

    /// Print the mapping document of the given example instead of the list.
    #[arg(long = "show", value_name = "ID")]
    pub show: Option<String>,
}

/// CLI delimiter choices. `Auto` defers to detection.
#[derive(Clone, Copy, ValueEnum)]
pub enum DelimiterArg {
    Auto,
    Comma,
    Semicolon,
    Tab,
}

impl DelimiterArg {
    pub fn to_delimiter(self) -> Option<Delimiter> {
        match self {
            Self::Auto => None,
            Self::Comma => Some(Delimiter::Comma),
            Self::Semicolon => Some(Delimiter::Semicolon),
            Self::Tab => Some(Delimiter::Tab),
        }
    }
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
