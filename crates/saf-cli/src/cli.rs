//! CLI argument definitions for the SAF converter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "safconv",
    version,
    about = "Convert a CSV inventory into DSpace Simple Archive Format packages",
    long_about = "Convert a directory holding input.csv and its referenced files into\n\
                  DSpace Simple Archive Format item directories.\n\n\
                  Rows with a non-blank dc.title start a new item; other rows attach\n\
                  additional files to the current item."
)]
pub struct Cli {
    /// Directory containing input.csv and the files it references.
    #[arg(value_name = "PARENT_DIR")]
    pub parent_dir: PathBuf,

    /// Directory that receives saf_import_files_unzipped and saf_output.zip.
    #[arg(value_name = "OUTPUT_DIR", required_unless_present = "validate")]
    pub output_dir: Option<PathBuf>,

    /// Bundle that image files (png, jpg, jpeg, jp2, j2k) are assigned to.
    #[arg(long = "bundle", value_name = "NAME")]
    pub bundle: Option<String>,

    /// Check the input and report problems without writing anything.
    #[arg(long = "validate")]
    pub validate: bool,

    /// Also report bitstream columns (Filename, iiif.label, ...) as unrecognized.
    #[arg(long = "strict-columns", requires = "validate")]
    pub strict_columns: bool,

    /// Leave the item directories unzipped.
    #[arg(long = "no-zip")]
    pub no_zip: bool,

    /// Register an additional item field, e.g. `local.shelfmark`.
    #[arg(long = "extra-field", value_name = "NAME")]
    pub extra_fields: Vec<String>,

    /// Print the result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
