//! CLI argument definitions for header-align.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use align_cli::pipeline::{DEFAULT_REFERENCE_DIR, REFERENCE_DIR_ENV};
use align_ingest::DEFAULT_REFERENCE_EXTENSION;

#[derive(Parser)]
#[command(
    name = "header-align",
    version,
    about = "Align spreadsheet columns onto a reference header set",
    long_about = "Rename and reorder the columns of an uploaded spreadsheet to match a\n\
                  reference file of canonical headers and their synonyms.\n\n\
                  The reference file is <prefix>-header.xlsx in the reference directory,\n\
                  where <prefix> is the upload's file name up to its first hyphen."
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
    /// Align an uploaded spreadsheet and write the aligned workbook.
    Align(AlignArgs),

    /// Show the canonical headers and synonyms of a reference file.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct AlignArgs {
    /// Spreadsheet to align (xlsx, xlsm, xlsb, xls, ods or csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Reference file to use instead of the one derived from the input name.
    #[arg(long = "reference", value_name = "FILE")]
    pub reference: Option<PathBuf>,

    /// Directory holding the reference header files.
    #[arg(
        long = "reference-dir",
        value_name = "DIR",
        env = REFERENCE_DIR_ENV,
        default_value = DEFAULT_REFERENCE_DIR
    )]
    pub reference_dir: PathBuf,

    /// Extension of derived reference file names.
    #[arg(long = "reference-ext", value_name = "EXT", default_value = DEFAULT_REFERENCE_EXTENSION)]
    pub reference_ext: String,

    /// Output directory for generated files (default: the input's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Keep numeric and boolean input columns typed instead of reading text.
    #[arg(long = "infer-types")]
    pub infer_types: bool,

    /// Align and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Reference header file to load.
    #[arg(value_name = "REFERENCE")]
    pub reference: PathBuf,

    /// Print the mapping as JSON instead of a table.
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
