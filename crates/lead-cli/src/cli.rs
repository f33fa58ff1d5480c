//! CLI argument definitions for the lead importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lead-importer",
    version,
    about = "Lead Importer - Turn CSV exports into CRM lead records",
    long_about = "Import leads from CSV files into the campaign CRM.\n\n\
                  Parses comma-delimited text, infers a column-to-field mapping\n\
                  from the header names, and normalizes rows into lead records.\n\
                  Rows without an email or a name are skipped and counted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for silence).
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

    /// Include timestamps in log output.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import leads from a CSV file into the store.
    Import(ImportArgs),

    /// Show the first rows of a CSV file and the inferred mapping.
    Preview(PreviewArgs),

    /// Write the canonical import template CSV.
    Template(TemplateArgs),

    /// List the configured pipeline stages.
    Stages(StagesArgs),

    /// Export stored leads to a CSV file.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the CSV file to import.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Lead store file leads are added to.
    #[arg(long = "store", value_name = "PATH", default_value = "leads.json")]
    pub store: PathBuf,

    /// Pipeline stage configuration: a JSON array of {"id", "name"}
    /// objects (default: the stock funnel).
    #[arg(long = "stages", value_name = "PATH")]
    pub stages: Option<PathBuf>,

    /// Mapping overrides: a JSON object of CSV header to field name,
    /// with null to leave a header unmapped. Overlaid on the inferred
    /// mapping.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// Run the full pipeline but persist nothing.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write an import report (counts and provenance, no lead data) as
    /// JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Path to the CSV file to preview.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Write the template to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct StagesArgs {
    /// Pipeline stage configuration file (default: the stock funnel).
    #[arg(long = "stages", value_name = "PATH")]
    pub stages: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Lead store file to export from.
    #[arg(long = "store", value_name = "PATH", default_value = "leads.json")]
    pub store: PathBuf,

    /// Destination CSV file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,
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
