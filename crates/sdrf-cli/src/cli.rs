//! CLI argument definitions for the SDRF mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use sdrf_cli::workflow::{MapRequest, PairSpec};

#[derive(Parser)]
#[command(
    name = "sdrf-mapper",
    version,
    about = "SDRF mapper - Fill an SDRF template from a local metadata table",
    long_about = "Pair columns of a local sample sheet with SDRF-Proteomics columns.\n\n\
                  Each pair is validated against the column's rules (age notation,\n\
                  sex codes, organism and ontology term sets) before its values are\n\
                  written into the template."
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

    /// Allow values from the local table to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: platform config dir).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the canonical SDRF columns and how they are validated.
    Columns(ColumnsArgs),

    /// Pair local columns with SDRF columns and write the merged template.
    Map(MapArgs),
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Ontology term file or directory.
    #[arg(long = "ontology", value_name = "PATH")]
    pub ontology: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MapArgs {
    /// Local metadata table (.csv, .tsv, .txt, .xlsx, .xls, .ods).
    #[arg(long = "local", value_name = "FILE")]
    pub local: PathBuf,

    /// SDRF template to fill (.tsv).
    #[arg(long = "template", value_name = "FILE")]
    pub template: PathBuf,

    /// Ontology term file or directory (overrides SDRF_ONTOLOGY_PATH and settings).
    #[arg(long = "ontology", value_name = "PATH")]
    pub ontology: Option<PathBuf>,

    /// Offer only these local columns (default: all).
    #[arg(long = "select", value_name = "COL")]
    pub select: Vec<String>,

    /// Offer only these SDRF columns (default: the canonical list).
    #[arg(long = "target", value_name = "COL")]
    pub target: Vec<String>,

    /// Pair to confirm, applied in order.
    #[arg(long = "pair", value_name = "LOCAL=TARGET")]
    pub pair: Vec<PairSpec>,

    /// Local column to skip, applied after the pairs.
    #[arg(long = "skip", value_name = "LOCAL")]
    pub skip: Vec<String>,

    /// Keep targets of rejected pairs available for another local column.
    #[arg(long = "release-rejected")]
    pub release_rejected: bool,

    /// Text written for missing cells.
    #[arg(long = "missing-value", value_name = "TEXT")]
    pub missing_value: Option<String>,

    /// Output path (default: intermediate_SDRF.sdrf.tsv).
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl MapArgs {
    pub fn into_request(self) -> MapRequest {
        MapRequest {
            local: self.local,
            template: self.template,
            ontology: self.ontology,
            select: self.select,
            targets: self.target,
            pairs: self.pair,
            skips: self.skip,
            release_rejected: self.release_rejected,
            missing_value: self.missing_value,
            output: self.output,
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
