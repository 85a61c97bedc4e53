//! CLI argument definitions for the course catalog converter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use catalog_ingest::IngestOptions;
use catalog_model::{LocationOrder, NormalizeOptions, OutputContainer};
use catalog_cli::pipeline::ConvertConfig;

#[derive(Parser)]
#[command(
    name = "course-catalog",
    version,
    about = "Convert course catalog TSV exports to compact front-end JSON",
    long_about = "Convert per-term course catalog TSV exports to compact JSON.\n\n\
                  Columns are renamed to short keys, class schedules are parsed and\n\
                  expanded into timetable slots, and empty values are dropped."
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
    /// Convert one term file.
    Convert(ConvertArgs),

    /// Convert every `*.tsv` term file in a directory.
    Batch(BatchArgs),

    /// List the source columns and their short output keys.
    Fields,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Source TSV file.
    #[arg(value_name = "TSV")]
    pub input: PathBuf,

    /// Destination JSON file.
    #[arg(value_name = "JSON")]
    pub output: PathBuf,

    #[command(flatten)]
    pub normalize: NormalizeArgs,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Directory containing `<term>.tsv` files.
    #[arg(value_name = "DIR")]
    pub source_dir: PathBuf,

    /// Output directory for `<term>.json` files (default: <DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip writing `<term>/last_update.json`.
    #[arg(long = "no-last-update")]
    pub no_last_update: bool,

    #[command(flatten)]
    pub normalize: NormalizeArgs,
}

/// Options shared by `convert` and `batch`.
#[derive(Args)]
pub struct NormalizeArgs {
    /// Document shape: a list of records or an object keyed by course id.
    #[arg(long = "container", value_enum, default_value = "list")]
    pub container: ContainerArg,

    /// Sort the `lc` location list instead of keeping first-seen order.
    #[arg(long = "sort-locations")]
    pub sort_locations: bool,

    /// Separator between course code and group in fallback ids.
    #[arg(long = "id-separator", value_name = "SEP", default_value = "-")]
    pub id_separator: String,

    /// Keep cells such as `NA` or `null` verbatim instead of reading them as empty.
    #[arg(long = "keep-na-tokens")]
    pub keep_na_tokens: bool,
}

impl NormalizeArgs {
    pub fn to_config(&self) -> ConvertConfig {
        let location_order = if self.sort_locations {
            LocationOrder::Sorted
        } else {
            LocationOrder::FirstSeen
        };
        ConvertConfig {
            ingest: IngestOptions::default().with_na_as_empty(!self.keep_na_tokens),
            normalize: NormalizeOptions::new()
                .with_id_separator(self.id_separator.as_str())
                .with_location_order(location_order),
            container: match self.container {
                ContainerArg::List => OutputContainer::List,
                ContainerArg::Map => OutputContainer::Map,
            },
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ContainerArg {
    List,
    Map,
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
