//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs, list::ListArgs, run::RunArgs, show::ShowArgs,
};

#[derive(Parser)]
#[command(name = "cutsheet")]
#[command(author, version, about = "Cut sheet metadata extractor")]
#[command(long_about = "Extracts part tables, gauge, and sheet size from fabrication cut sheets \
and writes one cross-referenced JSON record per document plus an index.json. \
Runs the full batch when no subcommand is given.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Project root; input/output directories and written paths are relative to it
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract every cut sheet in the input directory and write the index
    Run(RunArgs),

    /// Print the metadata for one cut sheet without writing anything
    Show(ShowArgs),

    /// List the discovered batch with the fields decoded from file names
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically pick (table for list, json for show)
    #[default]
    Auto,
    /// JSON format (for programming)
    Json,
    /// Tab-separated values (for piping)
    Tsv,
    /// Markdown tables
    Md,
}
