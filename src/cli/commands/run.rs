//! `cutsheet run` command - Extract the whole batch and write the index

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::plural;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::pipeline;
use crate::core::PdfTextSource;

#[derive(clap::Args, Debug, Default)]
pub struct RunArgs {
    /// Directory containing cut sheets (default: samples)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Directory receiving the JSON files (default: data/cutsheets)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: RunArgs, global: &GlobalOpts) -> Result<()> {
    let config = super::load_config(global, args.input, args.output)?;
    let summary = pipeline::run(&config, &PdfTextSource)?;

    if global.format == OutputFormat::Json {
        let written: Vec<String> = summary
            .written
            .iter()
            .map(|p| config.display_path(p))
            .collect();
        let report = serde_json::json!({
            "documents": summary.documents,
            "companions": summary.companions,
            "parts": summary.parts,
            "written": written,
            "index": config.display_path(&summary.index_path),
        });
        println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
        return Ok(());
    }

    if global.quiet {
        return Ok(());
    }

    if summary.documents == 0 {
        println!(
            "{} No cut sheets found in {}",
            style("!").yellow(),
            style(config.input_path().display()).cyan()
        );
    }

    println!(
        "{} Extracted {} cut sheet{} ({} part{}, {} companion file{})",
        style("✓").green(),
        summary.documents,
        plural(summary.documents),
        summary.parts,
        plural(summary.parts),
        summary.companions,
        plural(summary.companions),
    );
    println!(
        "  Index: {}",
        style(config.display_path(&summary.index_path)).cyan()
    );

    Ok(())
}
