//! `cutsheet list` command - Show the discovered batch

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{escape_tsv, or_dash, plural};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::discover;
use crate::core::filename::material_hint;
use crate::entities::FileKind;

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Directory containing cut sheets (default: samples)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Only list content-parsed documents, not companion files
    #[arg(long)]
    pub documents_only: bool,
}

#[derive(Debug, Serialize)]
struct ListRow {
    file: String,
    kind: String,
    product: String,
    run_number: Option<String>,
    station_code: Option<String>,
    material_hint: Option<String>,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = super::load_config(global, args.input, None)?;
    let batch = discover(&config)?;

    let rows: Vec<ListRow> = batch
        .iter_with_kind()
        .filter(|(kind, _)| !args.documents_only || *kind == FileKind::Document)
        .map(|(kind, entry)| ListRow {
            file: entry.file_name(),
            kind: kind.to_string(),
            product: entry.product.clone(),
            run_number: entry.run_number.clone(),
            station_code: entry.station_code.clone(),
            material_hint: material_hint(&entry.product),
        })
        .collect();

    if rows.is_empty() && global.format != OutputFormat::Json {
        println!("No cut sheets found.");
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Tsv => {
            println!("file\tkind\tproduct\trun\tstation\tmaterial");
            for row in &rows {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    escape_tsv(&row.file),
                    row.kind,
                    escape_tsv(&row.product),
                    or_dash(row.run_number.as_deref()),
                    or_dash(row.station_code.as_deref()),
                    or_dash(row.material_hint.as_deref()),
                );
            }
        }
        OutputFormat::Auto | OutputFormat::Md => {
            let mut table = Builder::default();
            table.push_record(["File", "Kind", "Product", "Run", "Station", "Material"]);
            for row in &rows {
                table.push_record([
                    row.file.clone(),
                    row.kind.clone(),
                    row.product.clone(),
                    or_dash(row.run_number.as_deref()),
                    or_dash(row.station_code.as_deref()),
                    or_dash(row.material_hint.as_deref()),
                ]);
            }

            let style_table = if global.format == OutputFormat::Md {
                table.build().with(Style::markdown()).to_string()
            } else {
                table.build().with(Style::sharp()).to_string()
            };
            println!("{}", style_table);

            if !global.quiet {
                println!(
                    "\n{} file{} found",
                    style(rows.len()).cyan(),
                    plural(rows.len())
                );
            }
        }
    }

    Ok(())
}
