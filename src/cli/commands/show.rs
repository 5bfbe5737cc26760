//! `cutsheet show` command - Print one cut sheet's metadata

use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::output::render_json;
use crate::core::{discover, parse_filename, pipeline, PdfTextSource};
use crate::entities::FileEntry;

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Cut sheet path, or a file name inside the input directory
    pub file: PathBuf,

    /// Directory containing the batch used for related files (default: samples)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = super::load_config(global, args.input, None)?;
    let batch = discover(&config)?;

    let wanted_name = args.file.file_name();
    let entry: FileEntry = match batch
        .documents()
        .iter()
        .find(|e| e.path == args.file || e.path.file_name() == wanted_name)
    {
        Some(entry) => entry.clone(),
        None if args.file.is_file() => parse_filename(&args.file),
        None => {
            return Err(miette::miette!(
                code = "cutsheet::show::not_found",
                help = "pass a path to the file or a name listed by `cutsheet list`",
                "No cut sheet named {} in {}",
                args.file.display(),
                config.input_path().display()
            ));
        }
    };

    let metadata = pipeline::extract_document(&entry, &batch, &config, &PdfTextSource)?;
    println!("{}", render_json(&metadata).into_diagnostic()?);
    Ok(())
}
