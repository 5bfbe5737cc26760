//! One-shot extraction pipeline
//!
//! Discover -> parse file names -> for each document: extract text, parts,
//! heuristics, related files, assemble -> build index -> persist.
//!
//! The run stops at the first document that cannot be decoded. Files already
//! written for earlier documents are left in place and no index is written.

use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::config::Config;
use crate::core::discovery::{discover, Batch, DiscoveryError};
use crate::core::index::build_index;
use crate::core::metadata::assemble;
use crate::core::output::{render_json, write_file};
use crate::core::text::{TextError, TextSource};
use crate::entities::{CutsheetMetadata, FileEntry};

#[derive(Debug, Error, Diagnostic)]
pub enum PipelineError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Text(#[from] TextError),

    #[error("Failed to serialize {path}: {source}")]
    #[diagnostic(code(cutsheet::pipeline::serialize))]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write {path}: {source}")]
    #[diagnostic(code(cutsheet::pipeline::write))]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub documents: usize,
    pub companions: usize,
    pub parts: usize,
    /// Metadata files in the order they were written
    pub written: Vec<PathBuf>,
    pub index_path: PathBuf,
}

/// Extract one document's metadata against the full linking batch
pub fn extract_document(
    entry: &FileEntry,
    batch: &Batch,
    config: &Config,
    source: &dyn TextSource,
) -> Result<CutsheetMetadata, PipelineError> {
    let text = source.extract_text(&entry.path)?;
    Ok(assemble(entry, &text, batch.entries(), config))
}

/// Run the whole pipeline for `config`
pub fn run(config: &Config, source: &dyn TextSource) -> Result<RunSummary, PipelineError> {
    let batch = discover(config)?;
    run_batch(&batch, config, source)
}

/// Run the pipeline over an already discovered batch
pub fn run_batch(
    batch: &Batch,
    config: &Config,
    source: &dyn TextSource,
) -> Result<RunSummary, PipelineError> {
    let mut written = Vec::with_capacity(batch.documents().len());
    let mut parts = 0;

    for entry in batch.documents() {
        let metadata = extract_document(entry, batch, config, source)?;
        parts += metadata.parts.len();

        let path = config.metadata_path(&entry.stem());
        persist(&path, &metadata)?;
        debug!(path = %path.display(), "wrote cut sheet metadata");
        written.push(path);
    }

    let index = build_index(batch.documents(), config);
    let index_path = config.index_path();
    persist(&index_path, &index)?;

    info!(
        documents = written.len(),
        parts,
        index = %index_path.display(),
        "cut sheet batch complete"
    );

    Ok(RunSummary {
        documents: batch.documents().len(),
        companions: batch.companions().len(),
        parts,
        written,
        index_path,
    })
}

fn persist<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), PipelineError> {
    let json = render_json(value).map_err(|source| PipelineError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    write_file(path, &json).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })
}
