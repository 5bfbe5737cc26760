//! Batch discovery
//!
//! Scans the input directory (non-recursively) and decodes every file name.
//! Documents come first in lexicographic path order, followed by companion
//! files in the same order; that combined order is the linking order.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::core::config::Config;
use crate::core::filename::parse_filename;
use crate::entities::{FileEntry, FileKind};

#[derive(Debug, Error, Diagnostic)]
#[error("Failed to scan {path}: {source}")]
#[diagnostic(code(cutsheet::discovery::scan))]
pub struct DiscoveryError {
    path: PathBuf,
    source: walkdir::Error,
}

/// Every file taking part in one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    entries: Vec<FileEntry>,
    document_count: usize,
}

impl Batch {
    /// Build a batch from already-parsed entries, each list in discovery order
    pub fn new(documents: Vec<FileEntry>, companions: Vec<FileEntry>) -> Self {
        let document_count = documents.len();
        let mut entries = documents;
        entries.extend(companions);
        Self {
            entries,
            document_count,
        }
    }

    /// Content-parsed documents
    pub fn documents(&self) -> &[FileEntry] {
        &self.entries[..self.document_count]
    }

    /// Linking-only files
    pub fn companions(&self) -> &[FileEntry] {
        &self.entries[self.document_count..]
    }

    /// Documents then companions, the set related files are drawn from
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Entries paired with their kind, in linking order
    pub fn iter_with_kind(&self) -> impl Iterator<Item = (FileKind, &FileEntry)> {
        self.documents()
            .iter()
            .map(|e| (FileKind::Document, e))
            .chain(self.companions().iter().map(|e| (FileKind::Companion, e)))
    }
}

/// Discover and parse the batch under `config.input_path()`.
///
/// A missing input directory is an empty batch.
pub fn discover(config: &Config) -> Result<Batch, DiscoveryError> {
    let dir = config.input_path();
    if !dir.is_dir() {
        warn!(path = %dir.display(), "input directory not found, nothing to process");
        return Ok(Batch::default());
    }

    let mut documents = Vec::new();
    let mut companions = Vec::new();

    for entry in WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| DiscoveryError {
            path: dir.clone(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        match config.kind_of(&path) {
            Some(FileKind::Document) => documents.push(parse_filename(&path)),
            Some(FileKind::Companion) => companions.push(parse_filename(&path)),
            None => {}
        }
    }

    info!(
        documents = documents.len(),
        companions = companions.len(),
        "discovered cut sheet batch"
    );

    Ok(Batch::new(documents, companions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(entries: &[FileEntry]) -> Vec<String> {
        entries.iter().map(|e| e.file_name()).collect()
    }

    #[test]
    fn test_discover_sorts_and_splits_kinds() {
        let dir = tempdir().unwrap();
        let samples = dir.path().join("samples");
        fs::create_dir_all(samples.join("nested")).unwrap();
        for name in [
            "WidgetA-12C.pdf",
            "WidgetA-12B.pdf",
            "WidgetA-12B.MPF",
            "Alpha-1A.PDF",
            "readme.txt",
            "nested/Deep-1A.pdf",
        ] {
            fs::write(samples.join(name), b"x").unwrap();
        }

        let batch = discover(&Config::with_root(dir.path())).unwrap();
        assert_eq!(
            names(batch.documents()),
            vec!["Alpha-1A.PDF", "WidgetA-12B.pdf", "WidgetA-12C.pdf"]
        );
        assert_eq!(names(batch.companions()), vec!["WidgetA-12B.MPF"]);
        assert_eq!(batch.entries().len(), 4);
        assert_eq!(batch.entries()[3].file_name(), "WidgetA-12B.MPF");
    }

    #[test]
    fn test_discover_parses_names() {
        let dir = tempdir().unwrap();
        let samples = dir.path().join("samples");
        fs::create_dir_all(&samples).unwrap();
        fs::write(samples.join("WidgetA-12B.pdf"), b"x").unwrap();

        let batch = discover(&Config::with_root(dir.path())).unwrap();
        let entry = &batch.documents()[0];
        assert_eq!(entry.product, "WidgetA");
        assert_eq!(entry.station_code.as_deref(), Some("B"));
    }

    #[test]
    fn test_discover_missing_dir_is_empty() {
        let dir = tempdir().unwrap();
        let batch = discover(&Config::with_root(dir.path())).unwrap();
        assert!(batch.entries().is_empty());
    }

    #[test]
    fn test_iter_with_kind() {
        let batch = Batch::new(
            vec![parse_filename(std::path::Path::new("A-1B.pdf"))],
            vec![parse_filename(std::path::Path::new("A-1B.mpf"))],
        );
        let kinds: Vec<FileKind> = batch.iter_with_kind().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![FileKind::Document, FileKind::Companion]);
    }
}
