//! File entry - identity fields decoded from a cut sheet's file name

use std::path::{Path, PathBuf};

/// Which role a discovered file plays in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Content-parsed cut sheet (PDF)
    Document,
    /// Linking-only file sharing the naming convention (e.g. an MPF program)
    Companion,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Document => write!(f, "document"),
            FileKind::Companion => write!(f, "companion"),
        }
    }
}

/// A discovered file with the fields its name encodes.
///
/// Created once per file during discovery and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub product: String,
    pub station_code: Option<String>,
    pub run_number: Option<String>,
}

impl FileEntry {
    /// Entry with no decoded structure: the whole stem is the product
    pub fn unstructured(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            product: file_stem(path),
            station_code: None,
            run_number: None,
        }
    }

    /// File name including extension
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name without its final extension
    pub fn stem(&self) -> String {
        file_stem(&self.path)
    }

    /// Lowercase extension without the leading dot (empty if none)
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
