//! Document text extraction
//!
//! The extractors only ever see plain text. [`TextSource`] is the seam between
//! them and whatever decodes the file; [`PdfTextSource`] is the lopdf-backed
//! implementation used by the CLI.

use lopdf::Document;
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Diagnostic)]
pub enum TextError {
    /// The file could not be opened or is not a readable document
    #[error("Failed to decode {path}: {message}")]
    #[diagnostic(
        code(cutsheet::text::decode),
        help("the batch stops at the first unreadable document; fix or remove it and rerun")
    )]
    Decode { path: PathBuf, message: String },
}

/// Supplies the raw text of a document, pages joined with newlines in order
pub trait TextSource: Send + Sync {
    fn extract_text(&self, path: &Path) -> Result<String, TextError>;
}

/// PDF text extraction with lopdf.
///
/// Loading the file is all-or-nothing; each page after that is best-effort and
/// contributes an empty string if its text cannot be recovered.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextSource;

impl TextSource for PdfTextSource {
    fn extract_text(&self, path: &Path) -> Result<String, TextError> {
        let document = Document::load(path).map_err(|e| TextError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let pages: Vec<String> = document
            .get_pages()
            .keys()
            .map(|&number| match document.extract_text(&[number]) {
                Ok(text) => text.trim_end_matches(['\n', '\r']).to_string(),
                Err(e) => {
                    debug!(path = %path.display(), page = number, error = %e, "page has no extractable text");
                    String::new()
                }
            })
            .collect();

        Ok(pages.join("\n"))
    }
}
