//! Per-document metadata assembly
//!
//! Pure composition of the filename, text, and batch; no inference happens
//! here beyond calling the extractors.

use tracing::debug;

use crate::core::config::Config;
use crate::core::filename::material_hint;
use crate::core::heuristics::extract_fields;
use crate::core::links::collect_related_files;
use crate::core::parts::extract_parts;
use crate::entities::{CutsheetDescriptor, CutsheetMetadata, FileEntry};

/// Number of leading lines kept in `extracted_text_excerpt`
pub const EXCERPT_LINES: usize = 40;

/// Split extracted text into lines on every line break a decoder may emit.
///
/// `\r\n` counts as a single break; a trailing break does not add an empty line.
pub fn document_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(at) = rest.find(is_line_break) {
        lines.push(&rest[..at]);
        let tail = &rest[at..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Descriptor fields for an entry
pub fn describe(entry: &FileEntry, config: &Config) -> CutsheetDescriptor {
    CutsheetDescriptor {
        file_name: entry.file_name(),
        source_path: config.display_path(&entry.path),
        product: entry.product.clone(),
        station_code: entry.station_code.clone(),
        run_number: entry.run_number.clone(),
        material_hint: material_hint(&entry.product),
        file_type: entry.extension(),
    }
}

/// Build the metadata record for `entry` from its extracted `text`.
///
/// `batch` is the full linking batch (documents and companions).
pub fn assemble(
    entry: &FileEntry,
    text: &str,
    batch: &[FileEntry],
    config: &Config,
) -> CutsheetMetadata {
    let lines: Vec<&str> = document_lines(text).into_iter().map(str::trim).collect();
    let parts = extract_parts(&lines);
    debug!(
        file = %entry.file_name(),
        source = parts.first().map_or("none", |part| part.source()),
        parts = parts.len(),
        "assembled cut sheet"
    );

    CutsheetMetadata {
        cutsheet: describe(entry, config),
        parsed: extract_fields(text),
        parts,
        related_files: collect_related_files(batch, entry, config),
        extracted_text_excerpt: lines
            .iter()
            .take(EXCERPT_LINES)
            .copied()
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
