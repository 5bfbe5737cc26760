//! Field heuristics: gauge and sheet size
//!
//! Both fields come from the first match anywhere in the text. Matches that
//! cannot be real data are dropped rather than reported.

use tracing::debug;

use crate::core::patterns;
use crate::entities::{ParsedFields, SheetSize};

/// Widest sheet accepted, in feet
pub const MAX_SHEET_WIDTH_FT: f64 = 20.0;

/// Longest sheet accepted, in feet
pub const MAX_SHEET_LENGTH_FT: f64 = 30.0;

/// Gauge digits from the first `NN GA` token
pub fn extract_gauge(text: &str) -> Option<String> {
    patterns::find_gauge(text).map(str::to_string)
}

/// Sheet size from the first `W' x L'` token, if it is a plausible sheet.
///
/// Only the first token is considered; an oversized first match yields
/// `None` even when a later token would fit.
pub fn extract_sheet_size(text: &str) -> Option<SheetSize> {
    let (width, length) = patterns::find_sheet_size(text)?;
    if width > MAX_SHEET_WIDTH_FT || length > MAX_SHEET_LENGTH_FT {
        debug!(width, length, "ignoring implausible sheet size");
        return None;
    }
    Some(SheetSize { width, length })
}

pub fn extract_fields(text: &str) -> ParsedFields {
    ParsedFields {
        gauge: extract_gauge(text),
        sheet_size_ft: extract_sheet_size(text),
    }
}
