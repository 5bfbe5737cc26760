//! Named text matchers
//!
//! Every extraction rule lives here as its own compiled pattern with a small
//! function in front of it, so each rule can be tested in isolation. The
//! higher-level extractors in `filename`, `parts`, and `heuristics` only
//! compose these.

use std::sync::LazyLock;

use regex::Regex;

/// `<product>[-]<run digits><STATION LETTERS>` anchored on a file stem
static FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<product>.+?)\s*-?\s*(?P<run>\d+)(?P<station>[A-Z]+)$").unwrap()
});

/// `<PART> <description...> <qty>` row inside an item table
static TABLE_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(FR-[A-Z0-9]+)\s+(.*)\s+(\d+)$").unwrap());

/// Any line opening with a part number followed by more text
static LINE_SCAN_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(FR-[A-Z0-9]+)\s+(.*)$").unwrap());

static WEIGHT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d+\.\d+)\b").unwrap());

static DIMENSIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*x\s*(\d+(?:\.\d+)?)").unwrap());

static GAUGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})\s*GA\b").unwrap());

static SHEET_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<width>\d+(?:\.\d+)?)'\s*[xX]\s*(?P<length>\d+(?:\.\d+)?)'").unwrap()
});

static MATERIAL_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z]{2,})$").unwrap());

/// Literal that opens an item table
pub const ITEM_TABLE_MARKER: &str = "ITEM #";

/// Prefix of the line that closes an item table
pub const TABLE_END_PREFIX: &str = "DWG#";

/// Captures of a file stem that follows the naming convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameMatch<'a> {
    pub product: &'a str,
    pub run: &'a str,
    pub station: &'a str,
}

/// Captures of an item table row; `quantity` is still the raw digit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRowMatch<'a> {
    pub part_number: &'a str,
    pub description: &'a str,
    pub quantity: &'a str,
}

pub fn match_filename(stem: &str) -> Option<FilenameMatch<'_>> {
    let caps = FILENAME.captures(stem)?;
    Some(FilenameMatch {
        product: caps.name("product")?.as_str(),
        run: caps.name("run")?.as_str(),
        station: caps.name("station")?.as_str(),
    })
}

pub fn is_item_table_marker(line: &str) -> bool {
    line.contains(ITEM_TABLE_MARKER)
}

pub fn is_table_end(line: &str) -> bool {
    line.starts_with(TABLE_END_PREFIX)
}

/// Match a trimmed line against the item table row layout
pub fn match_table_row(line: &str) -> Option<TableRowMatch<'_>> {
    let caps = TABLE_ROW.captures(line)?;
    Some(TableRowMatch {
        part_number: caps.get(1)?.as_str(),
        description: caps.get(2)?.as_str(),
        quantity: caps.get(3)?.as_str(),
    })
}

/// Split a trimmed line into `(part_number, remainder)` if it opens with a part
pub fn match_line_scan_row(line: &str) -> Option<(&str, &str)> {
    let caps = LINE_SCAN_ROW.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// First decimal number that has a fractional part
pub fn find_weight(text: &str) -> Option<f64> {
    WEIGHT.captures(text)?.get(1)?.as_str().parse().ok()
}

/// First `A x B` pair, returned as `(A, B)`
pub fn find_dimensions(text: &str) -> Option<(f64, f64)> {
    let caps = DIMENSIONS.captures(text)?;
    let a = caps.get(1)?.as_str().parse().ok()?;
    let b = caps.get(2)?.as_str().parse().ok()?;
    Some((a, b))
}

/// Digits of the first `NN GA` token (case-insensitive)
pub fn find_gauge(text: &str) -> Option<&str> {
    Some(GAUGE.captures(text)?.get(1)?.as_str())
}

/// First `W' x L'` pair, returned as `(W, L)` without any bounds check
pub fn find_sheet_size(text: &str) -> Option<(f64, f64)> {
    let caps = SHEET_SIZE.captures(text)?;
    let width = caps.name("width")?.as_str().parse().ok()?;
    let length = caps.name("length")?.as_str().parse().ok()?;
    Some((width, length))
}

/// Trailing run of two or more uppercase letters
pub fn find_material_suffix(product: &str) -> Option<&str> {
    Some(MATERIAL_SUFFIX.captures(product)?.get(1)?.as_str())
}
