//! Parts list extraction
//!
//! Two strategies, tried in order:
//!
//! 1. **Item table** - only when a line contains `ITEM #`. Rows between that
//!    line and the first line starting with `DWG#` are accepted when they read
//!    `<PART> <description...> <qty>`; anything else is skipped.
//! 2. **Line scan** - only when the item table produced nothing. Every line that
//!    opens with a part number is taken, with weight and dimensions picked out
//!    of the remainder when present.
//!
//! The item table is the precise source; line scan never runs if it found a row.

use tracing::debug;

use crate::core::patterns;
use crate::entities::{Dimensions, Part};

/// Which strategy produced a parts list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartStrategy {
    ItemTable,
    LineScan,
}

/// Extract the parts list from trimmed document lines
pub fn extract_parts(lines: &[&str]) -> Vec<Part> {
    extract_parts_with_strategy(lines).0
}

/// Same as [`extract_parts`], also reporting which strategy produced the result
pub fn extract_parts_with_strategy(lines: &[&str]) -> (Vec<Part>, PartStrategy) {
    let table_parts = extract_item_table(lines);
    if !table_parts.is_empty() {
        debug!(count = table_parts.len(), "parts taken from item table");
        return (table_parts, PartStrategy::ItemTable);
    }

    let scanned = extract_line_scan(lines);
    debug!(count = scanned.len(), "parts taken from line scan");
    (scanned, PartStrategy::LineScan)
}

/// Lines between the first `ITEM #` line and the first following `DWG#` line.
///
/// Returns `None` when no line carries the marker.
pub fn item_table_rows<'a, 'b>(lines: &'a [&'b str]) -> Option<&'a [&'b str]> {
    let start = lines.iter().position(|line| patterns::is_item_table_marker(line))? + 1;
    let body = &lines[start..];
    let end = body
        .iter()
        .position(|line| patterns::is_table_end(line))
        .unwrap_or(body.len());
    Some(&body[..end])
}

/// Item table strategy. Empty when the marker is missing or no row matches.
pub fn extract_item_table(lines: &[&str]) -> Vec<Part> {
    let Some(rows) = item_table_rows(lines) else {
        return Vec::new();
    };

    rows.iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .filter_map(parse_table_row)
        .collect()
}

fn parse_table_row(line: &str) -> Option<Part> {
    let row = patterns::match_table_row(line)?;
    // All digits, so the only parse failure is overflow
    let quantity = row.quantity.parse::<u64>().unwrap_or(u64::MAX);
    Some(Part::ItemTable {
        part_number: row.part_number.to_string(),
        description: row.description.trim().to_string(),
        quantity,
    })
}

/// Line scan strategy over every line of the document
pub fn extract_line_scan(lines: &[&str]) -> Vec<Part> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .filter_map(parse_scanned_line)
        .collect()
}

fn parse_scanned_line(line: &str) -> Option<Part> {
    let (part_number, rest) = patterns::match_line_scan_row(line)?;
    let rest = rest.trim();

    Some(Part::LineScan {
        part_number: part_number.to_string(),
        details: rest.to_string(),
        weight_lb: patterns::find_weight(rest),
        dimensions_in: patterns::find_dimensions(rest)
            .map(|(length, width)| Dimensions { length, width }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        text.lines().map(str::trim).collect()
    }

    #[test]
    fn test_item_table_rows_bounded_by_markers() {
        let text = "HEADER\nITEM # PART DESC QTY\nFR-1 A 1\nFR-2 B 2\nDWG# 77\nFR-3 C 3";
        let lines = lines(text);
        let rows = item_table_rows(&lines).unwrap();
        assert_eq!(rows, &["FR-1 A 1", "FR-2 B 2"]);
    }

    #[test]
    fn test_item_table_rows_run_to_end_without_terminator() {
        let lines = lines("ITEM #\nFR-1 A 1\nFR-2 B 2");
        assert_eq!(item_table_rows(&lines).unwrap().len(), 2);
    }

    #[test]
    fn test_item_table_absent_marker_yields_nothing() {
        let lines = lines("FR-100 Bracket 4\nDWG# 1");
        assert!(item_table_rows(&lines).is_none());
        assert!(extract_item_table(&lines).is_empty());
    }

    #[test]
    fn test_item_table_parses_rows_and_skips_noise() {
        let lines = lines("ITEM #\nFR-100 Bracket 4\nsee note\n\nFR-200 Long Rail 12\nDWG# 9");
        let parts = extract_item_table(&lines);
        assert_eq!(
            parts,
            vec![
                Part::ItemTable {
                    part_number: "FR-100".to_string(),
                    description: "Bracket".to_string(),
                    quantity: 4,
                },
                Part::ItemTable {
                    part_number: "FR-200".to_string(),
                    description: "Long Rail".to_string(),
                    quantity: 12,
                },
            ]
        );
    }

    #[test]
    fn test_item_table_ignores_rows_after_terminator() {
        let lines = lines("ITEM #\nDWG# 9\nFR-100 Bracket 4");
        assert!(extract_item_table(&lines).is_empty());
    }

    #[test]
    fn test_large_quantity_is_kept() {
        let lines = lines("ITEM #\nFR-1 Bolt 99999999999\nFR-2 Nut 8");
        let parts = extract_item_table(&lines);
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts[0],
            Part::ItemTable {
                part_number: "FR-1".to_string(),
                description: "Bolt".to_string(),
                quantity: 99_999_999_999,
            }
        );
    }

    #[test]
    fn test_overflowing_quantity_clamps_and_keeps_table_mode() {
        let lines = lines("ITEM #\nFR-1 Bolt 123456789012345678901234567890\nDWG# 2\nFR-9 Tab 1.5");
        let (parts, strategy) = extract_parts_with_strategy(&lines);
        assert_eq!(strategy, PartStrategy::ItemTable);
        assert_eq!(
            parts,
            vec![Part::ItemTable {
                part_number: "FR-1".to_string(),
                description: "Bolt".to_string(),
                quantity: u64::MAX,
            }]
        );
    }

    #[test]
    fn test_table_wins_over_line_scan() {
        let lines = lines("FR-9 Loose part 1.5\nITEM #\nFR-100 Bracket 4\nDWG# 1");
        let (parts, strategy) = extract_parts_with_strategy(&lines);
        assert_eq!(strategy, PartStrategy::ItemTable);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].source(), "item_table");
    }

    #[test]
    fn test_line_scan_runs_when_table_has_no_rows() {
        let lines = lines("ITEM #\nno rows here\nDWG# 1\nFR-9 Plate 12 x 6 3.25");
        let (parts, strategy) = extract_parts_with_strategy(&lines);
        assert_eq!(strategy, PartStrategy::LineScan);
        assert_eq!(
            parts,
            vec![Part::LineScan {
                part_number: "FR-9".to_string(),
                details: "Plate 12 x 6 3.25".to_string(),
                weight_lb: Some(3.25),
                dimensions_in: Some(Dimensions {
                    length: 12.0,
                    width: 6.0
                }),
            }]
        );
    }

    #[test]
    fn test_line_scan_missing_fields_are_none() {
        let lines = lines("FR-10 Gusset plate\nnot a part\n   \nFR-11 Tab 2");
        let parts = extract_line_scan(&lines);
        assert_eq!(parts.len(), 2);
        match &parts[0] {
            Part::LineScan {
                weight_lb,
                dimensions_in,
                details,
                ..
            } => {
                assert_eq!(details, "Gusset plate");
                assert!(weight_lb.is_none());
                assert!(dimensions_in.is_none());
            }
            other => panic!("unexpected part {:?}", other),
        }
    }

    #[test]
    fn test_empty_text_yields_no_parts() {
        let (parts, strategy) = extract_parts_with_strategy(&[]);
        assert!(parts.is_empty());
        assert_eq!(strategy, PartStrategy::LineScan);
    }
}
