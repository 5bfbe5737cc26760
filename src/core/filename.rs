//! File name grammar
//!
//! Cut sheets and their companion programs are named
//! `<product>[-]<run number><STATION>`, e.g. `WidgetA-12B.pdf`. Names that do
//! not follow the convention are still valid: the whole stem becomes the
//! product and the run/station fields stay empty.

use std::path::Path;

use crate::core::patterns;
use crate::entities::FileEntry;

/// Decode a path's file name into a [`FileEntry`]. Never fails.
pub fn parse_filename(path: &Path) -> FileEntry {
    let entry = FileEntry::unstructured(path);

    match patterns::match_filename(&entry.product) {
        Some(m) => FileEntry {
            product: m.product.trim().to_string(),
            station_code: Some(m.station.to_string()),
            run_number: Some(m.run.to_string()),
            path: entry.path,
        },
        None => entry,
    }
}

/// Material hint carried as a trailing uppercase suffix on the product name
/// (e.g. `FrameSS` -> `SS`)
pub fn material_hint(product: &str) -> Option<String> {
    patterns::find_material_suffix(product).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conventional_name() {
        let entry = parse_filename(Path::new("samples/WidgetA-12B.pdf"));
        assert_eq!(entry.product, "WidgetA");
        assert_eq!(entry.run_number.as_deref(), Some("12"));
        assert_eq!(entry.station_code.as_deref(), Some("B"));
        assert_eq!(entry.path, Path::new("samples/WidgetA-12B.pdf"));
    }

    #[test]
    fn test_parse_name_with_spaces_around_hyphen() {
        let entry = parse_filename(Path::new("Rail Kit - 40C.MPF"));
        assert_eq!(entry.product, "Rail Kit");
        assert_eq!(entry.run_number.as_deref(), Some("40"));
        assert_eq!(entry.station_code.as_deref(), Some("C"));
    }

    #[test]
    fn test_parse_name_without_hyphen() {
        let entry = parse_filename(Path::new("Bracket3D.pdf"));
        assert_eq!(entry.product, "Bracket");
        assert_eq!(entry.run_number.as_deref(), Some("3"));
        assert_eq!(entry.station_code.as_deref(), Some("D"));
    }

    #[test]
    fn test_parse_unconventional_name_falls_back_to_stem() {
        let entry = parse_filename(Path::new("samples/shop notes.pdf"));
        assert_eq!(entry.product, "shop notes");
        assert!(entry.run_number.is_none());
        assert!(entry.station_code.is_none());
    }

    #[test]
    fn test_parse_lowercase_station_is_not_a_station() {
        let entry = parse_filename(Path::new("WidgetA-12b.pdf"));
        assert_eq!(entry.product, "WidgetA-12b");
        assert!(entry.station_code.is_none());
    }

    #[test]
    fn test_material_hint() {
        assert_eq!(material_hint("FrameSS").as_deref(), Some("SS"));
        assert_eq!(material_hint("WidgetA"), None);
        assert_eq!(material_hint("shop notes"), None);
    }
}
