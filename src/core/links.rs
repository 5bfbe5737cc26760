//! Related-file linking
//!
//! A document is related to every other file in the batch with the same
//! product. The relation is `same_station` when both sides carry the same
//! station code and `same_product` otherwise.

use crate::core::config::Config;
use crate::entities::{FileEntry, RelatedFile, Relation};

/// Relation of `other` as seen from `current`, or `None` if they are unrelated.
///
/// A file is never related to itself.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use cutsheet::core::filename::parse_filename;
/// use cutsheet::core::links::relation_between;
/// use cutsheet::entities::Relation;
///
/// let pdf = parse_filename(Path::new("WidgetA-12B.pdf"));
/// let program = parse_filename(Path::new("WidgetA-12B.MPF"));
/// let other = parse_filename(Path::new("WidgetA-12C.pdf"));
///
/// assert_eq!(relation_between(&pdf, &program), Some(Relation::SameStation));
/// assert_eq!(relation_between(&pdf, &other), Some(Relation::SameProduct));
/// assert_eq!(relation_between(&pdf, &pdf), None);
/// ```
pub fn relation_between(current: &FileEntry, other: &FileEntry) -> Option<Relation> {
    if other.path == current.path || other.product != current.product {
        return None;
    }

    match (&current.station_code, &other.station_code) {
        (Some(a), Some(b)) if a == b => Some(Relation::SameStation),
        _ => Some(Relation::SameProduct),
    }
}

/// Related files for `current`, in the order `batch` lists them
pub fn collect_related_files(
    batch: &[FileEntry],
    current: &FileEntry,
    config: &Config,
) -> Vec<RelatedFile> {
    batch
        .iter()
        .filter_map(|entry| {
            relation_between(current, entry).map(|relation| RelatedFile {
                path: config.display_path(&entry.path),
                extension: entry.extension(),
                station_code: entry.station_code.clone(),
                relation,
            })
        })
        .collect()
}
