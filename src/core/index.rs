//! Batch index
//!
//! One row per processed document, in document discovery order.

use crate::core::config::Config;
use crate::entities::{FileEntry, IndexEntry};

/// Index row pointing at the metadata file written for `entry`
pub fn index_entry(entry: &FileEntry, config: &Config) -> IndexEntry {
    IndexEntry {
        product: entry.product.clone(),
        station_code: entry.station_code.clone(),
        cutsheet_metadata: config.display_path(&config.metadata_path(&entry.stem())),
    }
}

/// Index rows for `documents`, preserving their order
pub fn build_index<'a>(
    documents: impl IntoIterator<Item = &'a FileEntry>,
    config: &Config,
) -> Vec<IndexEntry> {
    documents
        .into_iter()
        .map(|entry| index_entry(entry, config))
        .collect()
}
