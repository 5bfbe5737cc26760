//! Entity types - the data written to and read from cut sheet JSON

pub mod cutsheet;
pub mod file_entry;
pub mod part;

pub use cutsheet::{
    CutsheetDescriptor, CutsheetMetadata, IndexEntry, ParsedFields, RelatedFile, Relation,
    SheetSize,
};
pub use file_entry::{FileEntry, FileKind};
pub use part::{Dimensions, Part};
