//! Cut sheet metadata - the per-document JSON record and index rows

use serde::{Deserialize, Serialize};

use crate::entities::part::Part;

/// Identity of the document, mostly decoded from its file name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutsheetDescriptor {
    pub file_name: String,

    /// Path of the source document relative to the project root
    #[serde(rename = "source_pdf")]
    pub source_path: String,

    pub product: String,
    pub station_code: Option<String>,
    pub run_number: Option<String>,
    pub material_hint: Option<String>,
    pub file_type: String,
}

/// Sheet size in feet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetSize {
    pub width: f64,
    pub length: f64,
}

/// Fields recovered heuristically from the document text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedFields {
    pub gauge: Option<String>,
    pub sheet_size_ft: Option<SheetSize>,
}

/// How a related file is tied to the current document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    SameProduct,
    SameStation,
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::SameProduct => write!(f, "same_product"),
            Relation::SameStation => write!(f, "same_station"),
        }
    }
}

/// Another file in the batch that shares this document's product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedFile {
    pub path: String,
    pub extension: String,
    pub station_code: Option<String>,
    pub relation: Relation,
}

/// Everything extracted for one cut sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutsheetMetadata {
    pub cutsheet: CutsheetDescriptor,

    #[serde(rename = "parsed_from_pdf")]
    pub parsed: ParsedFields,

    pub parts: Vec<Part>,
    pub related_files: Vec<RelatedFile>,
    pub extracted_text_excerpt: String,
}

/// One row of `index.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub product: String,
    pub station_code: Option<String>,

    /// Path of the metadata file relative to the project root
    pub cutsheet_metadata: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_uses_wire_names() {
        let descriptor = CutsheetDescriptor {
            file_name: "WidgetA-12B.pdf".to_string(),
            source_path: "samples/WidgetA-12B.pdf".to_string(),
            product: "WidgetA".to_string(),
            station_code: Some("B".to_string()),
            run_number: Some("12".to_string()),
            material_hint: None,
            file_type: "pdf".to_string(),
        };
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["source_pdf"], "samples/WidgetA-12B.pdf");
        assert!(json.get("source_path").is_none());
        assert!(json["material_hint"].is_null());
    }

    #[test]
    fn test_relation_serialization() {
        assert_eq!(
            serde_json::to_value(Relation::SameStation).unwrap(),
            serde_json::json!("same_station")
        );
        assert_eq!(Relation::SameProduct.to_string(), "same_product");
    }
}
