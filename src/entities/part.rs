//! Part entity - one row pulled from a cut sheet's parts list

use serde::{Deserialize, Serialize};

/// Length x width pair as written on a line-scan row (inches)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
}

/// A part found in a cut sheet.
///
/// The variant records which extraction strategy produced it and is
/// serialized as the `source` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Part {
    /// Row from a delimited `ITEM #` ... `DWG#` table
    ItemTable {
        part_number: String,
        description: String,
        quantity: u64,
    },

    /// Any line that starts with a part number (fallback strategy)
    LineScan {
        part_number: String,
        details: String,
        weight_lb: Option<f64>,
        dimensions_in: Option<Dimensions>,
    },
}

impl Part {
    pub fn part_number(&self) -> &str {
        match self {
            Part::ItemTable { part_number, .. } | Part::LineScan { part_number, .. } => part_number,
        }
    }

    /// Wire name of the strategy that produced this part
    pub fn source(&self) -> &'static str {
        match self {
            Part::ItemTable { .. } => "item_table",
            Part::LineScan { .. } => "line_scan",
        }
    }
}
