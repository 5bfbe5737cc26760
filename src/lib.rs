//! Cut sheet extractor
//!
//! Pulls part tables, gauge, and sheet size out of fabrication cut sheets and
//! writes one cross-referenced JSON record per document plus a batch index.

pub mod cli;
pub mod core;
pub mod entities;
pub mod logging;
pub mod yaml;
