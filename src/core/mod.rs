//! Core module - extraction, linking, and the batch pipeline

pub mod config;
pub mod discovery;
pub mod filename;
pub mod heuristics;
pub mod index;
pub mod links;
pub mod metadata;
pub mod output;
pub mod parts;
pub mod patterns;
pub mod pipeline;
pub mod text;

pub use config::{Config, ConfigError};
pub use discovery::{discover, Batch, DiscoveryError};
pub use filename::parse_filename;
pub use pipeline::{PipelineError, RunSummary};
pub use text::{PdfTextSource, TextError, TextSource};
