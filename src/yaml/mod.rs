//! YAML support for the project config file

pub mod diagnostics;
