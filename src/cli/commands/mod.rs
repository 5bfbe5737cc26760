//! CLI command implementations

pub mod completions;
pub mod list;
pub mod run;
pub mod show;

use miette::Result;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::Config;

/// Load the project config and apply command-line directory overrides
pub(crate) fn load_config(
    global: &GlobalOpts,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<Config> {
    let mut config = Config::load(&global.root)?;
    if let Some(input) = input {
        config.input_dir = input;
    }
    if let Some(output) = output {
        config.output_dir = output;
    }
    Ok(config)
}
