//! Configuration management with layered hierarchy
//!
//! 1. Built-in defaults (`samples/` in, `data/cutsheets/` out)
//! 2. Project file `<root>/cutsheet.yaml`
//! 3. Command-line overrides applied by the caller
//!
//! The resulting [`Config`] is passed explicitly through the pipeline.

use miette::Diagnostic;
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

use crate::entities::FileKind;
use crate::yaml::diagnostics::YamlSyntaxError;

/// Name of the optional project config file under the root
pub const CONFIG_FILE: &str = "cutsheet.yaml";

/// Name of the batch index written into the output directory
pub const INDEX_FILE: &str = "index.json";

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    #[diagnostic(code(cutsheet::config::read))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),
}

/// Keys accepted in `cutsheet.yaml`; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    document_extensions: Option<Vec<String>>,
    companion_extensions: Option<Vec<String>>,
}

/// Resolved settings for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Project root; output paths are rendered relative to it
    pub root: PathBuf,

    /// Directory scanned for cut sheets (relative paths resolve against `root`)
    pub input_dir: PathBuf,

    /// Directory receiving `<stem>.json` files and `index.json`
    pub output_dir: PathBuf,

    /// Extensions of content-parsed documents, lowercase without dot
    pub document_extensions: Vec<String>,

    /// Extensions of linking-only companion files, lowercase without dot
    pub companion_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            input_dir: PathBuf::from("samples"),
            output_dir: PathBuf::from("data/cutsheets"),
            document_extensions: vec!["pdf".to_string()],
            companion_extensions: vec!["mpf".to_string()],
        }
    }
}

impl Config {
    /// Defaults rooted at `root`, without reading any file
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load configuration for `root`, merging `cutsheet.yaml` if it exists
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::with_root(root);

        let path = root.join(CONFIG_FILE);
        if path.is_file() {
            let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            if contents.trim().is_empty() {
                return Ok(config);
            }
            let file: ConfigFile = serde_yml::from_str(&contents).map_err(|e| {
                YamlSyntaxError::from_serde_error(&e, &contents, &path.display().to_string())
            })?;
            config.merge(file);
        }

        Ok(config)
    }

    /// Merge a config file into this one (file takes precedence)
    fn merge(&mut self, other: ConfigFile) {
        if let Some(input_dir) = other.input_dir {
            self.input_dir = input_dir;
        }
        if let Some(output_dir) = other.output_dir {
            self.output_dir = output_dir;
        }
        if let Some(exts) = other.document_extensions {
            self.document_extensions = normalize_extensions(exts);
        }
        if let Some(exts) = other.companion_extensions {
            self.companion_extensions = normalize_extensions(exts);
        }
    }

    /// Absolute-or-root-relative input directory
    pub fn input_path(&self) -> PathBuf {
        self.root.join(&self.input_dir)
    }

    /// Absolute-or-root-relative output directory
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }

    /// Where the metadata for a document with this stem is written
    pub fn metadata_path(&self, stem: &str) -> PathBuf {
        self.output_path().join(format!("{}.json", stem))
    }

    pub fn index_path(&self) -> PathBuf {
        self.output_path().join(INDEX_FILE)
    }

    /// Classify a path by its extension, or `None` if the batch ignores it
    pub fn kind_of(&self, path: &Path) -> Option<FileKind> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        if self.document_extensions.iter().any(|e| *e == ext) {
            Some(FileKind::Document)
        } else if self.companion_extensions.iter().any(|e| *e == ext) {
            Some(FileKind::Companion)
        } else {
            None
        }
    }

    /// Render a path relative to the root with `/` separators.
    ///
    /// Paths outside the root are rendered as given.
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(relative) => relative
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part.to_string_lossy()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => path.to_string_lossy().into_owned(),
        }
    }
}

fn normalize_extensions(exts: Vec<String>) -> Vec<String> {
    exts.into_iter()
        .map(|e| e.trim_start_matches('.').to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.input_path(), Path::new("./samples"));
        assert_eq!(config.index_path(), Path::new("./data/cutsheets/index.json"));
        assert_eq!(
            config.metadata_path("WidgetA-12B"),
            Path::new("./data/cutsheets/WidgetA-12B.json")
        );
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::with_root(dir.path()));
    }

    #[test]
    fn test_load_merges_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "input_dir: incoming\ncompanion_extensions: [\".NC\", mpf]\n",
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("incoming"));
        assert_eq!(config.output_dir, PathBuf::from("data/cutsheets"));
        assert_eq!(config.companion_extensions, vec!["nc", "mpf"]);
        assert_eq!(config.document_extensions, vec!["pdf"]);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "input_dir: [unclosed\n").unwrap();
        assert!(matches!(
            Config::load(dir.path()),
            Err(ConfigError::Syntax(_))
        ));
    }

    #[test]
    fn test_load_rejects_unknown_key() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "inptu_dir: x\n").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn test_kind_of_is_case_insensitive() {
        let config = Config::default();
        assert_eq!(config.kind_of(Path::new("a/X-1A.PDF")), Some(FileKind::Document));
        assert_eq!(config.kind_of(Path::new("a/X-1A.MPF")), Some(FileKind::Companion));
        assert_eq!(config.kind_of(Path::new("a/X-1A.txt")), None);
        assert_eq!(config.kind_of(Path::new("a/README")), None);
    }

    #[test]
    fn test_display_path_relative_to_root() {
        let config = Config::with_root("/shop");
        assert_eq!(
            config.display_path(Path::new("/shop/samples/WidgetA-12B.pdf")),
            "samples/WidgetA-12B.pdf"
        );
        assert_eq!(
            config.display_path(Path::new("/elsewhere/a.pdf")),
            "/elsewhere/a.pdf"
        );

        let config = Config::default();
        assert_eq!(
            config.display_path(&config.input_path().join("A-1B.pdf")),
            "samples/A-1B.pdf"
        );
    }
}
