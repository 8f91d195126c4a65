//! Catalog configuration from TOML (`[catalog]` section)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Include the built-in curricula
    pub builtin: bool,
    /// Additional catalog files (`.json` or `.toml`), loaded in order.
    /// Relative entries are resolved against the declaring config file's
    /// directory by the loader.
    pub paths: Vec<PathBuf>,
    /// Promote validation warnings to errors
    pub strict: bool,
    /// Catalog used when a command does not name one
    pub default: Option<String>,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            paths: Vec::new(),
            strict: false,
            default: None,
        }
    }
}

impl FileCatalogConfig {
    /// Join every relative catalog path onto `dir`
    pub fn resolve_relative_to(&mut self, dir: &Path) {
        for path in &mut self.paths {
            if path.is_relative() {
                *path = dir.join(&*path);
            }
        }
    }
}
