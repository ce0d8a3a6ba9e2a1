//! Navigation tree loading from JSON or YAML side-nav config.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use super::error::NavError;
use super::types::NavigationTree;

impl NavigationTree {
    /// Parse a tree from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, NavError> {
        let tree: NavigationTree = serde_json::from_str(json)?;
        tree.warn_duplicate_keys();
        Ok(tree)
    }

    /// Parse a tree from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, NavError> {
        let tree: NavigationTree = serde_yml::from_str(yaml)?;
        tree.warn_duplicate_keys();
        Ok(tree)
    }

    /// Duplicate event keys make selection correlation ambiguous; the first
    /// entry in render order wins.
    fn warn_duplicate_keys(&self) {
        let mut seen = HashSet::new();
        for key in self.event_keys() {
            if !seen.insert(key) {
                warn!(event_key = %key, "duplicate navigation event key");
            }
        }
    }
}

/// Load a navigation tree from disk, choosing the parser by file extension.
pub fn load_navigation(path: &Path) -> Result<NavigationTree, NavError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if !matches!(extension.as_str(), "json" | "yaml" | "yml") {
        return Err(NavError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| NavError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let tree = if extension == "json" {
        NavigationTree::from_json(&contents)?
    } else {
        NavigationTree::from_yaml(&contents)?
    };

    debug!(path = %path.display(), items = tree.len(), "loaded navigation tree");
    Ok(tree)
}
