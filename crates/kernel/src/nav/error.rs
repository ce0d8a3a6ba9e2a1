//! Navigation data error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading navigation data.
///
/// Visibility resolution itself never fails; these only cover getting the
/// tree off disk and into memory.
#[derive(Debug, Error)]
pub enum NavError {
    /// The navigation file could not be read.
    #[error("failed to read navigation data from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid navigation JSON.
    #[error("invalid navigation JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not valid navigation YAML.
    #[error("invalid navigation YAML: {0}")]
    Yaml(#[from] serde_yml::Error),

    /// The file extension is neither `.json` nor `.yaml`/`.yml`.
    #[error("unsupported navigation data format '{extension}' in {}, expected .json, .yaml or .yml", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },
}
