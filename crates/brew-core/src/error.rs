//! Error types for configuration and catalog loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading `brew.toml` or a default catalog.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("invalid catalog file {file}: {source}")]
    Catalog {
        file: String,
        source: serde_json::Error,
    },

    #[error("catalog source is \"dir\" but no [catalog].dir is set")]
    MissingCatalogDir,
}
