//! brew.toml configuration parser.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::DefaultCatalog;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrewConfig {
    pub database: Option<DatabaseConfig>,
    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// redb file. In-memory when absent.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: CatalogSource,
    pub dir: Option<PathBuf>,
}

/// Where the default option lists come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    #[default]
    Bundled,
    Inline,
    Dir,
}

impl BrewConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: BrewConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Read `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.is_file() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// A starter brew.toml: on-disk database, bundled catalog.
    pub fn scaffold() -> Self {
        BrewConfig {
            database: Some(DatabaseConfig {
                path: Some(PathBuf::from("brew.redb")),
            }),
            catalog: Some(CatalogConfig {
                source: CatalogSource::Bundled,
                dir: None,
            }),
        }
    }

    pub fn database_path(&self) -> Option<&Path> {
        self.database.as_ref()?.path.as_deref()
    }

    /// Resolve the configured catalog source into default lists.
    pub fn load_catalog(&self) -> Result<DefaultCatalog, ConfigError> {
        let Some(catalog) = &self.catalog else {
            return DefaultCatalog::bundled();
        };
        match catalog.source {
            CatalogSource::Bundled => DefaultCatalog::bundled(),
            CatalogSource::Inline => Ok(DefaultCatalog::inline()),
            CatalogSource::Dir => {
                let dir = catalog.dir.as_ref().ok_or(ConfigError::MissingCatalogDir)?;
                DefaultCatalog::from_dir(dir)
            }
        }
    }
}
