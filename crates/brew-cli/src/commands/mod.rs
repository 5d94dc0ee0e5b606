pub mod beverages;
pub mod config;
pub mod options;

use std::path::PathBuf;

use anyhow::{Context, Result};
use brew_core::BrewConfig;
use brew_state::DocumentStore;
use brew_store::BeverageStore;
use clap::ValueEnum;
use tracing::debug;

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Where a command finds its configuration and database.
pub struct StoreTarget {
    pub config: PathBuf,
    pub db: Option<PathBuf>,
}

/// Open the configured database and run store initialization.
pub async fn open_store(target: &StoreTarget) -> Result<BeverageStore<DocumentStore>> {
    let config = BrewConfig::load_or_default(&target.config)
        .with_context(|| format!("failed to load {}", target.config.display()))?;
    let catalog = config.load_catalog().context("failed to load default catalog")?;

    let db_path = target.db.as_deref().or(config.database_path());
    let db = match db_path {
        Some(path) => DocumentStore::open(path)
            .with_context(|| format!("failed to open database {}", path.display()))?,
        None => {
            debug!("no database path configured, using in-memory store");
            DocumentStore::open_in_memory()?
        }
    };

    let mut store = BeverageStore::new(db, catalog);
    store.init().await.context("failed to initialize beverage store")?;
    Ok(store)
}


#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::OptionCategory;

    #[tokio::test]
    async fn open_store_without_config_uses_bundled_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&testing::target_in(dir.path())).await.unwrap();

        assert!(store.is_initialized());
        assert_eq!(store.current(OptionCategory::Base).unwrap().name, "Black Tea");
    }

    #[tokio::test]
    async fn open_store_reads_catalog_dir_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir(&data).unwrap();
        for (file, body) in [
            ("bases.json", r##"[{"id":"x1","name":"Chai","color":"#C19A6B"}]"##),
            ("creamers.json", "[]"),
            ("syrups.json", "[]"),
        ] {
            std::fs::write(data.join(file), body).unwrap();
        }
        let config = dir.path().join("brew.toml");
        std::fs::write(
            &config,
            format!("[catalog]\nsource = \"dir\"\ndir = {:?}\n", data.display().to_string()),
        )
        .unwrap();

        let target = StoreTarget { config, db: None };
        let store = open_store(&target).await.unwrap();
        assert_eq!(store.bases()[0].name, "Chai");
        assert!(store.current(OptionCategory::Creamer).is_none());
    }

    #[tokio::test]
    async fn open_store_rejects_bad_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("brew.toml");
        std::fs::write(&config, "[catalog]\nsource = \"cloud\"\n").unwrap();

        let target = StoreTarget { config, db: None };
        assert!(open_store(&target).await.is_err());
    }
}
