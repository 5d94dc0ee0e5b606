//! Default option lists used to seed empty collections.
//!
//! The same three lists are available from the JSON data files compiled
//! into the crate ([`DefaultCatalog::bundled`]), from literals in code
//! ([`DefaultCatalog::inline`]), or from a directory on disk holding
//! `bases.json`, `creamers.json` and `syrups.json`
//! ([`DefaultCatalog::from_dir`]).

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::types::{BeverageItem, OptionCategory};

const BASES_JSON: &str = include_str!("../data/bases.json");
const CREAMERS_JSON: &str = include_str!("../data/creamers.json");
const SYRUPS_JSON: &str = include_str!("../data/syrups.json");

/// Default items for each option category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultCatalog {
    pub bases: Vec<BeverageItem>,
    pub creamers: Vec<BeverageItem>,
    pub syrups: Vec<BeverageItem>,
}

impl DefaultCatalog {
    /// Parse the data files bundled with the crate.
    pub fn bundled() -> Result<Self, ConfigError> {
        Ok(Self {
            bases: parse_items("bases.json", BASES_JSON)?,
            creamers: parse_items("creamers.json", CREAMERS_JSON)?,
            syrups: parse_items("syrups.json", SYRUPS_JSON)?,
        })
    }

    /// The default lists written out in code.
    pub fn inline() -> Self {
        Self {
            bases: vec![
                BeverageItem::new("b1", "Black Tea", "#8B4513"),
                BeverageItem::new("b2", "Green Tea", "#C8E6C9"),
                BeverageItem::new("b3", "Coffee", "#6F4E37"),
            ],
            creamers: vec![
                BeverageItem::new("c1", "No Cream", "transparent"),
                BeverageItem::new("c2", "Milk", "#FFFFFF"),
                BeverageItem::new("c3", "Cream", "#F5F5DC"),
                BeverageItem::new("c4", "Half & Half", "#FFFACD"),
            ],
            syrups: vec![
                BeverageItem::new("s1", "No Syrup", "#C6C6C6"),
                BeverageItem::new("s2", "Vanilla", "#FFEFD5"),
                BeverageItem::new("s3", "Caramel", "#DAA520"),
                BeverageItem::new("s4", "Hazelnut", "#6B4423"),
            ],
        }
    }

    /// Load `bases.json`, `creamers.json` and `syrups.json` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let read = |category: OptionCategory| -> Result<Vec<BeverageItem>, ConfigError> {
            let file = format!("{}.json", category.collection());
            let path = dir.join(&file);
            let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            parse_items(&file, &content)
        };

        let catalog = Self {
            bases: read(OptionCategory::Base)?,
            creamers: read(OptionCategory::Creamer)?,
            syrups: read(OptionCategory::Syrup)?,
        };
        debug!(dir = %dir.display(), "catalog loaded from directory");
        Ok(catalog)
    }

    /// Default items for one category.
    pub fn items(&self, category: OptionCategory) -> &[BeverageItem] {
        match category {
            OptionCategory::Base => &self.bases,
            OptionCategory::Creamer => &self.creamers,
            OptionCategory::Syrup => &self.syrups,
        }
    }
}

fn parse_items(file: &str, content: &str) -> Result<Vec<BeverageItem>, ConfigError> {
    serde_json::from_str(content).map_err(|source| ConfigError::Catalog {
        file: file.to_string(),
        source,
    })
}
