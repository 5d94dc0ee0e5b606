//! BeverageStore — option lists, current selections, and beverage records.
//!
//! The store mirrors a document database into in-memory state:
//! - Loads the base, creamer, and syrup lists, seeding defaults into any
//!   collection that is empty
//! - Tracks one current selection per option category
//! - Composes beverages from the current selections and persists them
//! - Restores selections from a previously made beverage

use brew_core::{BEVERAGES_COLLECTION, Beverage, BeverageItem, DefaultCatalog, OptionCategory};
use brew_state::{Document, DocumentDb};
use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

/// Loaded items and current selection for one option category.
#[derive(Debug, Default)]
struct OptionSlot {
    items: Vec<BeverageItem>,
    current: Option<BeverageItem>,
}

/// Client-side beverage state backed by a document database.
///
/// Mutations take `&mut self`; the store assumes a single writer.
pub struct BeverageStore<D> {
    db: D,
    /// Defaults written into empty option collections.
    catalog: DefaultCatalog,
    bases: OptionSlot,
    creamers: OptionSlot,
    syrups: OptionSlot,
    /// Beverages in natural storage order, then in creation order.
    beverages: Vec<Beverage>,
    /// Last id passed to `show_beverage`, matched or not.
    selected_beverage_id: String,
    initialized: bool,
}

impl<D: DocumentDb> BeverageStore<D> {
    /// Create an uninitialized store. Nothing is read until [`init`](Self::init).
    pub fn new(db: D, catalog: DefaultCatalog) -> Self {
        Self {
            db,
            catalog,
            bases: OptionSlot::default(),
            creamers: OptionSlot::default(),
            syrups: OptionSlot::default(),
            beverages: Vec::new(),
            selected_beverage_id: String::new(),
            initialized: false,
        }
    }

    /// Return the authoritative items for `category`, seeding `defaults`
    /// first if the collection is empty.
    ///
    /// Two concurrent first loads may both seed. Item ids are fixed, so the
    /// second pass rewrites identical documents.
    pub async fn ensure_collection(
        &self,
        category: OptionCategory,
        defaults: &[BeverageItem],
    ) -> StoreResult<Vec<BeverageItem>> {
        let collection = category.collection();
        let existing = self.db.list_documents(collection).await?;

        if existing.is_empty() {
            for item in defaults {
                let data = serde_json::to_value(item).map_err(StoreError::Encode)?;
                self.db.set_document(collection, &item.id, &data).await?;
            }
            info!(%collection, count = defaults.len(), "seeded default options");
        }

        let docs = self.db.list_documents(collection).await?;
        let items = docs
            .iter()
            .map(|doc| decode::<BeverageItem>(collection, doc))
            .collect::<StoreResult<Vec<_>>>()?;
        debug!(%collection, count = items.len(), "options loaded");
        Ok(items)
    }

    /// Load all option lists and saved beverages, replacing in-memory state.
    ///
    /// Current selections reset to the first item of each list, or `None`
    /// for an empty list. The selected beverage id is left as is. Every call
    /// goes back to the database.
    pub async fn init(&mut self) -> StoreResult<()> {
        let bases = self
            .ensure_collection(OptionCategory::Base, &self.catalog.bases)
            .await?;
        let creamers = self
            .ensure_collection(OptionCategory::Creamer, &self.catalog.creamers)
            .await?;
        let syrups = self
            .ensure_collection(OptionCategory::Syrup, &self.catalog.syrups)
            .await?;

        let docs = self.db.list_documents(BEVERAGES_COLLECTION).await?;
        let beverages = docs
            .iter()
            .map(|doc| {
                decode::<Beverage>(BEVERAGES_COLLECTION, doc).map(|b| b.with_id(doc.id.clone()))
            })
            .collect::<StoreResult<Vec<_>>>()?;

        self.bases = OptionSlot::with_items(bases);
        self.creamers = OptionSlot::with_items(creamers);
        self.syrups = OptionSlot::with_items(syrups);
        self.beverages = beverages;
        self.initialized = true;

        info!(
            bases = self.bases.items.len(),
            creamers = self.creamers.items.len(),
            syrups = self.syrups.items.len(),
            beverages = self.beverages.len(),
            "beverage store initialized"
        );
        Ok(())
    }

    /// Save a beverage built from the current selections.
    ///
    /// Returns `Ok(None)` without touching the database when any selection
    /// is unset.
    pub async fn make_beverage(&mut self) -> StoreResult<Option<Beverage>> {
        let (Some(base), Some(creamer), Some(syrup)) = (
            &self.bases.current,
            &self.creamers.current,
            &self.syrups.current,
        ) else {
            debug!("incomplete selection, no beverage made");
            return Ok(None);
        };

        let beverage = Beverage::compose(base, creamer, syrup, Utc::now());
        let data = serde_json::to_value(&beverage).map_err(StoreError::Encode)?;
        let id = self.db.add_document(BEVERAGES_COLLECTION, &data).await?;
        let beverage = beverage.with_id(id);

        info!(id = ?beverage.id, beverage = %beverage.describe(), "beverage made");
        self.beverages.push(beverage.clone());
        Ok(Some(beverage))
    }

    /// Select a beverage and copy its components into the current selections.
    ///
    /// The id is recorded even when no beverage matches; selections are
    /// then left unchanged.
    pub fn show_beverage(&mut self, beverage_id: &str) -> Option<&Beverage> {
        self.selected_beverage_id = beverage_id.to_string();

        let Some(index) = self
            .beverages
            .iter()
            .position(|b| b.id.as_deref() == Some(beverage_id))
        else {
            debug!(%beverage_id, "no such beverage");
            return None;
        };

        let beverage = &self.beverages[index];
        self.bases.current = Some(beverage.base.clone());
        self.creamers.current = Some(beverage.creamer.clone());
        self.syrups.current = Some(beverage.syrup.clone());
        Some(&self.beverages[index])
    }

    /// Assign a current selection directly, without validation.
    pub fn set_current(&mut self, category: OptionCategory, item: Option<BeverageItem>) {
        self.slot_mut(category).current = item;
    }

    /// Select the loaded item with `item_id` for `category`.
    pub fn select_option(
        &mut self,
        category: OptionCategory,
        item_id: &str,
    ) -> StoreResult<&BeverageItem> {
        let slot = self.slot_mut(category);
        let item = slot
            .items
            .iter()
            .find(|item| item.id == item_id)
            .cloned()
            .ok_or_else(|| StoreError::UnknownOption {
                category,
                id: item_id.to_string(),
            })?;
        Ok(slot.current.insert(item))
    }
}

impl<D> BeverageStore<D> {
    pub fn db(&self) -> &D {
        &self.db
    }

    pub fn catalog(&self) -> &DefaultCatalog {
        &self.catalog
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn bases(&self) -> &[BeverageItem] {
        &self.bases.items
    }

    pub fn creamers(&self) -> &[BeverageItem] {
        &self.creamers.items
    }

    pub fn syrups(&self) -> &[BeverageItem] {
        &self.syrups.items
    }

    /// Loaded items for a category.
    pub fn options(&self, category: OptionCategory) -> &[BeverageItem] {
        &self.slot(category).items
    }

    /// Current selection for a category.
    pub fn current(&self, category: OptionCategory) -> Option<&BeverageItem> {
        self.slot(category).current.as_ref()
    }

    pub fn beverages(&self) -> &[Beverage] {
        &self.beverages
    }

    pub fn selected_beverage_id(&self) -> &str {
        &self.selected_beverage_id
    }

    /// The beverage matching the selected id, if loaded.
    pub fn selected_beverage(&self) -> Option<&Beverage> {
        self.beverages
            .iter()
            .find(|b| b.id.as_deref() == Some(self.selected_beverage_id.as_str()))
    }

    fn slot(&self, category: OptionCategory) -> &OptionSlot {
        match category {
            OptionCategory::Base => &self.bases,
            OptionCategory::Creamer => &self.creamers,
            OptionCategory::Syrup => &self.syrups,
        }
    }

    fn slot_mut(&mut self, category: OptionCategory) -> &mut OptionSlot {
        match category {
            OptionCategory::Base => &mut self.bases,
            OptionCategory::Creamer => &mut self.creamers,
            OptionCategory::Syrup => &mut self.syrups,
        }
    }
}

impl OptionSlot {
    fn with_items(items: Vec<BeverageItem>) -> Self {
        let current = items.first().cloned();
        Self { items, current }
    }
}

fn decode<T: DeserializeOwned>(collection: &str, doc: &Document) -> StoreResult<T> {
    doc.parse().map_err(|source| StoreError::Malformed {
        collection: collection.to_string(),
        id: doc.id.clone(),
        source,
    })
}
