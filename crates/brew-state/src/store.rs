//! DocumentStore — redb-backed document persistence.
//!
//! Each collection maps to one redb table. Documents are JSON-serialized
//! into the `&[u8]` value column and keyed by document id, so listing a
//! collection yields documents in ascending id order. Generated ids are
//! UUID v7, which sort by creation time. The store supports both on-disk
//! and in-memory backends (the latter for testing).

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableError};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use brew_core::COLLECTIONS;

use crate::document::{Document, DocumentDb};
use crate::error::{StateError, StateResult};
use crate::tables;

/// Convert any `Display` error into a `StateError` variant via a closure factory.
macro_rules! map_err {
    ($variant:ident) => {
        |e| StateError::$variant(e.to_string())
    };
}

/// Thread-safe document store backed by redb.
#[derive(Clone)]
pub struct DocumentStore {
    db: Arc<Database>,
}

impl DocumentStore {
    /// Open (or create) a persistent document store at the given path.
    pub fn open(path: &Path) -> StateResult<Self> {
        let db = Database::create(path).map_err(map_err!(Open))?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        debug!(?path, "document store opened");
        Ok(store)
    }

    /// Create an ephemeral in-memory document store (for testing).
    pub fn open_in_memory() -> StateResult<Self> {
        let backend = redb::backends::InMemoryBackend::new();
        let db = Database::builder()
            .create_with_backend(backend)
            .map_err(map_err!(Open))?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        debug!("in-memory document store opened");
        Ok(store)
    }

    /// Create the known collections if they don't exist yet.
    fn ensure_tables(&self) -> StateResult<()> {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        // Opening a table in a write transaction creates it if absent.
        for name in COLLECTIONS {
            txn.open_table(tables::collection(name))
                .map_err(map_err!(Table))?;
        }
        txn.commit().map_err(map_err!(Transaction))?;
        Ok(())
    }

    /// List all documents in a collection.
    pub fn list(&self, collection: &str) -> StateResult<Vec<Document>> {
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = match txn.open_table(tables::collection(collection)) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
            Err(e) => return Err(StateError::Table(e.to_string())),
        };
        let mut results = Vec::new();
        for entry in table.iter().map_err(map_err!(Read))? {
            let (key, value) = entry.map_err(map_err!(Read))?;
            let data: Value =
                serde_json::from_slice(value.value()).map_err(map_err!(Deserialize))?;
            results.push(Document {
                id: key.value().to_string(),
                data,
            });
        }
        Ok(results)
    }

    /// Insert or overwrite a document at an explicit id.
    pub fn put(&self, collection: &str, id: &str, data: &Value) -> StateResult<()> {
        let value = serde_json::to_vec(data).map_err(map_err!(Serialize))?;
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        {
            let mut table = txn
                .open_table(tables::collection(collection))
                .map_err(map_err!(Table))?;
            table
                .insert(id, value.as_slice())
                .map_err(map_err!(Write))?;
        }
        txn.commit().map_err(map_err!(Transaction))?;
        debug!(%collection, %id, "document stored");
        Ok(())
    }

    /// Insert a document under a generated id. Returns the id.
    pub fn insert(&self, collection: &str, data: &Value) -> StateResult<String> {
        let id = Uuid::now_v7().to_string();
        self.put(collection, &id, data)?;
        Ok(id)
    }
}

impl DocumentDb for DocumentStore {
    async fn list_documents(&self, collection: &str) -> StateResult<Vec<Document>> {
        self.list(collection)
    }

    async fn add_document(&self, collection: &str, data: &Value) -> StateResult<String> {
        self.insert(collection, data)
    }

    async fn set_document(&self, collection: &str, id: &str, data: &Value) -> StateResult<()> {
        self.put(collection, id, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(id: &str, name: &str) -> Value {
        json!({ "id": id, "name": name, "color": "#000000" })
    }

    #[test]
    fn known_collections_start_empty() {
        let store = DocumentStore::open_in_memory().unwrap();
        for name in COLLECTIONS {
            assert!(store.list(name).unwrap().is_empty());
        }
    }

    #[test]
    fn unknown_collection_lists_empty() {
        let store = DocumentStore::open_in_memory().unwrap();
        assert!(store.list("toppings").unwrap().is_empty());
    }

    #[test]
    fn put_and_list() {
        let store = DocumentStore::open_in_memory().unwrap();
        store.put("bases", "b2", &item("b2", "Green Tea")).unwrap();
        store.put("bases", "b1", &item("b1", "Black Tea")).unwrap();

        let docs = store.list("bases").unwrap();
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["b1", "b2"]);
        assert_eq!(docs[0].data["name"], "Black Tea");
    }

    #[test]
    fn put_overwrites_same_id() {
        let store = DocumentStore::open_in_memory().unwrap();
        store.put("syrups", "s1", &item("s1", "Vanilla")).unwrap();
        store.put("syrups", "s1", &item("s1", "Vanilla")).unwrap();
        store.put("syrups", "s1", &item("s1", "French Vanilla")).unwrap();

        let docs = store.list("syrups").unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].data["name"], "French Vanilla");
    }

    #[test]
    fn insert_generates_ordered_ids() {
        let store = DocumentStore::open_in_memory().unwrap();
        let first = store.insert("beverages", &json!({ "n": 1 })).unwrap();
        let second = store.insert("beverages", &json!({ "n": 2 })).unwrap();
        assert_ne!(first, second);

        let docs = store.list("beverages").unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, first);
        assert_eq!(docs[1].id, second);
    }

    #[test]
    fn collections_are_isolated() {
        let store = DocumentStore::open_in_memory().unwrap();
        store.put("bases", "x", &item("x", "Base")).unwrap();
        store.put("creamers", "x", &item("x", "Creamer")).unwrap();

        assert_eq!(store.list("bases").unwrap()[0].data["name"], "Base");
        assert_eq!(store.list("creamers").unwrap()[0].data["name"], "Creamer");
        assert!(store.list("syrups").unwrap().is_empty());
    }

    #[test]
    fn clones_share_the_database() {
        let store = DocumentStore::open_in_memory().unwrap();
        let other = store.clone();
        other.put("bases", "b1", &item("b1", "Black Tea")).unwrap();
        assert_eq!(store.list("bases").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn trait_operations_delegate() {
        let store = DocumentStore::open_in_memory().unwrap();
        store
            .set_document("creamers", "c2", &item("c2", "Milk"))
            .await
            .unwrap();
        let id = store
            .add_document("beverages", &json!({ "base": "b1" }))
            .await
            .unwrap();

        let creamers = store.list_documents("creamers").await.unwrap();
        assert_eq!(creamers[0].id, "c2");

        let beverages = store.list_documents("beverages").await.unwrap();
        assert_eq!(beverages[0].id, id);
        assert_eq!(beverages[0].data["base"], "b1");
    }

    #[test]
    fn document_parse_into_type() {
        #[derive(serde::Deserialize)]
        struct Named {
            name: String,
        }
        let doc = Document {
            id: "b1".to_string(),
            data: item("b1", "Black Tea"),
        };
        let named: Named = doc.parse().unwrap();
        assert_eq!(named.name, "Black Tea");
    }

    // ── Persistence (on-disk) ──────────────────────────────────────

    #[test]
    fn persistence_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.redb");

        {
            let store = DocumentStore::open(&db_path).unwrap();
            store.put("bases", "b3", &item("b3", "Coffee")).unwrap();
        }

        // Reopen the same database file.
        let store = DocumentStore::open(&db_path).unwrap();
        let docs = store.list("bases").unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].data["name"], "Coffee");
    }
}
