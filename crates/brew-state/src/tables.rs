//! redb table definitions for the document store.
//!
//! Each collection is its own table with `&str` document-id keys and
//! `&[u8]` values (JSON document bodies).

use redb::TableDefinition;

/// Table definition for a named collection.
pub fn collection(name: &str) -> TableDefinition<'_, &'static str, &'static [u8]> {
    TableDefinition::new(name)
}
