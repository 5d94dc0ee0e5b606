//! brew-state — document store for brewlab.
//!
//! Defines the [`DocumentDb`] trait the beverage store talks to, and
//! [`DocumentStore`], its implementation on [redb](https://docs.rs/redb).
//!
//! # Architecture
//!
//! Every collection (`bases`, `creamers`, `syrups`, `beverages`) is a redb
//! table keyed by document id. Document bodies are JSON-serialized into
//! the `&[u8]` value column.
//!
//! `DocumentStore` is `Clone` + `Send` + `Sync` (backed by `Arc<Database>`)
//! and can be shared across async tasks.

pub mod document;
pub mod error;
pub mod store;
pub mod tables;

pub use document::{Document, DocumentDb};
pub use error::{StateError, StateResult};
pub use store::DocumentStore;
