//! Document model and the `DocumentDb` trait.
//!
//! A document database holds named collections of JSON documents, each
//! addressed by a string id. Only three operations are needed: list a
//! whole collection, add a document under a generated id, and set a
//! document at an explicit id.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StateResult;

/// A stored document: its id plus its JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

impl Document {
    /// Deserialize the body into a typed value.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.clone())
    }
}

/// Async access to a document database.
///
/// Implementations never retry; every failure is returned to the caller.
pub trait DocumentDb: Send + Sync {
    /// List every document in `collection`, in natural storage order.
    ///
    /// A collection that has never been written lists as empty.
    fn list_documents(
        &self,
        collection: &str,
    ) -> impl Future<Output = StateResult<Vec<Document>>> + Send;

    /// Store `data` under a freshly generated id and return that id.
    fn add_document(
        &self,
        collection: &str,
        data: &Value,
    ) -> impl Future<Output = StateResult<String>> + Send;

    /// Create or overwrite the document at `id`.
    fn set_document(
        &self,
        collection: &str,
        id: &str,
        data: &Value,
    ) -> impl Future<Output = StateResult<()>> + Send;
}
