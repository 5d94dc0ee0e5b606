//! Beverage store error types.

use brew_core::OptionCategory;
use thiserror::Error;

/// Errors that can occur during beverage store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store error: {0}")]
    State(#[from] brew_state::StateError),

    #[error("malformed document {collection}/{id}: {source}")]
    Malformed {
        collection: String,
        id: String,
        source: serde_json::Error,
    },

    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("unknown {category} option: {id}")]
    UnknownOption {
        category: OptionCategory,
        id: String,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
