pub mod firestore;
pub mod path;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use firestore::{FirestoreCredentials, FirestoreStore};
pub use path::DocumentPath;

/// Errors from the document store client
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no store credentials configured")]
    CredentialsMissing,

    #[error("store rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("unexpected store response: {0}")]
    UnexpectedResponse(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// External hierarchical document database, addressed by
/// collection/document paths.
///
/// The production implementation speaks the Firestore REST API; tests
/// substitute in-memory fakes.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Append a record to `collection`, returning the server-generated
    /// document id. A single insert with no uniqueness check and no
    /// idempotency key; retried submissions create duplicate documents.
    async fn insert(&self, collection: &DocumentPath, record: &Value) -> Result<String, StoreError>;
}
