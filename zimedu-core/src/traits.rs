//! Core trait definitions

use crate::error::ZimEduResult;
use crate::types::StoredDocument;
use async_trait::async_trait;

/// Document database with named collections and generated ids
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Append a document to `collection` and return its generated id
    async fn add(&self, collection: &str, document: serde_json::Value) -> ZimEduResult<String>;

    /// Read a single document back
    async fn get(&self, collection: &str, id: &str) -> ZimEduResult<Option<StoredDocument>>;

    /// All documents of `collection`, oldest first
    async fn list(&self, collection: &str) -> ZimEduResult<Vec<StoredDocument>>;
}
