//! Document Store - in-memory collections
//!
//! Stands in for the hosted document database the resource endpoint writes
//! to. Documents live only as long as the process.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use zimedu_core::{DocumentStore, StoredDocument, ZimEduResult};

/// Length of generated document ids
pub const DOCUMENT_ID_LEN: usize = 20;

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a 20-character alphanumeric document id
pub fn generate_document_id() -> String {
    (0..DOCUMENT_ID_LEN)
        .map(|_| ID_ALPHABET[fastrand::usize(..ID_ALPHABET.len())] as char)
        .collect()
}

/// [`DocumentStore`] keeping every collection in memory
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in `collection`
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn add(&self, collection: &str, document: serde_json::Value) -> ZimEduResult<String> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();

        let mut id = generate_document_id();
        while documents.iter().any(|d| d.id == id) {
            id = generate_document_id();
        }

        documents.push(StoredDocument {
            id: id.clone(),
            data: document,
            created_at: Utc::now(),
        });

        debug!("Added document {} to collection {}", id, collection);
        Ok(id)
    }

    async fn get(&self, collection: &str, id: &str) -> ZimEduResult<Option<StoredDocument>> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id).cloned()))
    }

    async fn list(&self, collection: &str) -> ZimEduResult<Vec<StoredDocument>> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }
}
