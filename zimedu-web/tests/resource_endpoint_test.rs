//! Cloud add-resource endpoint

mod helpers;

use helpers::{spawn_app, spawn_app_with_store};
use serde_json::{json, Value};
use std::sync::Arc;
use zimedu_applications::{MemoryDocumentStore, RESOURCES_COLLECTION};
use zimedu_core::{
    async_trait, storage_error, DocumentStore, StoredDocument, ZimEduResult,
};

/// Store whose writes always fail
struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn add(&self, _collection: &str, _document: Value) -> ZimEduResult<String> {
        Err(storage_error!("permission denied on resources", "failing_store"))
    }

    async fn get(&self, _collection: &str, _id: &str) -> ZimEduResult<Option<StoredDocument>> {
        Ok(None)
    }

    async fn list(&self, _collection: &str) -> ZimEduResult<Vec<StoredDocument>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_add_resource_returns_created_with_id() {
    let store = Arc::new(MemoryDocumentStore::new());
    let app = spawn_app_with_store(store.clone()).await;

    let response = app
        .post_resource(&json!({ "title": "T", "type": "video", "url": "http://x" }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body = response.text().await.unwrap();
    let id = body
        .strip_prefix("Resource added with ID: ")
        .expect("unexpected body");
    assert_eq!(id.len(), 20);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

    let stored = store.get(RESOURCES_COLLECTION, id).await.unwrap().unwrap();
    assert_eq!(stored.data, json!({ "title": "T", "type": "video", "url": "http://x" }));
}

#[tokio::test]
async fn test_fields_are_not_validated() {
    let store = Arc::new(MemoryDocumentStore::new());
    let app = spawn_app_with_store(store.clone()).await;

    let response = app.post_resource(&json!({})).await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.post_resource(&json!({ "title": "" })).await;
    assert_eq!(response.status().as_u16(), 201);
    assert_eq!(store.count(RESOURCES_COLLECTION).await, 2);
}

#[tokio::test]
async fn test_each_call_appends_a_new_document() {
    let store = Arc::new(MemoryDocumentStore::new());
    let app = spawn_app_with_store(store.clone()).await;
    let body = json!({ "title": "Same", "type": "quiz", "url": "http://same" });

    let first = app.post_resource(&body).await.text().await.unwrap();
    let second = app.post_resource(&body).await.text().await.unwrap();

    assert_ne!(first, second);
    assert_eq!(store.count(RESOURCES_COLLECTION).await, 2);
}

#[tokio::test]
async fn test_failed_write_returns_bad_request_with_message() {
    let app = spawn_app_with_store(Arc::new(FailingStore)).await;

    let response = app
        .post_resource(&json!({ "title": "T", "type": "video", "url": "http://x" }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response.text().await.unwrap(),
        "Error adding resource: permission denied on resources"
    );
}

#[tokio::test]
async fn test_malformed_body_returns_bad_request() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(format!("{}/api/resources", app.address))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert!(response
        .text()
        .await
        .unwrap()
        .starts_with("Error adding resource: "));
}
