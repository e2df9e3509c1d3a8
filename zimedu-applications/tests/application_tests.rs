//! Application root tests: session wiring, catalog façade and cloud writes

use serde_json::Value;
use std::sync::Arc;
use zimedu_applications::{
    ApplicationError, JoinOutcome, MemoryDocumentStore, NewResource, Setting,
    SignInForm, SignUpForm, ZimEduApplication, DOCUMENT_ID_LEN, RESOURCES_COLLECTION,
};
use zimedu_core::{
    async_trait, storage_error, DocumentStore, Role, SessionConfig, StoredDocument, ZimEduConfig,
    ZimEduResult,
};

fn instant_config() -> ZimEduConfig {
    ZimEduConfig {
        session: SessionConfig::instant(),
        ..ZimEduConfig::default()
    }
}

fn app() -> ZimEduApplication {
    ZimEduApplication::new(instant_config()).unwrap()
}

/// Store whose writes always fail
struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn add(&self, _collection: &str, _document: Value) -> ZimEduResult<String> {
        Err(storage_error!("quota exceeded", "failing_store"))
    }

    async fn get(&self, _collection: &str, _id: &str) -> ZimEduResult<Option<StoredDocument>> {
        Ok(None)
    }

    async fn list(&self, _collection: &str) -> ZimEduResult<Vec<StoredDocument>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_session_outside_scope_is_fatal() {
    let app = ZimEduApplication::builder(instant_config())
        .without_session()
        .build()
        .unwrap();

    let err = app.session().unwrap_err();
    assert!(matches!(err, ApplicationError::SessionScope { .. }));
    assert!(err.is_fatal());

    let form = SignInForm {
        email: "a@b.com".to_string(),
        password: "x".to_string(),
    };
    assert!(matches!(
        app.sign_in(&form).await,
        Err(ApplicationError::SessionScope { .. })
    ));
    assert!(app.home().await.is_err());
}

#[tokio::test]
async fn test_sign_in_through_form() {
    let app = app();

    let user = app
        .sign_in(&SignInForm {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.role, Role::Student);
    assert!(app.session().unwrap().is_authenticated());
}

#[tokio::test]
async fn test_sign_in_with_blank_fields_still_succeeds() {
    let app = app();

    let user = app.sign_in(&SignInForm::default()).await.unwrap();
    assert_eq!(user.email, "");
    assert_eq!(user.role, Role::Student);
    assert!(!user.id.is_empty());
    assert!(app.session().unwrap().is_authenticated());
}

#[tokio::test]
async fn test_incomplete_sign_up_never_reaches_session() {
    let app = app();

    let form = SignUpForm {
        name: "Rudo".to_string(),
        email: "rudo@example.com".to_string(),
        password: "one".to_string(),
        confirm_password: "two".to_string(),
        role: Role::Parent,
    };
    let err = app.sign_up(&form).await.unwrap_err();
    assert_eq!(err.to_string(), "Passwords do not match");
    assert!(!app.session().unwrap().is_authenticated());
}

#[tokio::test]
async fn test_sign_up_then_home_greets_user() {
    let app = app();
    assert_eq!(app.home().await.unwrap().greeting, "Hello, Student!");

    let form = SignUpForm {
        name: "tendai".to_string(),
        email: "t@school.zw".to_string(),
        password: "pw".to_string(),
        confirm_password: "pw".to_string(),
        role: Role::Teacher,
    };
    let user = app.sign_up(&form).await.unwrap();
    assert_eq!(user.role, Role::Teacher);

    let home = app.home().await.unwrap();
    assert_eq!(home.greeting, "Hello, tendai!");
    assert_eq!(home.avatar_initial, "T");

    app.sign_out().await.unwrap();
    assert_eq!(app.home().await.unwrap().greeting, "Hello, Student!");
}

#[tokio::test]
async fn test_rename_changes_greeting_and_question_author() {
    let app = app();
    app.sign_up(&SignUpForm {
        name: "Tendai".to_string(),
        email: "t@school.zw".to_string(),
        password: "pw".to_string(),
        confirm_password: "pw".to_string(),
        role: Role::Student,
    })
    .await
    .unwrap();

    assert!(matches!(
        app.rename("   ").await,
        Err(ApplicationError::Validation { .. })
    ));
    app.rename("Tee").await.unwrap();

    assert_eq!(app.home().await.unwrap().greeting, "Hello, Tee!");
    let posted = app.ask_question("Help with trig?", "homework").await.unwrap();
    assert_eq!(posted.author, "Tee");
}

#[tokio::test]
async fn test_anonymous_questions_use_fallback_author() {
    let app = app();

    let posted = app.ask_question("Where do I start?", "general").await.unwrap();
    assert_eq!(posted.author, "Student");

    let err = app.ask_question("", "general").await.unwrap_err();
    assert_eq!(err.to_string(), "Validation error: Please enter your question");
}

#[tokio::test]
async fn test_catalog_facade() {
    let app = app();

    assert_eq!(app.search_resources("", "all").await.len(), 4);
    assert_eq!(app.search_resources("", "worksheets").await.len(), 1);
    assert_eq!(app.tutors_for("english").await.len(), 1);
    assert_eq!(app.discussions("exams").await.len(), 1);

    let ticket = app.request_download(1).await.unwrap();
    assert_eq!(ticket.resource_id, 1);
    assert!(matches!(
        app.request_download(99).await,
        Err(ApplicationError::NotFound { .. })
    ));

    let booked = app.book_session(1, "Fractions").await.unwrap();
    assert_eq!(booked.tutor, "Dr. Sarah Mukamuri");
    assert_eq!(app.upcoming_sessions().await.len(), 3);

    assert!(matches!(
        app.join_session(3).await.unwrap(),
        JoinOutcome::Joining(_)
    ));
    assert!(app.join_session(42).await.is_err());
}

#[tokio::test]
async fn test_unseeded_catalog_is_empty() {
    let mut config = instant_config();
    config.catalog.seed_mock_data = false;
    let app = ZimEduApplication::new(config).unwrap();

    assert!(app.search_resources("", "all").await.is_empty());
    assert!(app.tutors_for("").await.is_empty());
    assert!(app.discussions("all").await.is_empty());
    assert_eq!(app.resource_categories().await.len(), 5);
}

#[tokio::test]
async fn test_settings_update() {
    let app = app();

    let settings = app.update_setting(Setting::CommunityUpdates, true).await;
    assert!(settings.community_updates);
    assert!(app.profile().await.settings().community_updates);
}

#[tokio::test]
async fn test_add_resource_writes_document() {
    let store = Arc::new(MemoryDocumentStore::new());
    let app = ZimEduApplication::builder(instant_config())
        .with_store(store.clone())
        .build()
        .unwrap();

    let id = app
        .add_resource(&NewResource {
            title: Some("T".to_string()),
            resource_type: Some("video".to_string()),
            url: Some("http://x".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(id.len(), DOCUMENT_ID_LEN);

    let stored = store.get(RESOURCES_COLLECTION, &id).await.unwrap().unwrap();
    assert_eq!(stored.data["title"], "T");
    assert_eq!(stored.data["type"], "video");
    assert_eq!(stored.data["url"], "http://x");
}

#[tokio::test]
async fn test_add_resource_stores_missing_fields_as_null() {
    let app = app();

    let id = app.add_resource(&NewResource::default()).await.unwrap();
    let stored = app
        .store()
        .get(RESOURCES_COLLECTION, &id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.data["title"].is_null());
}

#[tokio::test]
async fn test_add_resource_surfaces_store_failure() {
    let app = ZimEduApplication::builder(instant_config())
        .with_store(Arc::new(FailingStore))
        .build()
        .unwrap();

    let err = app
        .add_resource(&NewResource::default())
        .await
        .unwrap_err();
    assert_eq!(err.message(), "quota exceeded");
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = ZimEduConfig::default();
    config.session.sign_in_delay_ms = 10 * 60 * 1000;

    assert!(matches!(
        ZimEduApplication::new(config),
        Err(ApplicationError::Core(_))
    ));
}
