//! Integration test helpers
//!
//! Spawns the real router on an ephemeral port and talks to it over HTTP.

#![allow(dead_code)]

use std::sync::{Arc, LazyLock};
use tokio::net::TcpListener;
use zimedu_applications::ZimEduApplication;
use zimedu_core::{DocumentStore, SessionConfig, ZimEduConfig};
use zimedu_web::{AppState, WebConfig};

// Tracing is initialized once for the whole test binary
static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::sink)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
});

/// Test application instance
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post<Body>(&self, path: &str, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(format!("{}{}", &self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put<Body>(&self, path: &str, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .put(format!("{}{}", &self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Add a resource through the cloud endpoint
    pub async fn post_resource<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.post("/api/resources", body).await
    }
}

fn test_config() -> ZimEduConfig {
    ZimEduConfig {
        session: SessionConfig::instant(),
        ..ZimEduConfig::default()
    }
}

/// Spawn the app with an in-memory document store
pub async fn spawn_app() -> TestApp {
    let application = ZimEduApplication::new(test_config()).unwrap();
    spawn_with(application).await
}

/// Spawn the app writing cloud resources to `store`
pub async fn spawn_app_with_store(store: Arc<dyn DocumentStore>) -> TestApp {
    let application = ZimEduApplication::builder(test_config())
        .with_store(store)
        .build()
        .unwrap();
    spawn_with(application).await
}

async fn spawn_with(application: ZimEduApplication) -> TestApp {
    LazyLock::force(&TRACING);

    let config = WebConfig {
        port: 0,
        dev_mode: true,
        ..WebConfig::default()
    };
    let state = AppState::with_application(config, application);
    let app = zimedu_web::create_app(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        port,
        api_client: client,
    }
}
