//! ZimEdu Web Server
//!
//! HTTP front of the ZimEdu app: the cloud "add resource" endpoint plus read
//! access to the mock catalog and the mock session.

pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

// Re-export main types
pub use server::ZimEduServer;
pub use state::AppState;

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    response::{IntoResponse, Json, Response},
    Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use zimedu_applications::ApplicationError;

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.dev_mode {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin([
                HeaderValue::from_static("http://localhost:8081"),
                HeaderValue::from_static("http://127.0.0.1:8081"),
            ])
            .allow_methods([Method::GET, Method::POST, Method::PUT])
            .allow_headers([ACCEPT, CONTENT_TYPE])
    };

    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .with_state(state)
}

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Enable development mode (permissive CORS)
    pub dev_mode: bool,
    /// Application config file (TOML); defaults apply when absent
    pub config_file: Option<String>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            dev_mode: false,
            config_file: None,
        }
    }
}

impl WebConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("ZIMEDU_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("ZIMEDU_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            dev_mode: std::env::var("ZIMEDU_DEV_MODE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            config_file: std::env::var("ZIMEDU_CONFIG").ok(),
        }
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Error types for the web server
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for web operations
pub type WebResult<T> = Result<T, WebError>;

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            WebError::Application(ApplicationError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "not_found")
            }
            WebError::Application(
                ApplicationError::Validation { .. } | ApplicationError::Form(_),
            ) => (StatusCode::BAD_REQUEST, "validation_failed"),
            WebError::Application(ApplicationError::SessionScope { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "session_unavailable")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "error": error_code,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Initialize logging for the web server
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zimedu_web=debug,tower_http=debug,axum=debug".into()),
        )
        .init();
}
