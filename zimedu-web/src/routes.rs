//! Route definitions for the ZimEdu web server

use crate::{handlers, openapi, AppState};
use axum::{
    routing::{get, post, put},
    Router,
};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Cloud resource endpoint
        .route("/resources", post(handlers::add_resource))
        // Resource library
        .route("/library/resources", get(handlers::search_library))
        .route("/library/categories", get(handlers::list_library_categories))
        .route(
            "/library/resources/{id}/download",
            post(handlers::download_resource),
        )
        // Tutoring
        .route("/tutoring/subjects", get(handlers::list_subjects))
        .route("/tutors", get(handlers::list_tutors))
        .route(
            "/tutoring/sessions",
            get(handlers::list_upcoming_sessions).post(handlers::book_session),
        )
        .route("/tutoring/quick-help", post(handlers::quick_help))
        // Community
        .route("/community/categories", get(handlers::list_forum_categories))
        .route(
            "/community/discussions",
            get(handlers::list_discussions).post(handlers::ask_question),
        )
        .route("/community/sessions", get(handlers::list_expert_sessions))
        .route(
            "/community/sessions/{id}/join",
            post(handlers::join_expert_session),
        )
        // Session
        .route("/session", get(handlers::get_session))
        .route("/session/sign-in", post(handlers::sign_in))
        .route("/session/sign-up", post(handlers::sign_up))
        .route("/session/sign-out", post(handlers::sign_out))
        // Profile and home
        .route("/home", get(handlers::get_home))
        .route("/profile", get(handlers::get_profile))
        .route("/profile/settings", put(handlers::update_setting))
        .route("/profile/name", put(handlers::rename))
        // API documentation
        .route("/openapi.json", get(openapi::openapi_json))
}
