//! Health check

use super::types::HealthResponse;
use crate::{AppState, WebResult};
use axum::{extract::State, response::Json};
use zimedu_applications::{ApplicationError, RESOURCES_COLLECTION};

/// Server liveness plus the state of the mock session and the cloud store.
///
/// Reports `degraded` when the application runs without a session manager.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    summary = "Health check",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse),
        (status = 500, description = "The resource store could not be read")
    )
)]
pub async fn health_check(State(state): State<AppState>) -> WebResult<Json<HealthResponse>> {
    let application = &state.application;
    let session_available = application.session().is_ok();
    let stored_resources = application
        .store()
        .list(RESOURCES_COLLECTION)
        .await
        .map_err(ApplicationError::from)?
        .len();

    Ok(Json(HealthResponse {
        status: if session_available { "healthy" } else { "degraded" }.to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        session_available,
        catalog_seeded: application.config().catalog.seed_mock_data,
        stored_resources,
    }))
}
