//! Profile and home handlers

use super::types::{ProfileResponse, RenameRequest, UpdateSettingRequest};
use crate::{AppState, WebResult};
use axum::{extract::State, response::Json, Json as JsonExtractor};
use zimedu_applications::{HomeDashboard, Settings};

/// Home dashboard for the current user
#[utoipa::path(
    get,
    path = "/api/home",
    tag = "Profile",
    summary = "Home dashboard",
    responses(
        (status = 200, description = "Greeting and feature tiles", body = HomeDashboard)
    )
)]
pub async fn get_home(State(state): State<AppState>) -> WebResult<Json<HomeDashboard>> {
    Ok(Json(state.application.home().await?))
}

/// Profile, settings and achievements
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "Profile",
    summary = "Get profile",
    responses(
        (status = 200, description = "Profile", body = ProfileResponse)
    )
)]
pub async fn get_profile(State(state): State<AppState>) -> WebResult<Json<ProfileResponse>> {
    let display_name = state.application.display_name().await?;
    let profile = state.application.profile().await;
    Ok(Json(ProfileResponse::new(&profile, display_name)))
}

/// Toggle one setting
#[utoipa::path(
    put,
    path = "/api/profile/settings",
    tag = "Profile",
    summary = "Update setting",
    request_body = UpdateSettingRequest,
    responses(
        (status = 200, description = "All settings after the update", body = Settings)
    )
)]
pub async fn update_setting(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<UpdateSettingRequest>,
) -> Json<Settings> {
    Json(
        state
            .application
            .update_setting(request.setting, request.enabled)
            .await,
    )
}

/// Change the displayed name
#[utoipa::path(
    put,
    path = "/api/profile/name",
    tag = "Profile",
    summary = "Rename",
    request_body = RenameRequest,
    responses(
        (status = 200, description = "Profile after the rename", body = ProfileResponse),
        (status = 400, description = "Blank name")
    )
)]
pub async fn rename(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<RenameRequest>,
) -> WebResult<Json<ProfileResponse>> {
    state.application.rename(&request.name).await?;
    get_profile(State(state)).await
}
