//! Mock session handlers
//!
//! The server holds one session for the whole process. Sign-in and sign-up
//! respond after the simulated latency and always succeed once the form
//! checks pass.

use super::types::{SessionResponse, SignInRequest, SignUpRequest};
use crate::{AppState, WebResult};
use axum::{extract::State, response::Json, Json as JsonExtractor};
use tracing::info;
use zimedu_applications::{SignInForm, SignUpForm};

fn current(state: &AppState) -> WebResult<Json<SessionResponse>> {
    let snapshot = state.application.session()?.snapshot();
    Ok(Json(SessionResponse::from(&snapshot)))
}

/// Current session
#[utoipa::path(
    get,
    path = "/api/session",
    tag = "Session",
    summary = "Get session",
    responses(
        (status = 200, description = "Current session", body = SessionResponse)
    )
)]
pub async fn get_session(State(state): State<AppState>) -> WebResult<Json<SessionResponse>> {
    current(&state)
}

/// Sign in
#[utoipa::path(
    post,
    path = "/api/session/sign-in",
    tag = "Session",
    summary = "Sign in",
    description = "Any email and password, blank included, sign in as a placeholder student",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = SessionResponse)
    )
)]
pub async fn sign_in(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<SignInRequest>,
) -> WebResult<Json<SessionResponse>> {
    let form = SignInForm {
        email: request.email,
        password: request.password,
    };

    let user = state.application.sign_in(&form).await?;
    info!(user = %user.display_string(), "Signed in over HTTP");
    current(&state)
}

/// Sign up
#[utoipa::path(
    post,
    path = "/api/session/sign-up",
    tag = "Session",
    summary = "Sign up",
    request_body = SignUpRequest,
    responses(
        (status = 200, description = "Account created and signed in", body = SessionResponse),
        (status = 400, description = "Missing fields or passwords do not match")
    )
)]
pub async fn sign_up(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<SignUpRequest>,
) -> WebResult<Json<SessionResponse>> {
    let form = SignUpForm {
        name: request.name,
        email: request.email,
        password: request.password,
        confirm_password: request.confirm_password,
        role: request.role,
    };

    state.application.sign_up(&form).await?;
    current(&state)
}

/// Sign out
#[utoipa::path(
    post,
    path = "/api/session/sign-out",
    tag = "Session",
    summary = "Sign out",
    responses(
        (status = 200, description = "Signed out", body = SessionResponse)
    )
)]
pub async fn sign_out(State(state): State<AppState>) -> WebResult<Json<SessionResponse>> {
    state.application.sign_out().await?;
    current(&state)
}
