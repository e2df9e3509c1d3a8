//! Tutoring handlers

use super::types::{BookSessionRequest, MessageResponse, TutorQuery};
use crate::{AppState, WebResult};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    Json as JsonExtractor,
};
use zimedu_applications::{Subject, Tutor, TutoringSession};

/// List tutoring subjects
#[utoipa::path(
    get,
    path = "/api/tutoring/subjects",
    tag = "Tutoring",
    summary = "List subjects",
    responses(
        (status = 200, description = "Subjects with tutor availability", body = Vec<Subject>)
    )
)]
pub async fn list_subjects(State(state): State<AppState>) -> Json<Vec<Subject>> {
    Json(state.application.subjects().await)
}

/// List tutors, optionally for one subject
#[utoipa::path(
    get,
    path = "/api/tutors",
    tag = "Tutoring",
    summary = "List tutors",
    params(
        ("subject" = Option<String>, Query, description = "Subject id; omitted lists every tutor")
    ),
    responses(
        (status = 200, description = "Tutors", body = Vec<Tutor>)
    )
)]
pub async fn list_tutors(
    State(state): State<AppState>,
    Query(query): Query<TutorQuery>,
) -> Json<Vec<Tutor>> {
    Json(state.application.tutors_for(&query.subject).await)
}

/// Upcoming tutoring sessions
#[utoipa::path(
    get,
    path = "/api/tutoring/sessions",
    tag = "Tutoring",
    summary = "List upcoming sessions",
    responses(
        (status = 200, description = "Upcoming sessions", body = Vec<TutoringSession>)
    )
)]
pub async fn list_upcoming_sessions(State(state): State<AppState>) -> Json<Vec<TutoringSession>> {
    Json(state.application.upcoming_sessions().await)
}

/// Book a session with a tutor
#[utoipa::path(
    post,
    path = "/api/tutoring/sessions",
    tag = "Tutoring",
    summary = "Book session",
    request_body = BookSessionRequest,
    responses(
        (status = 201, description = "Session booked", body = TutoringSession),
        (status = 404, description = "Unknown tutor")
    )
)]
pub async fn book_session(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<BookSessionRequest>,
) -> WebResult<(StatusCode, Json<TutoringSession>)> {
    let session = state
        .application
        .book_session(request.tutor_id, &request.topic)
        .await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// Ask for immediate help from any available tutor
#[utoipa::path(
    post,
    path = "/api/tutoring/quick-help",
    tag = "Tutoring",
    summary = "Quick help",
    responses(
        (status = 200, description = "Connecting message", body = MessageResponse)
    )
)]
pub async fn quick_help(State(state): State<AppState>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: state.application.quick_help().await.to_string(),
    })
}
