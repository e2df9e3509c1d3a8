//! Community handlers

use super::types::{AskQuestionRequest, DiscussionQuery};
use crate::{AppState, WebResult};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    Json as JsonExtractor,
};
use zimedu_applications::{
    Discussion, ExpertSession, ForumCategory, JoinOutcome, DEFAULT_QUESTION_CATEGORY,
};

/// List forum categories
#[utoipa::path(
    get,
    path = "/api/community/categories",
    tag = "Community",
    summary = "List forum categories",
    responses(
        (status = 200, description = "Forum categories", body = Vec<ForumCategory>)
    )
)]
pub async fn list_forum_categories(State(state): State<AppState>) -> Json<Vec<ForumCategory>> {
    Json(state.application.forum_categories().await)
}

/// List discussions in a category
#[utoipa::path(
    get,
    path = "/api/community/discussions",
    tag = "Community",
    summary = "List discussions",
    params(
        ("category" = Option<String>, Query, description = "Category id, defaults to all")
    ),
    responses(
        (status = 200, description = "Discussions", body = Vec<Discussion>)
    )
)]
pub async fn list_discussions(
    State(state): State<AppState>,
    Query(query): Query<DiscussionQuery>,
) -> Json<Vec<Discussion>> {
    Json(state.application.discussions(&query.category).await)
}

/// Post a question
#[utoipa::path(
    post,
    path = "/api/community/discussions",
    tag = "Community",
    summary = "Ask question",
    description = "Post a question as a new discussion authored by the current user",
    request_body = AskQuestionRequest,
    responses(
        (status = 201, description = "Question posted", body = Discussion),
        (status = 400, description = "Blank question")
    )
)]
pub async fn ask_question(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<AskQuestionRequest>,
) -> WebResult<(StatusCode, Json<Discussion>)> {
    let category = request
        .category
        .as_deref()
        .unwrap_or(DEFAULT_QUESTION_CATEGORY);

    let posted = state
        .application
        .ask_question(&request.question, category)
        .await?;
    Ok((StatusCode::CREATED, Json(posted)))
}

/// List expert sessions
#[utoipa::path(
    get,
    path = "/api/community/sessions",
    tag = "Community",
    summary = "List expert sessions",
    responses(
        (status = 200, description = "Expert sessions", body = Vec<ExpertSession>)
    )
)]
pub async fn list_expert_sessions(State(state): State<AppState>) -> Json<Vec<ExpertSession>> {
    Json(state.application.expert_sessions().await)
}

/// Join a live expert session, or set a reminder for one that is not live
#[utoipa::path(
    post,
    path = "/api/community/sessions/{id}/join",
    tag = "Community",
    summary = "Join expert session",
    params(
        ("id" = u32, Path, description = "Expert session id")
    ),
    responses(
        (status = 200, description = "Joining or reminder set", body = JoinOutcome),
        (status = 404, description = "Unknown session")
    )
)]
pub async fn join_expert_session(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> WebResult<Json<JoinOutcome>> {
    Ok(Json(state.application.join_session(id).await?))
}
