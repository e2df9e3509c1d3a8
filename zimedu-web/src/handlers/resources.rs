//! Resource handlers: the cloud add-resource endpoint and the library

use super::types::LibraryQuery;
use crate::{AppState, WebResult};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::{info, warn};
use zimedu_applications::{DownloadTicket, NewResource, Resource, ResourceCategory};

/// Add a resource document to the `resources` collection
#[utoipa::path(
    post,
    path = "/api/resources",
    tag = "Resources",
    summary = "Add resource",
    description = "Append {title, type, url} to the resources collection without validation",
    request_body = NewResource,
    responses(
        (status = 201, description = "Resource added", body = String, content_type = "text/plain"),
        (status = 400, description = "The write failed", body = String, content_type = "text/plain")
    )
)]
pub async fn add_resource(
    State(state): State<AppState>,
    payload: Result<Json<NewResource>, JsonRejection>,
) -> (StatusCode, String) {
    let resource = match payload {
        Ok(Json(resource)) => resource,
        Err(rejection) => {
            warn!("Rejected add-resource body: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                format!("Error adding resource: {}", rejection.body_text()),
            );
        }
    };

    match state.application.add_resource(&resource).await {
        Ok(id) => {
            info!("Resource added with ID: {}", id);
            (StatusCode::CREATED, format!("Resource added with ID: {}", id))
        }
        Err(e) => {
            e.log();
            (
                StatusCode::BAD_REQUEST,
                format!("Error adding resource: {}", e.message()),
            )
        }
    }
}

/// Search the resource library
#[utoipa::path(
    get,
    path = "/api/library/resources",
    tag = "Library",
    summary = "Search resources",
    description = "Resources in a category whose title contains the search text, ignoring case",
    params(
        ("search" = Option<String>, Query, description = "Title substring"),
        ("category" = Option<String>, Query, description = "Category id, defaults to all")
    ),
    responses(
        (status = 200, description = "Matching resources", body = Vec<Resource>)
    )
)]
pub async fn search_library(
    State(state): State<AppState>,
    Query(query): Query<LibraryQuery>,
) -> Json<Vec<Resource>> {
    Json(
        state
            .application
            .search_resources(&query.search, &query.category)
            .await,
    )
}

/// List library categories
#[utoipa::path(
    get,
    path = "/api/library/categories",
    tag = "Library",
    summary = "List library categories",
    responses(
        (status = 200, description = "Library categories", body = Vec<ResourceCategory>)
    )
)]
pub async fn list_library_categories(
    State(state): State<AppState>,
) -> Json<Vec<ResourceCategory>> {
    Json(state.application.resource_categories().await)
}

/// Start a download
#[utoipa::path(
    post,
    path = "/api/library/resources/{id}/download",
    tag = "Library",
    summary = "Download resource",
    params(
        ("id" = u32, Path, description = "Resource id")
    ),
    responses(
        (status = 200, description = "Download started", body = DownloadTicket),
        (status = 404, description = "Unknown resource")
    )
)]
pub async fn download_resource(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> WebResult<Json<DownloadTicket>> {
    Ok(Json(state.application.request_download(id).await?))
}
