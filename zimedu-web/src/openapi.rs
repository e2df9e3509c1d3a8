//! OpenAPI specification for the ZimEdu API

use axum::response::Json;
use utoipa::OpenApi;

use crate::handlers::{
    AskQuestionRequest, BookSessionRequest, HealthResponse, MessageResponse, ProfileResponse,
    RenameRequest, SessionResponse, SignInRequest, SignUpRequest, UpdateSettingRequest, UserInfo,
};
use zimedu_applications::{
    Achievement, AchievementProgress, Activity, Discussion, DownloadTicket, ExpertSession,
    ExpertSessionStatus, FeatureTile, ForumCategory, HomeDashboard, JoinOutcome, NewResource,
    ProgressStats, Resource, ResourceCategory, ResourceDetail, ResourceType, Setting, Settings,
    Subject, Tutor, TutoringSession,
};

/// Main OpenAPI specification for the ZimEdu web server
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ZimEdu API",
        version = "0.1.0",
        description = "Resource library, tutoring, community and the cloud resource endpoint"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Health
        crate::handlers::health_check,

        // Cloud resources
        crate::handlers::add_resource,

        // Library
        crate::handlers::search_library,
        crate::handlers::list_library_categories,
        crate::handlers::download_resource,

        // Tutoring
        crate::handlers::list_subjects,
        crate::handlers::list_tutors,
        crate::handlers::list_upcoming_sessions,
        crate::handlers::book_session,
        crate::handlers::quick_help,

        // Community
        crate::handlers::list_forum_categories,
        crate::handlers::list_discussions,
        crate::handlers::ask_question,
        crate::handlers::list_expert_sessions,
        crate::handlers::join_expert_session,

        // Session
        crate::handlers::get_session,
        crate::handlers::sign_in,
        crate::handlers::sign_up,
        crate::handlers::sign_out,

        // Profile
        crate::handlers::get_home,
        crate::handlers::get_profile,
        crate::handlers::update_setting,
        crate::handlers::rename,
    ),
    components(
        schemas(
            HealthResponse,
            NewResource,
            Resource,
            ResourceType,
            ResourceDetail,
            ResourceCategory,
            DownloadTicket,
            Subject,
            Tutor,
            TutoringSession,
            BookSessionRequest,
            MessageResponse,
            ForumCategory,
            Discussion,
            ExpertSession,
            ExpertSessionStatus,
            JoinOutcome,
            AskQuestionRequest,
            SignInRequest,
            SignUpRequest,
            SessionResponse,
            UserInfo,
            HomeDashboard,
            FeatureTile,
            ProfileResponse,
            Settings,
            Setting,
            Achievement,
            AchievementProgress,
            Activity,
            ProgressStats,
            UpdateSettingRequest,
            RenameRequest,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Resources", description = "Cloud resource writes"),
        (name = "Library", description = "Resource library"),
        (name = "Tutoring", description = "Tutors and tutoring sessions"),
        (name = "Community", description = "Forum discussions and expert sessions"),
        (name = "Session", description = "Mock authentication"),
        (name = "Profile", description = "Profile, settings and home dashboard"),
    )
)]
pub struct ApiDoc;

/// Get the OpenAPI specification as JSON
pub fn get_openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}

/// Serve the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
