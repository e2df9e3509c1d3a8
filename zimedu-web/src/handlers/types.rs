//! Request and response types shared by the handlers

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zimedu_applications::{
    Achievement, Activity, Profile, ProgressStats, SessionSnapshot, Settings, ALL_CATEGORIES,
};
use zimedu_core::{Role, User};

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[schema(example = "0.1.0")]
    pub version: String,
    /// A session manager is wired in
    pub session_available: bool,
    pub catalog_seeded: bool,
    /// Documents in the `resources` collection
    pub stored_resources: usize,
}

/// Resource library filter
#[derive(Debug, Deserialize)]
pub struct LibraryQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default = "all_categories")]
    pub category: String,
}

fn all_categories() -> String {
    ALL_CATEGORIES.to_string()
}

/// Tutor filter; no subject lists every tutor
#[derive(Debug, Deserialize)]
pub struct TutorQuery {
    #[serde(default)]
    pub subject: String,
}

/// Discussion filter
#[derive(Debug, Deserialize)]
pub struct DiscussionQuery {
    #[serde(default = "all_categories")]
    pub category: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookSessionRequest {
    #[schema(example = 1)]
    pub tutor_id: u32,
    #[schema(example = "Quadratic Equations")]
    pub topic: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AskQuestionRequest {
    #[schema(example = "How do I balance chemical equations?")]
    pub question: String,
    /// Defaults to `general`
    pub category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignInRequest {
    #[schema(example = "a@b.com")]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// `student`, `parent` or `teacher`; defaults to `student`
    #[serde(default)]
    #[schema(value_type = String, example = "student")]
    pub role: Role,
}

/// Signed-in user as exposed over HTTP
#[derive(Debug, Serialize, ToSchema)]
pub struct UserInfo {
    #[schema(example = "1")]
    pub id: String,
    pub email: String,
    pub name: String,
    #[schema(example = "student")]
    pub role: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub authenticated: bool,
    /// An operation is in flight
    pub busy: bool,
    pub user: Option<UserInfo>,
}

impl From<&SessionSnapshot> for SessionResponse {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self {
            authenticated: snapshot.state.is_authenticated(),
            busy: snapshot.busy,
            user: snapshot.user().map(UserInfo::from),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub display_name: Option<String>,
    pub settings: Settings,
    pub stats: ProgressStats,
    pub achievements: Vec<Achievement>,
    pub unlocked_achievements: usize,
    pub recent_activity: Vec<Activity>,
}

impl ProfileResponse {
    pub fn new(profile: &Profile, display_name: Option<String>) -> Self {
        Self {
            display_name,
            settings: *profile.settings(),
            stats: *profile.stats(),
            achievements: profile.achievements().to_vec(),
            unlocked_achievements: profile.unlocked_count(),
            recent_activity: profile.recent_activity().to_vec(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSettingRequest {
    #[schema(value_type = String, example = "dark_mode")]
    pub setting: zimedu_applications::Setting,
    pub enabled: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RenameRequest {
    pub name: String,
}
