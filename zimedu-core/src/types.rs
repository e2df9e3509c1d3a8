//! Core data type definitions

use serde::{Deserialize, Serialize};

/// User category. Only drives display text, never access control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Parent,
    Teacher,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Parent, Role::Teacher];

    /// Human readable label used by the sign-up form picker
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Parent => "Parent",
            Role::Teacher => "Teacher",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Parent => write!(f, "parent"),
            Role::Teacher => write!(f, "teacher"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "parent" => Ok(Role::Parent),
            "teacher" => Ok(Role::Teacher),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Signed-in user identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Treated as opaque, never validated
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            role,
        }
    }

    /// Get user display string
    pub fn display_string(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}

/// Authentication state of the app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated { user: User },
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated { user } => Some(user),
            SessionState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }
}

/// A document read back from a [`crate::DocumentStore`] collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    pub data: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZimEduConfig {
    pub session: SessionConfig,
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

/// Simulated latencies of the session operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub sign_in_delay_ms: u64,
    pub sign_up_delay_ms: u64,
    pub sign_out_delay_ms: u64,
}

impl SessionConfig {
    /// No simulated latency at all
    pub fn instant() -> Self {
        Self {
            sign_in_delay_ms: 0,
            sign_up_delay_ms: 0,
            sign_out_delay_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Populate the library, marketplace and forum with the built-in mock data
    pub seed_mock_data: bool,
}
