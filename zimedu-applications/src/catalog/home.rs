//! Home dashboard

use serde::Serialize;
use zimedu_core::User;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Name used when nobody is signed in
const FALLBACK_NAME: &str = "Student";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct FeatureTile {
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Tab the tile navigates to
    pub route: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct HomeDashboard {
    pub greeting: String,
    pub tagline: String,
    /// Single uppercase letter shown in the avatar bubble
    pub avatar_initial: String,
    pub features: Vec<FeatureTile>,
}

fn tile(title: &str, description: &str, icon: &str, route: &str, color: &str) -> FeatureTile {
    FeatureTile {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        route: route.to_string(),
        color: color.to_string(),
    }
}

impl HomeDashboard {
    pub fn for_user(user: Option<&User>) -> Self {
        let name = user
            .map(|u| u.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or(FALLBACK_NAME);

        let avatar_initial = name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "S".to_string());

        Self {
            greeting: format!("Hello, {}!", name),
            tagline: "Ready to learn something new today?".to_string(),
            avatar_initial,
            features: vec![
                tile(
                    "Resource Library",
                    "Access textbooks, videos, and interactive content",
                    "📚",
                    "resources",
                    "#3B82F6",
                ),
                tile(
                    "Online Tutoring",
                    "Connect with expert tutors for personalized help",
                    "👨‍🏫",
                    "tutoring",
                    "#10B981",
                ),
                tile(
                    "Community",
                    "Join discussions and connect with peers",
                    "💬",
                    "community",
                    "#F59E0B",
                ),
                tile(
                    "Exam Preparation",
                    "Practice tests and study guides",
                    "📝",
                    "exam-prep",
                    "#EF4444",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zimedu_core::Role;

    #[test]
    fn test_anonymous_greeting() {
        let home = HomeDashboard::for_user(None);
        assert_eq!(home.greeting, "Hello, Student!");
        assert_eq!(home.avatar_initial, "S");
        assert_eq!(home.features.len(), 4);
    }

    #[test]
    fn test_user_greeting_and_initial() {
        let user = User::new("1", "t@b.com", "tatenda", Role::Student);
        let home = HomeDashboard::for_user(Some(&user));
        assert_eq!(home.greeting, "Hello, tatenda!");
        assert_eq!(home.avatar_initial, "T");
    }

    #[test]
    fn test_empty_name_falls_back() {
        let user = User::new("1", "t@b.com", "", Role::Parent);
        assert_eq!(HomeDashboard::for_user(Some(&user)).greeting, "Hello, Student!");
    }
}
