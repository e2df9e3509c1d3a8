//! Community forum: discussions by category and live expert sessions

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Color used for a category id the forum does not know
pub const DEFAULT_CATEGORY_COLOR: &str = "#64748b";

/// Category new questions land in unless another one is picked
pub const DEFAULT_QUESTION_CATEGORY: &str = "general";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ForumCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Discussion {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub category: String,
    pub replies: u32,
    pub last_reply: String,
    pub is_hot: bool,
    pub is_pinned: bool,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ExpertSessionStatus {
    Upcoming,
    Live,
    Ended,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ExpertSession {
    pub id: u32,
    pub expert: String,
    pub title: String,
    pub subject: String,
    pub time: String,
    pub participants: u32,
    pub status: ExpertSessionStatus,
}

/// What tapping an expert session does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(tag = "action", content = "message", rename_all = "snake_case")]
pub enum JoinOutcome {
    /// The session is live
    Joining(String),
    /// The session has not started (or has ended); a reminder is set instead
    ReminderSet(String),
}

/// Why a question was not posted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AskError {
    #[error("Please enter your question")]
    EmptyQuestion,
}

#[derive(Debug, Clone, Default)]
pub struct CommunityForum {
    categories: Vec<ForumCategory>,
    discussions: Vec<Discussion>,
    expert_sessions: Vec<ExpertSession>,
}

fn category(id: &str, name: &str, icon: &str, color: &str) -> ForumCategory {
    ForumCategory {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn discussion(
    id: u32,
    title: &str,
    author: &str,
    category: &str,
    replies: u32,
    last_reply: &str,
    is_hot: bool,
    is_pinned: bool,
    tags: &[&str],
) -> Discussion {
    Discussion {
        id,
        title: title.to_string(),
        author: author.to_string(),
        category: category.to_string(),
        replies,
        last_reply: last_reply.to_string(),
        is_hot,
        is_pinned,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

impl CommunityForum {
    /// Forum with the built-in categories and nothing posted
    pub fn empty() -> Self {
        Self {
            categories: vec![
                category("all", "All", "💬", DEFAULT_CATEGORY_COLOR),
                category("homework", "Homework Help", "📝", "#3B82F6"),
                category("study-tips", "Study Tips", "💡", "#10B981"),
                category("exams", "Exam Prep", "📊", "#F59E0B"),
                category("career", "Career Advice", "🎯", "#8B5CF6"),
                category("parents", "Parent Corner", "👨‍👩‍👧‍👦", "#EF4444"),
            ],
            discussions: Vec::new(),
            expert_sessions: Vec::new(),
        }
    }

    pub fn seeded() -> Self {
        let mut forum = Self::empty();
        forum.discussions = vec![
            discussion(
                1,
                "How to solve quadratic equations effectively?",
                "StudentMath2024",
                "homework",
                23,
                "2 hours ago",
                true,
                false,
                &["mathematics", "algebra", "grade10"],
            ),
            discussion(
                2,
                "Best study techniques for O-Level Sciences",
                "ScienceLover",
                "study-tips",
                45,
                "1 hour ago",
                true,
                true,
                &["study-tips", "science", "o-level"],
            ),
            discussion(
                3,
                "Chemistry practicals - Common mistakes to avoid",
                "ChemExpert",
                "exams",
                12,
                "3 hours ago",
                false,
                false,
                &["chemistry", "practicals", "tips"],
            ),
            discussion(
                4,
                "How to motivate teenagers to study at home?",
                "ConcernedParent",
                "parents",
                34,
                "30 minutes ago",
                true,
                false,
                &["parenting", "motivation", "home-study"],
            ),
            discussion(
                5,
                "University application tips for Zimbabwe students",
                "CareerGuidance",
                "career",
                67,
                "4 hours ago",
                false,
                true,
                &["university", "applications", "career"],
            ),
        ];
        forum.expert_sessions = vec![
            ExpertSession {
                id: 1,
                expert: "Dr. Margaret Sibanda".to_string(),
                title: "Advanced Mathematics Q&A Session".to_string(),
                subject: "Mathematics".to_string(),
                time: "Today, 4:00 PM".to_string(),
                participants: 45,
                status: ExpertSessionStatus::Upcoming,
            },
            ExpertSession {
                id: 2,
                expert: "Prof. David Mpofu".to_string(),
                title: "Career Guidance Workshop".to_string(),
                subject: "Career Development".to_string(),
                time: "Tomorrow, 10:00 AM".to_string(),
                participants: 78,
                status: ExpertSessionStatus::Upcoming,
            },
            ExpertSession {
                id: 3,
                expert: "Ms. Grace Mutasa".to_string(),
                title: "English Literature Discussion".to_string(),
                subject: "English".to_string(),
                time: "Live Now".to_string(),
                participants: 23,
                status: ExpertSessionStatus::Live,
            },
        ];
        forum
    }

    pub fn categories(&self) -> &[ForumCategory] {
        &self.categories
    }

    pub fn expert_sessions(&self) -> &[ExpertSession] {
        &self.expert_sessions
    }

    /// Discussions in `category`; `all` lists everything
    pub fn discussions(&self, category: &str) -> Vec<Discussion> {
        self.discussions
            .iter()
            .filter(|d| category == "all" || d.category == category)
            .cloned()
            .collect()
    }

    pub fn category_color(&self, category_id: &str) -> &str {
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.color.as_str())
            .unwrap_or(DEFAULT_CATEGORY_COLOR)
    }

    /// Post a question as a new discussion. Blank questions are refused.
    pub fn ask_question(
        &mut self,
        question: &str,
        category: &str,
        author: &str,
    ) -> Result<Discussion, AskError> {
        let title = question.trim();
        if title.is_empty() {
            return Err(AskError::EmptyQuestion);
        }

        let posted = Discussion {
            id: self.discussions.iter().map(|d| d.id).max().unwrap_or(0) + 1,
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            replies: 0,
            last_reply: "just now".to_string(),
            is_hot: false,
            is_pinned: false,
            tags: Vec::new(),
        };

        self.discussions.push(posted.clone());
        Ok(posted)
    }

    pub fn join_session(&self, session_id: u32) -> Option<JoinOutcome> {
        let session = self.expert_sessions.iter().find(|s| s.id == session_id)?;

        Some(match session.status {
            ExpertSessionStatus::Live => JoinOutcome::Joining(format!(
                "Joining \"{}\" with {}",
                session.title, session.expert
            )),
            ExpertSessionStatus::Upcoming | ExpertSessionStatus::Ended => {
                JoinOutcome::ReminderSet(format!("Reminder set for \"{}\"", session.title))
            }
        })
    }
}
