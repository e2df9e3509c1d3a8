//! Catalog Module
//!
//! Mock data behind the app's screens and the client-side logic that filters
//! and edits it.

pub mod community;
pub mod home;
pub mod profile;
pub mod resources;
pub mod tutoring;

pub use community::{
    AskError, CommunityForum, Discussion, ExpertSession, ExpertSessionStatus, ForumCategory,
    JoinOutcome, DEFAULT_CATEGORY_COLOR, DEFAULT_QUESTION_CATEGORY,
};
pub use home::{FeatureTile, HomeDashboard};
pub use profile::{
    Achievement, AchievementProgress, Activity, Profile, ProfileError, ProgressStats, Setting,
    Settings,
};
pub use resources::{
    DownloadTicket, Resource, ResourceCategory, ResourceDetail, ResourceLibrary, ResourceType,
    ALL_CATEGORIES,
};
pub use tutoring::{Subject, Tutor, TutoringMarketplace, TutoringSession, QUICK_HELP_MESSAGE};
