//! Profile screen state: settings toggles, achievements and progress

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Setting {
    Notifications,
    DarkMode,
    OfflineDownloads,
    StudyReminders,
    CommunityUpdates,
}

impl std::str::FromStr for Setting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "notifications" => Ok(Setting::Notifications),
            "dark_mode" => Ok(Setting::DarkMode),
            "offline_downloads" => Ok(Setting::OfflineDownloads),
            "study_reminders" => Ok(Setting::StudyReminders),
            "community_updates" => Ok(Setting::CommunityUpdates),
            _ => Err(format!("Unknown setting: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Settings {
    pub notifications: bool,
    pub dark_mode: bool,
    pub offline_downloads: bool,
    pub study_reminders: bool,
    pub community_updates: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: true,
            dark_mode: false,
            offline_downloads: true,
            study_reminders: true,
            community_updates: false,
        }
    }
}

impl Settings {
    pub fn set(&mut self, setting: Setting, value: bool) {
        let slot = match setting {
            Setting::Notifications => &mut self.notifications,
            Setting::DarkMode => &mut self.dark_mode,
            Setting::OfflineDownloads => &mut self.offline_downloads,
            Setting::StudyReminders => &mut self.study_reminders,
            Setting::CommunityUpdates => &mut self.community_updates,
        };
        *slot = value;
    }

    pub fn get(&self, setting: Setting) -> bool {
        match setting {
            Setting::Notifications => self.notifications,
            Setting::DarkMode => self.dark_mode,
            Setting::OfflineDownloads => self.offline_downloads,
            Setting::StudyReminders => self.study_reminders,
            Setting::CommunityUpdates => self.community_updates,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AchievementProgress {
    pub done: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
    /// Set for achievements still in progress
    pub progress: Option<AchievementProgress>,
}

impl Achievement {
    /// Completion in percent; unlocked achievements are complete
    pub fn percent_complete(&self) -> u32 {
        match (self.unlocked, self.progress) {
            (true, _) => 100,
            (false, Some(AchievementProgress { total: 0, .. })) | (false, None) => 0,
            (false, Some(AchievementProgress { done, total })) => (done.min(total) * 100) / total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Activity {
    pub id: u32,
    pub action: String,
    /// Score, topic or subject, whichever the activity carries
    pub detail: Option<String>,
    pub time: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ProgressStats {
    pub courses_completed: u32,
    pub total_courses: u32,
    pub study_streak: u32,
}

/// Why the profile edit was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("Name cannot be empty")]
    EmptyName,
}

#[derive(Debug, Clone)]
pub struct Profile {
    settings: Settings,
    achievements: Vec<Achievement>,
    recent_activity: Vec<Activity>,
    stats: ProgressStats,
    /// Name typed into the edit dialog, shown instead of the account name
    edited_name: Option<String>,
}

fn achievement(
    id: u32,
    title: &str,
    description: &str,
    icon: &str,
    progress: Option<(u32, u32)>,
) -> Achievement {
    let progress = progress.map(|(done, total)| AchievementProgress { done, total });
    Achievement {
        id,
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        unlocked: progress.is_none(),
        progress,
    }
}

fn activity(id: u32, action: &str, detail: Option<&str>, time: &str, icon: &str) -> Activity {
    Activity {
        id,
        action: action.to_string(),
        detail: detail.map(str::to_string),
        time: time.to_string(),
        icon: icon.to_string(),
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Profile {
    pub fn seeded() -> Self {
        Self {
            settings: Settings::default(),
            achievements: vec![
                achievement(1, "First Steps", "Complete your first lesson", "🎯", None),
                achievement(2, "Study Streak", "Study for 7 days in a row", "🔥", None),
                achievement(
                    3,
                    "Quiz Master",
                    "Complete 10 quizzes with 90%+ score",
                    "🏆",
                    Some((7, 10)),
                ),
                achievement(4, "Helper", "Answer 5 community questions", "🤝", Some((2, 5))),
                achievement(
                    5,
                    "Knowledge Seeker",
                    "Complete 50 lessons",
                    "📚",
                    Some((23, 50)),
                ),
                achievement(6, "Social Learner", "Join 3 study groups", "👥", None),
            ],
            recent_activity: vec![
                activity(1, "Completed Mathematics Quiz", Some("95%"), "2 hours ago", "✅"),
                activity(2, "Downloaded Physics Textbook", None, "Yesterday", "⬇️"),
                activity(
                    3,
                    "Joined Community Discussion",
                    Some("Study Tips for O-Level"),
                    "2 days ago",
                    "💬",
                ),
                activity(4, "Attended Tutoring Session", Some("Chemistry"), "3 days ago", "👨‍🏫"),
            ],
            stats: ProgressStats {
                courses_completed: 8,
                total_courses: 12,
                study_streak: 5,
            },
            edited_name: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set(&mut self, setting: Setting, value: bool) {
        self.settings.set(setting, value);
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    pub fn recent_activity(&self) -> &[Activity] {
        &self.recent_activity
    }

    pub fn stats(&self) -> &ProgressStats {
        &self.stats
    }

    /// Save the edit dialog's name
    pub fn rename(&mut self, name: &str) -> Result<(), ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        self.edited_name = Some(name.to_string());
        Ok(())
    }

    /// Name to show: the edited one, else the account name
    pub fn display_name<'a>(&'a self, account_name: Option<&'a str>) -> Option<&'a str> {
        self.edited_name.as_deref().or(account_name)
    }
}
