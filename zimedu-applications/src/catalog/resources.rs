//! Resource library
//!
//! Textbooks, videos, quizzes and worksheets, filtered by category and a
//! case-insensitive title search.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Category id that matches every resource
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Textbook,
    Video,
    Quiz,
    Worksheet,
}

impl ResourceType {
    pub fn icon(&self) -> &'static str {
        match self {
            ResourceType::Textbook => "📖",
            ResourceType::Video => "🎥",
            ResourceType::Quiz => "❓",
            ResourceType::Worksheet => "📄",
        }
    }

    /// Library category listing this type
    pub fn category_id(&self) -> &'static str {
        match self {
            ResourceType::Textbook => "textbooks",
            ResourceType::Video => "videos",
            ResourceType::Quiz => "quizzes",
            ResourceType::Worksheet => "worksheets",
        }
    }
}

/// Type-specific size information shown on a resource card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ResourceDetail {
    Size(String),
    Duration(String),
    Questions(String),
    Pages(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Resource {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub subject: String,
    pub grade: String,
    pub downloads: u32,
    pub rating: f32,
    pub detail: ResourceDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ResourceCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl ResourceCategory {
    fn new(id: &str, name: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }

    /// Whether a resource is listed under this category
    pub fn includes(&self, resource: &Resource) -> bool {
        self.id == ALL_CATEGORIES || self.id == resource.resource_type.category_id()
    }
}

/// Confirmation returned when a download is requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct DownloadTicket {
    pub resource_id: u32,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ResourceLibrary {
    categories: Vec<ResourceCategory>,
    resources: Vec<Resource>,
}

impl ResourceLibrary {
    /// Library with the built-in categories and no resources
    pub fn empty() -> Self {
        Self {
            categories: vec![
                ResourceCategory::new(ALL_CATEGORIES, "All", "📚"),
                ResourceCategory::new("textbooks", "Textbooks", "📖"),
                ResourceCategory::new("videos", "Videos", "🎥"),
                ResourceCategory::new("quizzes", "Quizzes", "❓"),
                ResourceCategory::new("worksheets", "Worksheets", "📄"),
            ],
            resources: Vec::new(),
        }
    }

    /// Library populated with the mock catalog
    pub fn seeded() -> Self {
        let mut library = Self::empty();
        library.resources = vec![
            Resource {
                id: 1,
                title: "Grade 7 Mathematics Textbook".to_string(),
                resource_type: ResourceType::Textbook,
                subject: "Mathematics".to_string(),
                grade: "Grade 7".to_string(),
                downloads: 1240,
                rating: 4.8,
                detail: ResourceDetail::Size("15.2 MB".to_string()),
            },
            Resource {
                id: 2,
                title: "O-Level Physics Video Series".to_string(),
                resource_type: ResourceType::Video,
                subject: "Physics".to_string(),
                grade: "O-Level".to_string(),
                downloads: 890,
                rating: 4.9,
                detail: ResourceDetail::Duration("12 hours".to_string()),
            },
            Resource {
                id: 3,
                title: "English Grammar Quiz Pack".to_string(),
                resource_type: ResourceType::Quiz,
                subject: "English".to_string(),
                grade: "All Levels".to_string(),
                downloads: 2100,
                rating: 4.7,
                detail: ResourceDetail::Questions("150 questions".to_string()),
            },
            Resource {
                id: 4,
                title: "A-Level Chemistry Worksheets".to_string(),
                resource_type: ResourceType::Worksheet,
                subject: "Chemistry".to_string(),
                grade: "A-Level".to_string(),
                downloads: 567,
                rating: 4.6,
                detail: ResourceDetail::Pages("45 pages".to_string()),
            },
        ];
        library
    }

    pub fn categories(&self) -> &[ResourceCategory] {
        &self.categories
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn get(&self, id: u32) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Resources in `category` whose title contains `search`, ignoring case.
    ///
    /// An unknown category matches nothing; an empty search matches every title.
    pub fn filter(&self, search: &str, category: &str) -> Vec<Resource> {
        let Some(category) = self.categories.iter().find(|c| c.id == category) else {
            return Vec::new();
        };
        let needle = search.to_lowercase();

        self.resources
            .iter()
            .filter(|r| category.includes(r) && r.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Confirmation for a download of `id`
    pub fn request_download(&self, id: u32) -> Option<DownloadTicket> {
        let resource = self.get(id)?;

        Some(DownloadTicket {
            resource_id: id,
            message: format!("Download \"{}\" started!", resource.title),
        })
    }
}
