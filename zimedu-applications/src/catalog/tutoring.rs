//! Tutoring marketplace

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Tutors currently available in this subject
    pub available: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Tutor {
    pub id: u32,
    pub name: String,
    /// Display name of the tutor's subject
    pub subject: String,
    pub rating: f32,
    pub experience: String,
    pub price: String,
    pub availability: String,
    pub specialties: Vec<String>,
    pub students: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TutoringSession {
    pub id: u32,
    pub tutor: String,
    pub subject: String,
    pub topic: String,
    pub time: String,
    pub duration: String,
}

/// Message shown when a student asks for immediate help
pub const QUICK_HELP_MESSAGE: &str = "Connecting you with an available tutor...";

#[derive(Debug, Clone, Default)]
pub struct TutoringMarketplace {
    subjects: Vec<Subject>,
    tutors: Vec<Tutor>,
    upcoming: Vec<TutoringSession>,
}

fn subject(id: &str, name: &str, icon: &str, available: u32) -> Subject {
    Subject {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        available,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl TutoringMarketplace {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            subjects: vec![
                subject("math", "Mathematics", "🔢", 12),
                subject("science", "Science", "🔬", 8),
                subject("english", "English", "📝", 15),
                subject("history", "History", "📚", 6),
                subject("geography", "Geography", "🌍", 4),
                subject("chemistry", "Chemistry", "⚗️", 7),
            ],
            tutors: vec![
                Tutor {
                    id: 1,
                    name: "Dr. Sarah Mukamuri".to_string(),
                    subject: "Mathematics".to_string(),
                    rating: 4.9,
                    experience: "8 years".to_string(),
                    price: "$15/hour".to_string(),
                    availability: "Available now".to_string(),
                    specialties: strings(&["Algebra", "Calculus", "Geometry"]),
                    students: 234,
                },
                Tutor {
                    id: 2,
                    name: "Prof. James Chimbindi".to_string(),
                    subject: "Science".to_string(),
                    rating: 4.8,
                    experience: "12 years".to_string(),
                    price: "$18/hour".to_string(),
                    availability: "Available in 30 min".to_string(),
                    specialties: strings(&["Physics", "Biology", "Chemistry"]),
                    students: 189,
                },
                Tutor {
                    id: 3,
                    name: "Ms. Grace Moyo".to_string(),
                    subject: "English".to_string(),
                    rating: 4.9,
                    experience: "6 years".to_string(),
                    price: "$12/hour".to_string(),
                    availability: "Available now".to_string(),
                    specialties: strings(&["Literature", "Grammar", "Writing"]),
                    students: 156,
                },
            ],
            upcoming: vec![
                TutoringSession {
                    id: 1,
                    tutor: "Dr. Sarah Mukamuri".to_string(),
                    subject: "Mathematics".to_string(),
                    topic: "Quadratic Equations".to_string(),
                    time: "Today, 3:00 PM".to_string(),
                    duration: "1 hour".to_string(),
                },
                TutoringSession {
                    id: 2,
                    tutor: "Prof. James Chimbindi".to_string(),
                    subject: "Physics".to_string(),
                    topic: "Motion and Forces".to_string(),
                    time: "Tomorrow, 10:00 AM".to_string(),
                    duration: "45 minutes".to_string(),
                },
            ],
        }
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn upcoming_sessions(&self) -> &[TutoringSession] {
        &self.upcoming
    }

    /// Tutors teaching the selected subject. An empty selection lists every
    /// tutor; an unknown subject id lists none.
    pub fn tutors_for(&self, subject_id: &str) -> Vec<Tutor> {
        if subject_id.is_empty() {
            return self.tutors.clone();
        }

        match self.subjects.iter().find(|s| s.id == subject_id) {
            Some(subject) => self
                .tutors
                .iter()
                .filter(|t| t.subject == subject.name)
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn tutor(&self, id: u32) -> Option<&Tutor> {
        self.tutors.iter().find(|t| t.id == id)
    }

    /// Book a session with a tutor; it joins the upcoming list
    pub fn book_session(&mut self, tutor_id: u32, topic: &str) -> Option<TutoringSession> {
        let tutor = self.tutor(tutor_id)?;

        let session = TutoringSession {
            id: self.upcoming.iter().map(|s| s.id).max().unwrap_or(0) + 1,
            tutor: tutor.name.clone(),
            subject: tutor.subject.clone(),
            topic: topic.to_string(),
            time: tutor.availability.clone(),
            duration: "1 hour".to_string(),
        };

        self.upcoming.push(session.clone());
        Some(session)
    }

    pub fn quick_help(&self) -> &'static str {
        QUICK_HELP_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_selection_lists_every_tutor() {
        let marketplace = TutoringMarketplace::seeded();
        assert_eq!(marketplace.tutors_for("").len(), 3);
    }

    #[test]
    fn test_subject_selection_filters_by_display_name() {
        let marketplace = TutoringMarketplace::seeded();

        let math = marketplace.tutors_for("math");
        assert_eq!(math.len(), 1);
        assert_eq!(math[0].name, "Dr. Sarah Mukamuri");

        assert!(marketplace.tutors_for("history").is_empty());
        assert!(marketplace.tutors_for("astronomy").is_empty());
    }

    #[test]
    fn test_booking_appends_upcoming_session() {
        let mut marketplace = TutoringMarketplace::seeded();

        let session = marketplace.book_session(3, "Essay structure").unwrap();
        assert_eq!(session.id, 3);
        assert_eq!(session.tutor, "Ms. Grace Moyo");
        assert_eq!(session.subject, "English");
        assert_eq!(marketplace.upcoming_sessions().len(), 3);

        assert!(marketplace.book_session(42, "anything").is_none());
        assert_eq!(marketplace.upcoming_sessions().len(), 3);
    }

    #[test]
    fn test_booking_on_empty_marketplace() {
        let mut marketplace = TutoringMarketplace::empty();
        assert!(marketplace.book_session(1, "Algebra").is_none());
        assert!(marketplace.subjects().is_empty());
    }
}
