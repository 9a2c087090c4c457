use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Fallback grouping label when the backend omits lesson/section info.
const DEFAULT_LESSON: &str = "Lesson 1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    #[serde(alias = "_id", default)]
    pub id: String,
    // Older backend revisions call this "name"
    #[serde(alias = "name", default)]
    pub title: String,
    #[serde(alias = "section", default)]
    pub lesson: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl Material {
    /// Grouping label for the materials list; materials without one are
    /// lumped under a default lesson.
    pub fn lesson_label(&self) -> &str {
        self.lesson
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LESSON)
    }

    pub fn formatted_created_at(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => Some(dt.format("%-d %B %Y").to_string()),
            Err(_) => Some(raw.chars().take(10).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_api_shape_with_aliases() {
        let json = r#"{
            "_id": "m1",
            "name": "Intro slides",
            "section": "Lesson 2",
            "url": "https://example.com/slides.pdf",
            "createdAt": "2025-03-04T08:30:00Z"
        }"#;
        let m: Material = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, "m1");
        assert_eq!(m.title, "Intro slides");
        assert_eq!(m.lesson_label(), "Lesson 2");
        assert_eq!(m.formatted_created_at().unwrap(), "4 March 2025");
    }

    #[test]
    fn test_lesson_label_falls_back() {
        let m: Material = serde_json::from_str(r#"{"id": "m2", "title": "Link"}"#).unwrap();
        assert_eq!(m.lesson_label(), "Lesson 1");

        let m: Material =
            serde_json::from_str(r#"{"id": "m3", "title": "Doc", "lesson": ""}"#).unwrap();
        assert_eq!(m.lesson_label(), "Lesson 1");
    }

    #[test]
    fn test_no_created_at() {
        let m: Material = serde_json::from_str(r#"{"id": "m4", "title": "Doc"}"#).unwrap();
        assert_eq!(m.formatted_created_at(), None);
    }
}
