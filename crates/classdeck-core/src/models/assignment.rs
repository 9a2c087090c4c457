use chrono::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    #[default]
    Pending,
    Completed,
    Overdue,
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentStatus::Pending => write!(f, "Pending"),
            AssignmentStatus::Completed => write!(f, "Completed"),
            AssignmentStatus::Overdue => write!(f, "Overdue"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: Option<String>,
    // Some assignments come back without a status; treat those as pending
    #[serde(default)]
    pub status: AssignmentStatus,
    #[serde(rename = "classroomId", default)]
    pub classroom_id: Option<String>,
}

impl Assignment {
    pub fn is_completed(&self) -> bool {
        self.status == AssignmentStatus::Completed
    }

    pub fn is_pending(&self) -> bool {
        self.status == AssignmentStatus::Pending
    }

    pub fn formatted_due_date(&self) -> String {
        match &self.due_date {
            Some(date) => {
                if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
                    dt.format("%b %d, %Y").to_string()
                } else {
                    // Fall back to raw date string, truncate if too long
                    date.chars().take(10).collect()
                }
            }
            None => "No due date".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_api_shape() {
        let json = r#"{
            "_id": "a1",
            "title": "Week 3 exercises",
            "dueDate": "2025-05-12T00:00:00Z",
            "status": "overdue",
            "classroomId": "c9"
        }"#;
        let a: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(a.id, "a1");
        assert_eq!(a.status, AssignmentStatus::Overdue);
        assert_eq!(a.classroom_id.as_deref(), Some("c9"));
        assert_eq!(a.formatted_due_date(), "May 12, 2025");
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let a: Assignment = serde_json::from_str(r#"{"id": "a2", "title": "Reading"}"#).unwrap();
        assert!(a.is_pending());
        assert!(!a.is_completed());
        assert_eq!(a.formatted_due_date(), "No due date");
    }

    #[test]
    fn test_non_rfc3339_due_date_is_truncated() {
        let a: Assignment = serde_json::from_str(
            r#"{"id": "a3", "title": "Quiz", "dueDate": "2025-06-01 extra junk"}"#,
        )
        .unwrap();
        assert_eq!(a.formatted_due_date(), "2025-06-01");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AssignmentStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(AssignmentStatus::Overdue.to_string(), "Overdue");
    }
}
