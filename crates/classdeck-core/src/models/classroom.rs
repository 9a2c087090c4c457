use serde::{Deserialize, Serialize};

/// Detail object for a joined classroom. Mostly a pass-through of whatever
/// the backend returns; every display field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClassroomDetails {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(alias = "teacherName", default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_with_teacher_name_alias() {
        let json = r#"{"_id": "c1", "name": "Mobile Development", "teacherName": "Mrs. Voneat"}"#;
        let d: ClassroomDetails = serde_json::from_str(json).unwrap();
        assert_eq!(d.id, "c1");
        assert_eq!(d.name.as_deref(), Some("Mobile Development"));
        assert_eq!(d.teacher.as_deref(), Some("Mrs. Voneat"));
    }

    #[test]
    fn test_tolerates_sparse_objects() {
        let d: ClassroomDetails = serde_json::from_str("{}").unwrap();
        assert_eq!(d.id, "");
        assert!(d.name.is_none());
    }
}
