//! Ordered candidate-key lookup for loosely-named API response fields.
//!
//! The remote API is inconsistent about field names: login responses carry
//! the session token under `token` or `idToken`, and join responses name the
//! classroom identifier `classroomId`, `id`, or `_id` depending on backend
//! revision. Extraction is a single ordered scan over candidate keys so the
//! priority order is explicit and testable in isolation.

use serde_json::Value;

/// Return the first non-empty string value found under `candidates`,
/// scanned in order. Keys holding non-string or empty values are skipped.
pub fn first_string(value: &Value, candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|key| {
        value
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_candidate_wins() {
        let value = json!({ "token": "a", "idToken": "b" });
        assert_eq!(
            first_string(&value, &["token", "idToken"]),
            Some("a".to_string())
        );
    }

    #[test]
    fn test_falls_through_to_later_candidates() {
        let value = json!({ "idToken": "b" });
        assert_eq!(
            first_string(&value, &["token", "idToken"]),
            Some("b".to_string())
        );

        let value = json!({ "_id": "c", "other": 1 });
        assert_eq!(
            first_string(&value, &["classroomId", "id", "_id"]),
            Some("c".to_string())
        );
    }

    #[test]
    fn test_empty_and_non_string_values_are_skipped() {
        let value = json!({ "token": "", "idToken": "b" });
        assert_eq!(
            first_string(&value, &["token", "idToken"]),
            Some("b".to_string())
        );

        let value = json!({ "id": 42, "_id": "x" });
        assert_eq!(
            first_string(&value, &["classroomId", "id", "_id"]),
            Some("x".to_string())
        );
    }

    #[test]
    fn test_no_candidate_present() {
        let value = json!({ "unrelated": "y" });
        assert_eq!(first_string(&value, &["token", "idToken"]), None);
        assert_eq!(first_string(&json!(null), &["token"]), None);
    }
}
