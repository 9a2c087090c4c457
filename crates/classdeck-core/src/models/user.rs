use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extract;

/// The login response blob, persisted whole and read back for display.
///
/// The backend's profile shape is not stable enough to pin down as a struct,
/// so the blob stays opaque with typed accessors over the common fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Value);

impl UserProfile {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn email(&self) -> Option<String> {
        extract::first_string(&self.0, &["email"])
    }

    pub fn display_name(&self) -> Option<String> {
        extract::first_string(&self.0, &["name", "displayName", "username"])
    }

    pub fn phone(&self) -> Option<String> {
        extract::first_string(&self.0, &["phone", "phoneNumber"])
    }

    pub fn profile_image(&self) -> Option<String> {
        extract::first_string(&self.0, &["profileImage", "photoURL", "avatar"])
    }
}
