use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError};
use crate::extract;
use crate::models::{Assignment, ClassroomDetails, Material};
use crate::storage::{keys, CredentialStore, StorageError};

use super::JoinError;

/// Accepted classroom-identifier field names in the join response, in
/// priority order. When none are present the submitted class code itself
/// stands in as the identifier.
pub const CLASSROOM_ID_KEYS: [&str; 3] = ["classroomId", "id", "_id"];

/// Result of a successful join: the extracted identifier plus the raw
/// response for callers that want the rest of it.
#[derive(Debug, Clone)]
pub struct JoinedClassroom {
    pub classroom_id: String,
    pub response: Value,
}

/// Everything the home screen needs in one aggregate. Details and materials
/// are strict; assignments degrade to empty on failure.
#[derive(Debug, Clone)]
pub struct ClassroomSnapshot {
    pub details: ClassroomDetails,
    pub materials: Vec<Material>,
    pub assignments: Vec<Assignment>,
}

impl ClassroomSnapshot {
    pub fn completed_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_completed()).count()
    }

    pub fn pending_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_pending()).count()
    }
}

/// Classroom join and data fetching.
/// Clone is cheap - both handles share their underlying state.
#[derive(Clone)]
pub struct ClassroomService {
    api: ApiClient,
    store: CredentialStore,
}

impl ClassroomService {
    pub fn new(api: ApiClient, store: CredentialStore) -> Self {
        Self { api, store }
    }

    /// Join a classroom by class code. Case normalization (trimming,
    /// uppercasing) is the caller's responsibility.
    ///
    /// The classroom identifier is extracted from the response by scanning
    /// `classroomId`, `id`, `_id` in order, falling back to the submitted
    /// code. The identifier is persisted as the device's current classroom;
    /// joining again silently replaces the previous reference (last join
    /// wins - single-classroom model).
    pub async fn join_classroom(&self, class_code: &str) -> Result<JoinedClassroom, JoinError> {
        debug!(code = class_code, "joining classroom");
        let body = json!({ "classCode": class_code });
        let response = self
            .api
            .post_value("/classrooms/join", &body)
            .await
            .map_err(JoinError::classify)?;

        let classroom_id = extract::first_string(&response, &CLASSROOM_ID_KEYS)
            .unwrap_or_else(|| class_code.to_string());

        self.store.set(keys::CLASSROOM_ID, &classroom_id).await?;
        debug!(classroom_id, "joined classroom");

        Ok(JoinedClassroom {
            classroom_id,
            response,
        })
    }

    /// The persisted current-classroom reference, if the device has joined one.
    pub async fn current_classroom(&self) -> Result<Option<String>, StorageError> {
        self.store.get(keys::CLASSROOM_ID).await
    }

    /// Drop the persisted classroom reference. Leaving is local-only; the
    /// server keeps its own enrollment record.
    pub async fn leave_classroom(&self) -> Result<(), StorageError> {
        self.store.remove(keys::CLASSROOM_ID).await
    }

    pub async fn get_classroom_details(
        &self,
        classroom_id: &str,
    ) -> Result<ClassroomDetails, ApiError> {
        self.api
            .get(&format!("/classrooms/{}/details", classroom_id))
            .await
    }

    pub async fn get_classroom_materials(
        &self,
        classroom_id: &str,
    ) -> Result<Vec<Material>, ApiError> {
        self.api
            .get(&format!("/classrooms/{}/materials", classroom_id))
            .await
    }

    /// Practice assignments: the unfiltered assignment listing.
    pub async fn get_practice_assignments(
        &self,
        classroom_id: &str,
    ) -> Result<Vec<Assignment>, ApiError> {
        self.api
            .get(&format!("/classrooms/{}/assignments", classroom_id))
            .await
    }

    /// Submission assignments: same resource, filtered by the query
    /// discriminator.
    pub async fn get_submission_assignments(
        &self,
        classroom_id: &str,
    ) -> Result<Vec<Assignment>, ApiError> {
        self.api
            .get(&format!(
                "/classrooms/{}/assignments?type=submission",
                classroom_id
            ))
            .await
    }

    /// Both assignment fetches, issued concurrently. Practice results always
    /// precede submission results regardless of which response arrives first.
    /// Either failure fails the whole call - no partial results.
    pub async fn get_all_assignments(
        &self,
        classroom_id: &str,
    ) -> Result<Vec<Assignment>, ApiError> {
        let (mut practice, submission) = futures::try_join!(
            self.get_practice_assignments(classroom_id),
            self.get_submission_assignments(classroom_id),
        )?;
        practice.extend(submission);
        Ok(practice)
    }

    /// Graceful-degradation variant for screens that render fine without
    /// assignments. Failures are logged and swallowed.
    pub async fn get_all_assignments_or_empty(&self, classroom_id: &str) -> Vec<Assignment> {
        match self.get_all_assignments(classroom_id).await {
            Ok(assignments) => assignments,
            Err(err) => {
                warn!(classroom_id, error = %err, "assignment fetch failed; continuing with empty list");
                Vec::new()
            }
        }
    }

    /// The home-screen aggregate: details and materials fetched concurrently
    /// (both required), assignments fetched alongside with the degradation
    /// policy applied.
    pub async fn classroom_snapshot(
        &self,
        classroom_id: &str,
    ) -> Result<ClassroomSnapshot, ApiError> {
        let (details, materials, assignments) = futures::join!(
            self.get_classroom_details(classroom_id),
            self.get_classroom_materials(classroom_id),
            self.get_all_assignments_or_empty(classroom_id),
        );
        Ok(ClassroomSnapshot {
            details: details?,
            materials: materials?,
            assignments,
        })
    }
}
