//! Core library for the classdeck classroom companion.
//!
//! This crate is the engineering core behind the mobile UI: the
//! authenticated API client and the session lifecycle around it. It provides:
//!
//! - `storage`: persistent key/value credential store (token, profile blob,
//!   joined-classroom reference)
//! - `api`: shared HTTP client that injects the stored bearer token into
//!   every request
//! - `auth`: login/logout and authentication-state queries
//! - `classroom`: classroom join with classified errors, plus material and
//!   assignment fetching with the practice/submission fan-out
//! - `context`: the composition root that wires the above together
//!
//! UI layers (screens, navigation, pickers) live elsewhere and consume the
//! services exposed here.

pub mod api;
pub mod auth;
pub mod classroom;
pub mod config;
pub mod context;
pub mod extract;
pub mod models;
pub mod storage;

pub use api::{ApiClient, ApiError};
pub use auth::{AuthError, AuthService, AuthState};
pub use classroom::{ClassroomService, ClassroomSnapshot, JoinError, JoinedClassroom};
pub use config::Config;
pub use context::AppContext;
pub use models::{Assignment, AssignmentStatus, ClassroomDetails, Material, UserProfile};
pub use storage::{keys, CredentialStore, StorageError};
