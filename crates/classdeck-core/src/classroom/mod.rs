//! Classroom module: joining and fetching classroom data.
//!
//! This module provides:
//! - `ClassroomService`: join (with classified errors), details, materials,
//!   practice/submission assignment fetches and their aggregation, and the
//!   persisted current-classroom reference
//! - `JoinError`: the classified failure modes of the join workflow
//!
//! The device follows a single-classroom model: at most one classroom
//! reference is persisted at a time, and a later join replaces it.

pub mod error;
pub mod service;

pub use error::JoinError;
pub use service::{
    ClassroomService, ClassroomSnapshot, JoinedClassroom, CLASSROOM_ID_KEYS,
};
