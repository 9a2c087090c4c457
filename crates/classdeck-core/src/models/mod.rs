//! Data models for classroom entities.
//!
//! This module contains the data structures returned by the backend:
//!
//! - `Assignment`, `AssignmentStatus`: gradable/practice tasks with due dates
//! - `Material`: read-only classroom content (documents and links)
//! - `ClassroomDetails`: the joined classroom's detail object
//! - `UserProfile`: the login response blob with typed accessors

pub mod assignment;
pub mod classroom;
pub mod material;
pub mod user;

pub use assignment::{Assignment, AssignmentStatus};
pub use classroom::ClassroomDetails;
pub use material::Material;
pub use user::UserProfile;
