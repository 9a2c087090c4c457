//! REST API client module for the classroom backend.
//!
//! This module provides the `ApiClient` used by the auth and classroom
//! services. The API uses bearer token authentication; the client reads the
//! stored token before every request and attaches it when present.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
