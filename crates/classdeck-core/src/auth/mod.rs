//! Authentication module for managing the user session.
//!
//! This module provides:
//! - `AuthService`: login/logout against the backend, persisting the session
//!   token and profile blob through the credential store
//! - `AuthState`: the explicit two-state session machine
//!
//! There is no token refresh: a token is used until explicit logout or until
//! the server starts rejecting it, at which point the UI re-prompts.

pub mod service;
pub mod state;

pub use service::{AuthError, AuthService, TOKEN_KEYS};
pub use state::AuthState;
