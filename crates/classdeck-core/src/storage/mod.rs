//! Persistent credential storage.
//!
//! This module provides:
//! - `CredentialStore`: async key/value storage backed by a JSON file,
//!   holding the session token, the cached user profile blob, and the
//!   joined-classroom reference
//! - `keys`: the fixed set of keys the rest of the crate persists under
//!
//! The store survives process restarts; `clear()` removes every key.

pub mod store;

pub use store::{keys, CredentialStore, StorageError};
