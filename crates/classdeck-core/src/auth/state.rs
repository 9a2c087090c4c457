use crate::models::UserProfile;

/// The session state machine, made explicit.
///
/// Two states only: `login` success is the single transition in,
/// `logout` the single transition out. A failed login leaves the
/// state unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated {
        token: String,
        /// The profile blob may be absent if storage was cleared out from
        /// under the token; the UI treats that as "signed in, profile unknown".
        profile: Option<UserProfile>,
    },
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            AuthState::Authenticated { token, .. } => Some(token),
            AuthState::Unauthenticated => None,
        }
    }
}
