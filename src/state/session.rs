//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the navigation guard before every route transition and by
//! user-aware components for identity-dependent rendering. Memory-only:
//! a page reload starts over unauthenticated.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// In-memory record of the current authentication status and identity.
///
/// Every field starts as `None`; `authenticated` distinguishes
/// "not yet determined" (`None`) from an explicit `Some(false)`. Held in an
/// `RwSignal` provided via context, so all readers observe writes
/// synchronously; rapid successive writes are last-write-wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: Option<bool>,
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
}

impl SessionState {
    /// True only for an explicit positive flag; `None` and `Some(false)`
    /// both count as unauthenticated for route guarding.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated == Some(true)
    }

    /// Apply a successful login as one atomic update, so no reader can
    /// observe a token without the matching flag and identity.
    pub fn begin(&mut self, token: String, user_id: String, user_name: String) {
        self.authenticated = Some(true);
        self.token = Some(token);
        self.user_id = Some(user_id);
        self.user_name = Some(user_name);
    }

    /// Clear all session fields on logout.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    pub fn set_authenticated(&mut self, value: Option<bool>) {
        self.authenticated = value;
    }

    pub fn set_token(&mut self, value: Option<String>) {
        self.token = value;
    }

    pub fn set_user_id(&mut self, value: Option<String>) {
        self.user_id = value;
    }

    pub fn set_user_name(&mut self, value: Option<String>) {
        self.user_name = value;
    }
}
