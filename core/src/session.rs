//! In-memory session state for the authenticated connector.
//!
//! # Design
//! The session is an enum, so a token exists exactly when the session is
//! active. Reads and writes go through a `RwLock` and are never held across
//! an `.await`; concurrent logins resolve last-writer-wins and a request sees
//! whichever token was stored when its headers were built.

use std::fmt;
use std::sync::{PoisonError, RwLock};

#[derive(Clone, PartialEq, Eq, Default)]
enum Session {
    #[default]
    LoggedOut,
    LoggedIn {
        token: String,
    },
}

/// Login status and bearer token of one connector.
#[derive(Default)]
pub struct SessionState {
    inner: RwLock<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        matches!(*self.read(), Session::LoggedIn { .. })
    }

    /// Current bearer token, `None` while logged out.
    pub fn token(&self) -> Option<String> {
        match &*self.read() {
            Session::LoggedIn { token } => Some(token.clone()),
            Session::LoggedOut => None,
        }
    }

    pub fn activate(&self, token: String) {
        *self.write() = Session::LoggedIn { token };
    }

    /// Drop the token and mark the session inactive. Idempotent.
    pub fn deactivate(&self) {
        *self.write() = Session::LoggedOut;
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Session> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Session> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}
