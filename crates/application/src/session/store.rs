//! In-memory storage for the current session.
//!
//! This module provides a thread-safe store for the signed-in user,
//! shared between the sign-in flow and any user-aware part of the
//! embedding application.

use std::sync::Arc;
use tokio::sync::RwLock;
use vestibule_domain::{AuthenticatedUser, Session};

/// Thread-safe store for the current session.
///
/// Cloning is cheap and every clone observes the same session. Individual
/// operations are atomic; ordering between concurrent writers (a sign-in
/// racing a sign-out, say) is left to the embedding application.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    current: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// Create an empty store with no signed-in user.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current session with a fresh one for `user`.
    ///
    /// Returns the previously signed-in user, if there was one.
    pub async fn set_current_user(&self, user: AuthenticatedUser) -> Option<AuthenticatedUser> {
        let mut current = self.current.write().await;
        current.replace(Session::new(user)).map(|s| s.user)
    }

    /// The currently signed-in user, or None when signed out.
    pub async fn current_user(&self) -> Option<AuthenticatedUser> {
        let current = self.current.read().await;
        current.as_ref().map(|s| s.user.clone())
    }

    /// The current session record, or None when signed out.
    pub async fn current_session(&self) -> Option<Session> {
        let current = self.current.read().await;
        current.clone()
    }

    /// Check whether a user is signed in.
    pub async fn is_authenticated(&self) -> bool {
        let current = self.current.read().await;
        current.is_some()
    }

    /// Clear the session (sign-out), returning the user that was signed in.
    pub async fn clear(&self) -> Option<AuthenticatedUser> {
        let mut current = self.current.write().await;
        current.take().map(|s| s.user)
    }
}
