//! Process-wide session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::AuthenticatedUser;

/// The currently signed-in user plus when the session was established.
///
/// Created at successful sign-in and destroyed at sign-out; while it
/// exists it is the single source of truth for "who is signed in".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated user.
    pub user: AuthenticatedUser,
    /// When the session was established.
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session established now.
    #[must_use]
    pub fn new(user: AuthenticatedUser) -> Self {
        Self {
            user,
            signed_in_at: Utc::now(),
        }
    }

    /// Seconds elapsed since the session was established.
    #[must_use]
    pub fn age_seconds(&self) -> i64 {
        (Utc::now() - self.signed_in_at).num_seconds()
    }
}
