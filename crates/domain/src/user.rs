//! The authenticated-user record issued by the authentication service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User record returned by a successful sign-in.
///
/// Opaque to the sign-in flow itself: the flow stores and forwards it but
/// never branches on its contents. Fields exist for embedders (greeting
/// headers, role-gated menus) and for the wire adapter that decodes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Account email address.
    pub email: String,
    /// Optional display name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Role names granted to this account.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Creates a user record with just the required fields.
    #[must_use]
    pub fn new(id: Uuid, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            display_name: None,
            roles: Vec::new(),
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the granted roles.
    #[must_use]
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = String>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    /// Returns true if the account carries the given role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
