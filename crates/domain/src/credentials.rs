//! Sign-in credentials.

/// Email/password pair supplied by the user for one sign-in attempt.
///
/// Credentials are transient: they exist only for the duration of a
/// submission and are never persisted. The `Debug` impl redacts the
/// password so the struct is safe to carry through diagnostic output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account email address, exactly as typed.
    pub email: String,
    /// Account password, exactly as typed.
    pub password: String,
}

impl Credentials {
    /// Creates credentials from the raw form fields.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns true when both fields are non-empty.
    ///
    /// Presence only: no format validation and no trimming, so a field
    /// containing just whitespace counts as filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
