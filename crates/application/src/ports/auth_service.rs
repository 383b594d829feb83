//! Authentication service port

use async_trait::async_trait;
use vestibule_domain::{AuthError, AuthenticatedUser};

/// Port for the external service that verifies credentials and issues the
/// authenticated-user record.
///
/// The sign-in flow calls this at most once per accepted submission and
/// performs no retries of its own. Implementations report rejection and
/// reachability problems through [`AuthError`], optionally carrying a
/// message suitable for display.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies the credential pair and returns the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the service rejects
    /// the pair and [`AuthError::Transport`] when it cannot be reached or
    /// answers unintelligibly.
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AuthError>;
}
