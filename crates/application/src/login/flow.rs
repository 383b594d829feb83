//! Sign-in submission use case

use tokio::sync::RwLock;
use vestibule_domain::{AuthError, AuthenticatedUser, Credentials, LoginState, Route};

use crate::ports::{AuthService, Navigator};
use crate::session::SessionStore;

/// Fallback display text for rejections that carry no message of their own.
const GENERIC_FAILURE_MESSAGE: &str = "Invalid credentials";

/// Errors that can occur when submitting credentials.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// One or both credential fields were empty.
    #[error("Please enter both email and password")]
    MissingCredentials,

    /// The authentication service turned the attempt down.
    #[error("{message}")]
    Authentication {
        /// Display text, either the service's own message or a generic
        /// fallback.
        message: String,
    },

    /// A submission is already in flight.
    #[error("a sign-in attempt is already in progress")]
    AlreadySubmitting,

    /// A previous submission already signed the user in.
    #[error("already signed in")]
    AlreadyAuthenticated,
}

impl From<AuthError> for LoginError {
    fn from(error: AuthError) -> Self {
        Self::Authentication {
            message: error
                .user_message()
                .unwrap_or(GENERIC_FAILURE_MESSAGE)
                .to_string(),
        }
    }
}

/// Orchestrates credential submission against the authentication service.
///
/// The flow owns the [`LoginState`] machine. An accepted submission calls
/// the service exactly once; on success the user lands in the shared
/// [`SessionStore`] and the navigator replaces the current route with the
/// dashboard, on failure the state records a display message and the flow
/// stays open for another attempt. While a submission is in flight further
/// submissions are rejected without touching the service.
pub struct LoginFlow<A, N> {
    auth: A,
    navigator: N,
    sessions: SessionStore,
    state: RwLock<LoginState>,
}

impl<A: AuthService, N: Navigator> LoginFlow<A, N> {
    /// Creates a flow in the idle state.
    pub fn new(auth: A, navigator: N, sessions: SessionStore) -> Self {
        Self {
            auth,
            navigator,
            sessions,
            state: RwLock::new(LoginState::Idle),
        }
    }

    /// A snapshot of the current flow state.
    pub async fn state(&self) -> LoginState {
        self.state.read().await.clone()
    }

    /// The session store this flow writes into.
    #[must_use]
    pub const fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Submits a credential pair to the authentication service.
    ///
    /// Entering the in-flight state clears any error left by an earlier
    /// attempt, and both outcomes replace it again, so the flow can never
    /// be left hanging in `Submitting`. The state lock is not held across
    /// the service call.
    ///
    /// # Errors
    ///
    /// - [`LoginError::AlreadySubmitting`] or [`LoginError::AlreadyAuthenticated`]
    ///   when the flow cannot accept a submission; the current state is
    ///   left untouched and the service is not called.
    /// - [`LoginError::MissingCredentials`] when either field is empty;
    ///   the service is not called.
    /// - [`LoginError::Authentication`] when the service rejects the
    ///   attempt or cannot be reached; the flow is open for resubmission.
    pub async fn submit(&self, credentials: Credentials) -> Result<AuthenticatedUser, LoginError> {
        // Guard and transition under one lock so two submissions cannot
        // both observe an idle state. The lock is dropped before the
        // service call.
        {
            let mut state = self.state.write().await;
            match *state {
                LoginState::Submitting => return Err(LoginError::AlreadySubmitting),
                LoginState::Authenticated => return Err(LoginError::AlreadyAuthenticated),
                _ => {}
            }

            if !credentials.is_complete() {
                let error = LoginError::MissingCredentials;
                *state = LoginState::failed(error.to_string());
                return Err(error);
            }

            *state = LoginState::Submitting;
        }

        tracing::debug!("sign-in submission accepted");
        let outcome = self
            .auth
            .sign_in(&credentials.email, &credentials.password)
            .await;

        match outcome {
            Ok(user) => {
                if let Some(previous) = self.sessions.set_current_user(user.clone()).await {
                    tracing::debug!(previous_user = %previous.id, "replaced existing session");
                }
                self.navigator.replace_route(Route::Dashboard);
                *self.state.write().await = LoginState::Authenticated;
                tracing::info!(user = %user.id, "sign-in succeeded");
                Ok(user)
            }
            Err(error) => {
                tracing::warn!(%error, "sign-in failed");
                let error = LoginError::from(error);
                *self.state.write().await = LoginState::failed(error.to_string());
                Err(error)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::Notify;
    use uuid::Uuid;

    /// Scripted service: returns a fixed outcome, counts calls, and can
    /// hold each call at a gate until released.
    #[derive(Clone)]
    struct ScriptedAuthService {
        outcome: Arc<Mutex<Result<AuthenticatedUser, AuthError>>>,
        calls: Arc<AtomicUsize>,
        gate: Option<Arc<Notify>>,
    }

    impl ScriptedAuthService {
        fn succeeding(user: AuthenticatedUser) -> Self {
            Self {
                outcome: Arc::new(Mutex::new(Ok(user))),
                calls: Arc::new(AtomicUsize::new(0)),
                gate: None,
            }
        }

        fn failing(error: AuthError) -> Self {
            Self {
                outcome: Arc::new(Mutex::new(Err(error))),
                calls: Arc::new(AtomicUsize::new(0)),
                gate: None,
            }
        }

        fn gated(mut self, gate: Arc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AuthService for ScriptedAuthService {
        async fn sign_in(&self, _: &str, _: &str) -> Result<AuthenticatedUser, AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.outcome.lock().expect("Lock poisoned").clone()
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNavigator {
        replaced: Arc<Mutex<Vec<Route>>>,
    }

    impl RecordingNavigator {
        fn new() -> Self {
            Self::default()
        }

        fn routes(&self) -> Vec<Route> {
            self.replaced.lock().expect("Lock poisoned").clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn replace_route(&self, route: Route) {
            self.replaced.lock().expect("Lock poisoned").push(route);
        }
    }

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser::new(Uuid::now_v7(), "ada@example.com")
    }

    fn credentials() -> Credentials {
        Credentials::new("ada@example.com", "hunter2")
    }

    async fn wait_until_submitting<A: AuthService, N: Navigator>(flow: &LoginFlow<A, N>) {
        for _ in 0..200 {
            if flow.state().await.is_submitting() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        panic!("flow never entered the submitting state");
    }

    #[tokio::test]
    async fn test_empty_email_rejected_without_service_call() {
        let auth = ScriptedAuthService::succeeding(test_user());
        let navigator = RecordingNavigator::new();
        let flow = LoginFlow::new(auth.clone(), navigator.clone(), SessionStore::new());

        let result = flow.submit(Credentials::new("", "hunter2")).await;

        assert!(matches!(result, Err(LoginError::MissingCredentials)));
        assert_eq!(auth.call_count(), 0);
        assert!(navigator.routes().is_empty());

        let state = flow.state().await;
        assert_eq!(
            state.error_message(),
            Some("Please enter both email and password")
        );
        assert!(state.can_submit());
    }

    #[tokio::test]
    async fn test_empty_password_rejected_without_service_call() {
        let auth = ScriptedAuthService::succeeding(test_user());
        let flow = LoginFlow::new(auth.clone(), RecordingNavigator::new(), SessionStore::new());

        let result = flow.submit(Credentials::new("ada@example.com", "")).await;

        assert!(matches!(result, Err(LoginError::MissingCredentials)));
        assert_eq!(auth.call_count(), 0);
        assert_eq!(
            flow.state().await.error_message(),
            Some("Please enter both email and password")
        );
    }

    #[tokio::test]
    async fn test_successful_sign_in() {
        let user = test_user();
        let auth = ScriptedAuthService::succeeding(user.clone());
        let navigator = RecordingNavigator::new();
        let sessions = SessionStore::new();
        let flow = LoginFlow::new(auth.clone(), navigator.clone(), sessions.clone());

        let result = flow.submit(credentials()).await;

        assert_eq!(result.unwrap(), user);
        assert_eq!(auth.call_count(), 1);
        assert_eq!(sessions.current_user().await, Some(user));
        assert_eq!(navigator.routes(), vec![Route::Dashboard]);
        assert!(flow.state().await.is_authenticated());
    }

    #[tokio::test]
    async fn test_rejection_surfaces_service_message() {
        let auth =
            ScriptedAuthService::failing(AuthError::invalid_credentials_with("Account locked"));
        let navigator = RecordingNavigator::new();
        let sessions = SessionStore::new();
        let flow = LoginFlow::new(auth, navigator.clone(), sessions.clone());

        let result = flow.submit(credentials()).await;

        let error = result.unwrap_err();
        assert_eq!(error.to_string(), "Account locked");
        assert_eq!(flow.state().await.error_message(), Some("Account locked"));
        assert_eq!(sessions.current_user().await, None);
        assert!(navigator.routes().is_empty());
        assert!(flow.state().await.can_submit());
    }

    #[tokio::test]
    async fn test_rejection_without_message_uses_fallback() {
        let auth = ScriptedAuthService::failing(AuthError::invalid_credentials());
        let flow = LoginFlow::new(auth, RecordingNavigator::new(), SessionStore::new());

        let error = flow.submit(credentials()).await.unwrap_err();

        assert_eq!(error.to_string(), "Invalid credentials");
        assert_eq!(
            flow.state().await.error_message(),
            Some("Invalid credentials")
        );
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_its_message() {
        let auth = ScriptedAuthService::failing(AuthError::transport(
            "Unable to reach the sign-in service",
        ));
        let flow = LoginFlow::new(auth, RecordingNavigator::new(), SessionStore::new());

        let error = flow.submit(credentials()).await.unwrap_err();

        assert_eq!(error.to_string(), "Unable to reach the sign-in service");
        assert!(flow.state().await.can_submit());
    }

    #[tokio::test]
    async fn test_state_is_submitting_while_in_flight() {
        let gate = Arc::new(Notify::new());
        let auth = ScriptedAuthService::succeeding(test_user()).gated(gate.clone());
        let flow = Arc::new(LoginFlow::new(
            auth,
            RecordingNavigator::new(),
            SessionStore::new(),
        ));

        let in_flight = tokio::spawn({
            let flow = Arc::clone(&flow);
            async move { flow.submit(credentials()).await }
        });

        wait_until_submitting(&flow).await;
        assert!(flow.state().await.is_submitting());

        gate.notify_one();
        in_flight.await.unwrap().unwrap();
        assert!(flow.state().await.is_authenticated());
    }

    #[tokio::test]
    async fn test_overlapping_submission_rejected() {
        let gate = Arc::new(Notify::new());
        let auth = ScriptedAuthService::succeeding(test_user()).gated(gate.clone());
        let navigator = RecordingNavigator::new();
        let flow = Arc::new(LoginFlow::new(
            auth.clone(),
            navigator.clone(),
            SessionStore::new(),
        ));

        let first = tokio::spawn({
            let flow = Arc::clone(&flow);
            async move { flow.submit(credentials()).await }
        });
        wait_until_submitting(&flow).await;

        let second = flow.submit(credentials()).await;
        assert!(matches!(second, Err(LoginError::AlreadySubmitting)));
        assert_eq!(auth.call_count(), 1);
        assert!(flow.state().await.is_submitting());

        gate.notify_one();
        first.await.unwrap().unwrap();
        assert_eq!(auth.call_count(), 1);
        assert_eq!(navigator.routes(), vec![Route::Dashboard]);
    }

    #[tokio::test]
    async fn test_resubmission_clears_previous_error() {
        let gate = Arc::new(Notify::new());
        let auth = ScriptedAuthService::failing(AuthError::invalid_credentials()).gated(gate.clone());
        let flow = Arc::new(LoginFlow::new(
            auth.clone(),
            RecordingNavigator::new(),
            SessionStore::new(),
        ));

        // First attempt fails; the gate is pre-released so it runs through.
        gate.notify_one();
        let first = flow.submit(credentials()).await;
        assert!(first.is_err());
        assert!(flow.state().await.is_failed());

        // Second attempt: the error is gone while the call is in flight.
        let second = tokio::spawn({
            let flow = Arc::clone(&flow);
            async move { flow.submit(credentials()).await }
        });
        wait_until_submitting(&flow).await;
        assert_eq!(flow.state().await.error_message(), None);

        gate.notify_one();
        let result = second.await.unwrap();
        assert!(result.is_err());
        assert_eq!(auth.call_count(), 2);
        assert!(flow.state().await.is_failed());
    }

    #[tokio::test]
    async fn test_submission_after_success_rejected() {
        let auth = ScriptedAuthService::succeeding(test_user());
        let navigator = RecordingNavigator::new();
        let flow = LoginFlow::new(auth.clone(), navigator.clone(), SessionStore::new());

        flow.submit(credentials()).await.unwrap();
        let again = flow.submit(credentials()).await;

        assert!(matches!(again, Err(LoginError::AlreadyAuthenticated)));
        assert_eq!(auth.call_count(), 1);
        assert_eq!(navigator.routes(), vec![Route::Dashboard]);
        assert!(flow.state().await.is_authenticated());
    }

    #[tokio::test]
    async fn test_success_replaces_existing_session() {
        let previous = AuthenticatedUser::new(Uuid::now_v7(), "old@example.com");
        let user = test_user();
        let sessions = SessionStore::new();
        sessions.set_current_user(previous).await;

        let auth = ScriptedAuthService::succeeding(user.clone());
        let flow = LoginFlow::new(auth, RecordingNavigator::new(), sessions.clone());

        flow.submit(credentials()).await.unwrap();

        assert_eq!(sessions.current_user().await, Some(user));
    }

    #[test]
    fn test_auth_error_conversion_keeps_message() {
        let error = LoginError::from(AuthError::invalid_credentials_with("No such account"));
        assert_eq!(error.to_string(), "No such account");

        let fallback = LoginError::from(AuthError::invalid_credentials());
        assert_eq!(fallback.to_string(), "Invalid credentials");
    }
}
