//! HTTP sign-in service adapter.
//!
//! This module talks to the portal's sign-in endpoint and maps its
//! responses onto the domain's authentication vocabulary.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;
use vestibule_application::AuthService;
use vestibule_domain::{AuthError, AuthenticatedUser};

/// Display text when the endpoint cannot be reached at all.
const UNREACHABLE_MESSAGE: &str = "Unable to reach the sign-in service";

/// Display text when a 2xx response does not decode as a user record.
const MALFORMED_MESSAGE: &str = "Received an unreadable response from the sign-in service";

/// Timeout for a single sign-in call.
const SIGN_IN_TIMEOUT: Duration = Duration::from_secs(30);

/// Wire format of a sign-in request.
#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Wire format of a rejection body. Both fields are optional because the
/// portal is not consistent about which one it fills in.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Sign-in service adapter backed by `reqwest`.
///
/// Speaks the portal's JSON contract: a POST carrying the credential
/// pair, answered with a user record on success or a rejection body with
/// an optional display message otherwise.
pub struct ReqwestAuthService {
    sign_in_url: Url,
    http_client: reqwest::Client,
}

impl ReqwestAuthService {
    /// Create an adapter for the given sign-in endpoint.
    #[must_use]
    pub fn new(sign_in_url: Url) -> Self {
        Self {
            sign_in_url,
            http_client: reqwest::Client::builder()
                .timeout(SIGN_IN_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create with a caller-supplied client (for sharing connection pools).
    #[must_use]
    pub const fn with_client(sign_in_url: Url, http_client: reqwest::Client) -> Self {
        Self {
            sign_in_url,
            http_client,
        }
    }

    /// The endpoint this adapter signs in against.
    #[must_use]
    pub const fn sign_in_url(&self) -> &Url {
        &self.sign_in_url
    }

    /// Decode the user record out of a 2xx response body.
    fn parse_user(body: &str) -> Result<AuthenticatedUser, AuthError> {
        serde_json::from_str(body).map_err(|error| {
            tracing::debug!(%error, "sign-in response did not decode");
            AuthError::transport(MALFORMED_MESSAGE)
        })
    }

    /// Extract the display message from a rejection body, if it has one.
    fn rejection_message(body: &str) -> Option<String> {
        let payload: ErrorPayload = serde_json::from_str(body).ok()?;
        payload
            .message
            .or(payload.error)
            .filter(|message| !message.trim().is_empty())
    }

    /// Map a non-2xx response onto the domain failure vocabulary.
    fn classify_failure(status: StatusCode, body: &str) -> AuthError {
        let message = Self::rejection_message(body);
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            AuthError::InvalidCredentials { message }
        } else {
            AuthError::Transport {
                message: Some(
                    message.unwrap_or_else(|| format!("Sign-in service answered {status}")),
                ),
            }
        }
    }
}

#[async_trait]
impl AuthService for ReqwestAuthService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthError> {
        let response = self
            .http_client
            .post(self.sign_in_url.clone())
            .json(&SignInRequest { email, password })
            .send()
            .await
            .map_err(|error| {
                tracing::debug!(%error, "sign-in request could not be sent");
                AuthError::transport(UNREACHABLE_MESSAGE)
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            Self::parse_user(&body)
        } else {
            Err(Self::classify_failure(status, &body))
        }
    }
}
