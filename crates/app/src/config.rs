//! Environment-driven configuration.

use url::Url;

/// Environment variable naming the sign-in endpoint.
const SIGN_IN_URL_VAR: &str = "VESTIBULE_SIGN_IN_URL";
/// Environment variable naming the account email.
const EMAIL_VAR: &str = "VESTIBULE_EMAIL";
/// Environment variable naming the account password.
const PASSWORD_VAR: &str = "VESTIBULE_PASSWORD";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("{0} is not set")]
    Missing(&'static str),

    /// The endpoint variable does not hold a valid URL.
    #[error("{variable} is not a valid URL: {source}")]
    InvalidUrl {
        /// The offending variable name.
        variable: &'static str,
        /// The underlying parse failure.
        source: url::ParseError,
    },
}

/// Connection and account settings for the portal.
#[derive(Clone)]
pub struct PortalConfig {
    /// Endpoint the sign-in request is sent to.
    pub sign_in_url: Url,
    /// Account email to sign in with.
    pub email: String,
    /// Account password to sign in with.
    pub password: String,
}

impl PortalConfig {
    /// Read the configuration from `VESTIBULE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is missing or the endpoint does
    /// not parse as a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            sign_in_url: parse_sign_in_url(&require(SIGN_IN_URL_VAR)?)?,
            email: require(EMAIL_VAR)?,
            password: require(PASSWORD_VAR)?,
        })
    }
}

// Keep the password out of logs and panic messages.
impl std::fmt::Debug for PortalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalConfig")
            .field("sign_in_url", &self.sign_in_url.as_str())
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn require(variable: &'static str) -> Result<String, ConfigError> {
    std::env::var(variable).map_err(|_| ConfigError::Missing(variable))
}

fn parse_sign_in_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        variable: SIGN_IN_URL_VAR,
        source,
    })
}
