//! Authentication-service failure type.

/// Failure raised by the authentication service during sign-in.
///
/// Both variants optionally carry a human-readable message suitable for
/// showing to the user; when absent, callers substitute their own
/// fallback text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The service rejected the credentials.
    InvalidCredentials {
        /// Service-provided display message, if any.
        message: Option<String>,
    },
    /// The service was unreachable or answered unusably.
    Transport {
        /// Adapter- or service-provided display message, if any.
        message: Option<String>,
    },
}

impl AuthError {
    /// Credential rejection without a display message.
    #[must_use]
    pub const fn invalid_credentials() -> Self {
        Self::InvalidCredentials { message: None }
    }

    /// Credential rejection carrying a display message.
    #[must_use]
    pub fn invalid_credentials_with(message: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            message: Some(message.into()),
        }
    }

    /// Transport failure carrying a display message.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: Some(message.into()),
        }
    }

    /// The display message carried by this failure, if any.
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::InvalidCredentials { message } | Self::Transport { message } => {
                message.as_deref()
            }
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials { message: Some(m) } => {
                write!(f, "credentials rejected: {m}")
            }
            Self::InvalidCredentials { message: None } => write!(f, "credentials rejected"),
            Self::Transport { message: Some(m) } => {
                write!(f, "authentication service unavailable: {m}")
            }
            Self::Transport { message: None } => write!(f, "authentication service unavailable"),
        }
    }
}

impl std::error::Error for AuthError {}
