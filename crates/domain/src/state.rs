//! Sign-in flow state for UI binding.
//!
//! This module defines the state machine for credential submission,
//! enabling an embedding UI to display appropriate feedback at each stage.

use serde::{Deserialize, Serialize};

/// Represents the current state of the sign-in flow.
///
/// The flow replaces the whole value on every transition, so each phase is
/// a single state and a stale spinner or error can never coexist with a
/// newer phase:
/// - `Idle`: ready to submit, show the sign-in button
/// - `Submitting`: attempt in flight, show a spinner and disable the button
/// - `Failed`: last attempt failed, show the message, accept a resubmission
/// - `Authenticated`: signed in; terminal for this flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoginState {
    /// No attempt has been made yet.
    #[default]
    Idle,

    /// A submission is in flight, awaiting the authentication service.
    Submitting,

    /// The last attempt failed; the flow accepts a new submission.
    Failed {
        /// Human-readable message for display.
        message: String,
    },

    /// A sign-in succeeded; no further submissions are accepted.
    Authenticated,
}

impl LoginState {
    /// Creates a `Failed` state carrying a display message.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Returns true if no attempt has been made yet.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a submission is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Returns true if the last attempt failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns true if a sign-in succeeded.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Returns true if the flow accepts a new submission.
    ///
    /// `Submitting` rejects overlap; `Authenticated` is terminal.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed { .. })
    }

    /// Returns the display message if the last attempt failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Gets a user-friendly status line for every phase.
    #[must_use]
    pub fn status_message(&self) -> &str {
        match self {
            Self::Idle => "Ready to sign in",
            Self::Submitting => "Signing in...",
            Self::Failed { message } => message,
            Self::Authenticated => "Signed in",
        }
    }
}
