//! Navigation targets for the sign-in flow.

use serde::{Deserialize, Serialize};

/// Destinations the flow can transition the embedding shell to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// The sign-in form.
    #[default]
    Login,
    /// The authenticated area.
    Dashboard,
}

impl Route {
    /// Path rendering for router integration.
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path())
    }
}
