//! Vestibule - Portal sign-in entry point
//!
//! Wires the sign-in flow against the portal endpoint configured in the
//! environment, submits the configured credentials once, and reports the
//! outcome through the exit status.

mod config;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use vestibule_application::{LoginFlow, SessionStore};
use vestibule_domain::Credentials;
use vestibule_infrastructure::{InMemoryNavigator, ReqwestAuthService};

use crate::config::PortalConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PortalConfig::from_env()?;

    tracing::info!(
        "Starting Vestibule v{} against {}",
        env!("CARGO_PKG_VERSION"),
        config.sign_in_url
    );

    let sessions = SessionStore::new();
    let navigator = InMemoryNavigator::default();
    let auth = ReqwestAuthService::new(config.sign_in_url.clone());
    let flow = LoginFlow::new(auth, navigator.clone(), sessions.clone());

    let credentials = Credentials::new(config.email, config.password);
    if let Err(error) = flow.submit(credentials).await {
        tracing::error!(%error, "sign-in failed");
        return Err(error.into());
    }

    tracing::info!(route = %navigator.current(), "session active");

    Ok(())
}
