//! Vestibule Domain - Core business types
//!
//! This crate defines the domain model for the Vestibule sign-in flow.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod credentials;
pub mod route;
pub mod session;
pub mod state;
pub mod user;

pub use auth::AuthError;
pub use credentials::Credentials;
pub use route::Route;
pub use session::Session;
pub use state::LoginState;
pub use user::AuthenticatedUser;
