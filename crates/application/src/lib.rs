//! Vestibule Application - Sign-in orchestration and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the consumed capabilities)
//! - The process-wide session store
//! - The sign-in flow and its error handling

pub mod login;
pub mod ports;
pub mod session;

pub use login::{LoginError, LoginFlow};
pub use ports::{AuthService, Navigator};
pub use session::SessionStore;
