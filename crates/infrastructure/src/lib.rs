//! Vestibule Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod auth;
pub mod navigation;

pub use auth::ReqwestAuthService;
pub use navigation::InMemoryNavigator;
