//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod auth_service;
mod navigator;

pub use auth_service::AuthService;
pub use navigator::Navigator;
