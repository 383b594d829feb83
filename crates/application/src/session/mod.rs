//! Session state shared across the application.

mod store;

pub use store::SessionStore;
