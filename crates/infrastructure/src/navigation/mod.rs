//! Navigation adapters.

mod memory;

pub use memory::InMemoryNavigator;
