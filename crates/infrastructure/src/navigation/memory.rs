//! In-memory navigator adapter

use std::sync::{Arc, RwLock};

use vestibule_application::ports::Navigator;
use vestibule_domain::Route;

/// Navigator that tracks the current route in memory.
///
/// Stands in for a platform router in the binary and in tests. Cloning
/// yields another handle onto the same route, so the route survives being
/// moved into a flow. Replacement is history-free, there is nothing to go
/// back to.
#[derive(Debug, Clone)]
pub struct InMemoryNavigator {
    current: Arc<RwLock<Route>>,
}

impl InMemoryNavigator {
    /// Creates a navigator positioned at the given route.
    #[must_use]
    pub fn new(initial: Route) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
        }
    }

    /// The route the navigator currently points at.
    #[must_use]
    pub fn current(&self) -> Route {
        match self.current.read() {
            Ok(route) => *route,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl Default for InMemoryNavigator {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

impl Navigator for InMemoryNavigator {
    fn replace_route(&self, route: Route) {
        match self.current.write() {
            Ok(mut current) => *current = route,
            Err(poisoned) => *poisoned.into_inner() = route,
        }
        tracing::info!(%route, "route replaced");
    }
}
