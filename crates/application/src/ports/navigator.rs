//! Navigation port

use vestibule_domain::Route;

/// Port for the embedding shell's router.
///
/// Navigation after sign-in is one-way: `replace_route` swaps the current
/// route without adding a history entry, so the transition cannot be
/// undone with "back". The call is fire-and-forget; the shell owns any
/// transition effects.
pub trait Navigator: Send + Sync {
    /// Replaces the current route with `route`.
    fn replace_route(&self, route: Route);
}
