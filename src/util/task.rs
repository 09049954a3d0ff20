//! Spawning UI-event-loop tasks.

use std::future::Future;

/// Spawn a future on the browser's event loop.
///
/// On the server the future is dropped: SSR renders the initial shell and
/// hydration re-runs the work in the browser.
pub fn spawn(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
