//! Display-refresh hook for the home-screen widget surface.
//!
//! The widget timeline renders the featured board outside the app process,
//! so it cannot observe in-memory state. The store pings this hook after
//! every successful whiteboard persistence; the platform shell maps it onto
//! whatever reload call the OS widget framework exposes.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use tracing::debug;

/// Fire-and-forget notification that whiteboard data changed on disk.
pub trait WidgetRefresher {
    /// Ask the display surface to re-read persisted state. No return value;
    /// the surface refreshes on its own schedule.
    fn notify_changed(&self);
}

/// Refresher that does nothing. Used headless and in previews.
#[derive(Debug, Default)]
pub struct NullRefresher;

impl WidgetRefresher for NullRefresher {
    fn notify_changed(&self) {}
}

/// Refresher that records the request in the log stream only.
#[derive(Debug, Default)]
pub struct LogRefresher;

impl WidgetRefresher for LogRefresher {
    fn notify_changed(&self) {
        debug!("widget timeline refresh requested");
    }
}
