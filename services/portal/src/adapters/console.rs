//! services/portal/src/adapters/console.rs
//!
//! Terminal-facing implementations of the `Notifier` and `Navigator` ports.
//! Both are pure side-effect sinks: notices become log lines and route
//! transitions are recorded the same way.

use taskhive_core::ports::{Navigator, Notifier};
use tracing::{error, info};

/// A notifier that renders toasts as log lines.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify_success(&self, title: &str, body: &str) {
        info!("{title}: {body}");
    }

    fn notify_error(&self, title: &str, body: &str) {
        error!("{title}: {body}");
    }
}

/// A navigator that logs the route transition.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: &str) {
        info!("Navigating to {route}");
    }
}
