use std::sync::Mutex;
use tracing::info;

use crate::domain::Navigator;

/// Navigator for the terminal: there is no router, so a route change is
/// announced in the log
pub struct LoggingNavigator;

impl LoggingNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: &str) {
        info!(route = route, "Navigating");
    }
}

/// Keeps every requested route, in order
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes
            .lock()
            .map(|routes| routes.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        info!(route = route, "Navigating");
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route.to_string());
        }
    }
}
