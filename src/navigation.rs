//! Navigation capability handed to the dashboard state

use tracing::info;

/// Route the dashboard navigates to on logout
pub const LOGIN_ROUTE: &str = "/login";

/// Host-side router the dashboard asks to change views
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Navigator that records requests in the log; the client performs the redirect
#[derive(Debug, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: &str) {
        info!(route = %route, "Navigation requested");
    }
}

/// Navigator that remembers every requested route
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}
