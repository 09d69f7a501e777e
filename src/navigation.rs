use std::sync::{Mutex, PoisonError};

pub const LOGIN_ROUTE: &str = "/login";
pub const HEALTH_ROUTE: &str = "/health";
pub const LOW_QUANTITY_ROUTE: &str = "/low-quantity-products";

/// Where the dashboard is currently "looking". Screens navigate through this
/// so the 401 redirect and login/logout transitions stay observable.
pub trait Navigator: Send + Sync {
    fn current(&self) -> String;
    fn navigate(&self, route: &str);
}

#[derive(Debug, Default)]
pub struct History {
    entries: Mutex<Vec<String>>,
}

impl History {
    pub fn new(start: &str) -> Self {
        Self {
            entries: Mutex::new(vec![start.to_string()]),
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for History {
    fn current(&self) -> String {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }

    fn navigate(&self, route: &str) {
        tracing::debug!(route, "navigate");
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route.to_string());
    }
}
