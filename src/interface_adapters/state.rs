use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::ports::Clock;
use crate::use_cases::SessionRegistry;

// Registry handle shared by the HTTP handlers; the single lock
// serializes every registry operation process-wide.
pub type SharedRegistry = Arc<Mutex<SessionRegistry<SystemClock>>>;

// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: SharedRegistry,
}

impl AppState {
    // Build state around an empty registry on the system clock.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(SessionRegistry::new(SystemClock))),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// System clock adapter used by the registry.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
