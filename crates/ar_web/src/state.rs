use ar_session::SessionController;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared by every handler. The mutex serializes all session transitions.
#[derive(Debug)]
pub struct AppState {
    pub session: Mutex<SessionController>,
}

impl AppState {
    pub fn new(controller: SessionController) -> Self {
        Self {
            session: Mutex::new(controller),
        }
    }
}

pub type SharedState = Arc<AppState>;
