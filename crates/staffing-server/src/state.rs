use std::path::PathBuf;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Data root holding the `.staffing/` store.
    pub root: PathBuf,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}
