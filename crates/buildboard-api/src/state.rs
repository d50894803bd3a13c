//! Application state.

use std::sync::Arc;

use buildboard_store::ProjectRepo;

/// Shared application state.
///
/// The repository is read-only and the history limit is fixed at startup,
/// so cloning per request shares everything.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ProjectRepo>,
    pub build_history_limit: usize,
}

impl AppState {
    pub fn new(repo: Arc<dyn ProjectRepo>, build_history_limit: usize) -> Self {
        Self {
            repo,
            build_history_limit,
        }
    }
}
