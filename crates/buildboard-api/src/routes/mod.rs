//! HTTP routes.

pub mod builds;
pub mod health;
pub mod projects;

use crate::AppState;
use axum::Router;
use axum::routing::get;

/// Build the main router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/builds", builds::router())
        .route("/projects", get(projects::index))
        .merge(health::router())
        .with_state(state)
}
