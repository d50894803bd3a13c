//! HTTP build-results surface for Buildboard.
//!
//! Typed request handlers resolve projects, builds, and artifacts into
//! result descriptors; thin axum routes map those onto HTTP responses.

pub mod error;
pub mod routes;
pub mod state;

pub use state::AppState;
