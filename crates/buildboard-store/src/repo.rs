//! Project repository trait.

use async_trait::async_trait;
use buildboard_core::Project;

use crate::StoreResult;

/// Read-only access to projects and their builds.
///
/// Each call returns a fresh snapshot; the external build runner may append
/// builds or write result markers between calls.
#[async_trait]
pub trait ProjectRepo: Send + Sync {
    /// Look up a single project by name.
    async fn find(&self, name: &str) -> StoreResult<Option<Project>>;

    /// All known projects, sorted by name.
    async fn list(&self) -> StoreResult<Vec<Project>>;
}
