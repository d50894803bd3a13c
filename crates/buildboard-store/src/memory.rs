//! In-memory project repository.
//!
//! Stands in for the filesystem store in handler tests and demos; no
//! runtime reflection or mocking framework involved.

use async_trait::async_trait;
use buildboard_core::Project;

use crate::repo::ProjectRepo;
use crate::StoreResult;

#[derive(Default)]
pub struct MemoryProjectRepo {
    projects: Vec<Project>,
}

impl MemoryProjectRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn insert(&mut self, project: Project) {
        self.projects.retain(|p| p.name != project.name);
        self.projects.push(project);
    }
}

#[async_trait]
impl ProjectRepo for MemoryProjectRepo {
    async fn find(&self, name: &str) -> StoreResult<Option<Project>> {
        Ok(self.projects.iter().find(|p| p.name == name).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<Project>> {
        let mut projects = self.projects.clone();
        projects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(projects)
    }
}
