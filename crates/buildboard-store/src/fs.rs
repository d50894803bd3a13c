//! Filesystem-backed project repository.
//!
//! Reads the directory layout the external build runner maintains:
//!
//! ```text
//! <projects-dir>/<project>/build-<label>/                        artifact root
//! <projects-dir>/<project>/build-<label>/build_status.success    result marker
//! <projects-dir>/<project>/build-<label>/build_status.failure    result marker
//! ```
//!
//! No marker file means the build is still running.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use buildboard_core::{Build, BuildState, Project};
use chrono::{DateTime, Utc};

use crate::repo::ProjectRepo;
use crate::{StoreError, StoreResult};

const BUILD_DIR_PREFIX: &str = "build-";
const SUCCESS_MARKER: &str = "build_status.success";
const FAILURE_MARKER: &str = "build_status.failure";

pub struct FsProjectRepo {
    projects_dir: PathBuf,
}

impl FsProjectRepo {
    pub fn new(projects_dir: impl Into<PathBuf>) -> Self {
        Self {
            projects_dir: projects_dir.into(),
        }
    }

    async fn load_project(&self, name: &str, dir: &Path) -> StoreResult<Option<Project>> {
        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(entries) => entries,
            // Deleted (or never created) between listing and read.
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(err)),
        };

        let mut builds = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(entry_name) = file_name.to_str() else {
                continue;
            };
            let Some(label) = entry_name.strip_prefix(BUILD_DIR_PREFIX) else {
                continue;
            };
            if label.is_empty() || !entry.path().is_dir() {
                continue;
            }

            builds.push(read_build(label, entry.path()).await);
        }

        Ok(Some(Project::new(name, builds)))
    }
}

#[async_trait]
impl ProjectRepo for FsProjectRepo {
    async fn find(&self, name: &str) -> StoreResult<Option<Project>> {
        if !is_valid_project_name(name) {
            return Ok(None);
        }
        self.load_project(name, &self.projects_dir.join(name)).await
    }

    async fn list(&self) -> StoreResult<Vec<Project>> {
        let mut entries = match tokio::fs::read_dir(&self.projects_dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::Io(err)),
        };

        let mut projects = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.path().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            match self.load_project(&name, &entry.path()).await {
                Ok(Some(project)) => projects.push(project),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(project = %name, "skipping unreadable project: {err}");
                }
            }
        }

        projects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(projects)
    }
}

async fn read_build(label: &str, artifact_root: PathBuf) -> Build {
    let state = if path_exists(artifact_root.join(SUCCESS_MARKER)).await {
        BuildState::Success
    } else if path_exists(artifact_root.join(FAILURE_MARKER)).await {
        BuildState::Failure
    } else {
        BuildState::Incomplete
    };

    let started_at: Option<DateTime<Utc>> = tokio::fs::metadata(&artifact_root)
        .await
        .ok()
        .and_then(|m| m.modified().ok())
        .map(Into::into);

    let mut build = Build::new(label, state, artifact_root);
    build.started_at = started_at;
    build
}

async fn path_exists(path: PathBuf) -> bool {
    tokio::fs::metadata(path).await.is_ok()
}

/// Project names map onto directory names; anything that could address
/// outside the projects dir is treated as unknown.
fn is_valid_project_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}
