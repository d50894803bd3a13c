//! Build-results routes: project overview, build pages, artifact serving.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;
use crate::error::ApiError;
use buildboard_core::artifact::{self, ResolvedArtifact};
use buildboard_core::locator::{self, Located};
use buildboard_core::{Build, BuildState, Error as CoreError, Project, navigator, refresh};
use buildboard_store::ProjectRepo;

// ============================================================================
// Page models
// ============================================================================

/// Everything an external renderer needs for one build page.
#[derive(Debug, Serialize)]
pub struct BuildPage {
    pub project: String,
    /// The displayed build; `None` when the project has no builds yet.
    pub build: Option<BuildView>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub latest: Option<String>,
    /// Most recent builds, newest first, at most the configured limit.
    pub recent: Vec<BuildLink>,
    /// Remaining builds, newest first, for a collapsed selection.
    pub older: Vec<BuildLink>,
    /// Whether the client should poll for updates.
    pub auto_refresh: bool,
}

#[derive(Debug, Serialize)]
pub struct BuildView {
    pub label: String,
    pub state: BuildState,
    pub started_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct BuildLink {
    pub label: String,
    pub state: BuildState,
}

impl From<&Build> for BuildView {
    fn from(build: &Build) -> Self {
        Self {
            label: build.label.to_string(),
            state: build.state,
            started_at: build.started_at,
        }
    }
}

impl From<&Build> for BuildLink {
    fn from(build: &Build) -> Self {
        Self {
            label: build.label.to_string(),
            state: build.state,
        }
    }
}

// ============================================================================
// Result descriptor
// ============================================================================

/// What a build-results request resolves to, independent of HTTP.
#[derive(Debug)]
pub enum BuildsOutcome {
    Page(Box<BuildPage>),
    Artifact {
        bytes: Bytes,
        content_type: &'static str,
    },
    Redirect {
        location: String,
    },
    NotFound {
        message: String,
    },
}

impl BuildsOutcome {
    fn not_found(err: CoreError) -> Self {
        BuildsOutcome::NotFound {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for BuildsOutcome {
    fn into_response(self) -> Response {
        match self {
            BuildsOutcome::Page(page) => Json(page).into_response(),
            BuildsOutcome::Artifact {
                bytes,
                content_type,
            } => ([(header::CONTENT_TYPE, content_type)], bytes).into_response(),
            BuildsOutcome::Redirect { location } => {
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
            BuildsOutcome::NotFound { message } => {
                (StatusCode::NOT_FOUND, message).into_response()
            }
        }
    }
}

// ============================================================================
// Routes
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{project}", get(overview_route))
        .route("/{project}/{build}", get(build_route))
        .route("/{project}/{build}/artifact/{*path}", get(artifact_route))
}

async fn overview_route(
    State(state): State<AppState>,
    Path(project): Path<String>,
) -> Result<BuildsOutcome, ApiError> {
    project_overview(state.repo.as_ref(), state.build_history_limit, &project).await
}

async fn build_route(
    State(state): State<AppState>,
    Path((project, build)): Path<(String, String)>,
) -> Result<BuildsOutcome, ApiError> {
    build_page(
        state.repo.as_ref(),
        state.build_history_limit,
        &project,
        &build,
    )
    .await
}

async fn artifact_route(
    State(state): State<AppState>,
    Path((project, build, path)): Path<(String, String, String)>,
) -> Result<BuildsOutcome, ApiError> {
    build_artifact(state.repo.as_ref(), &project, &build, &path).await
}

// ============================================================================
// Request handlers
// ============================================================================

/// Project overview: the latest build, or the empty state for a project
/// that has not built yet.
pub async fn project_overview(
    repo: &dyn ProjectRepo,
    history_limit: usize,
    project_name: &str,
) -> Result<BuildsOutcome, ApiError> {
    let Some(project) = repo.find(project_name).await? else {
        return Ok(BuildsOutcome::not_found(CoreError::ProjectNotFound(
            project_name.to_string(),
        )));
    };
    Ok(page_for(&project, None, history_limit))
}

/// A specific build, addressed by label.
pub async fn build_page(
    repo: &dyn ProjectRepo,
    history_limit: usize,
    project_name: &str,
    label: &str,
) -> Result<BuildsOutcome, ApiError> {
    let Some(project) = repo.find(project_name).await? else {
        return Ok(BuildsOutcome::not_found(CoreError::ProjectNotFound(
            project_name.to_string(),
        )));
    };
    Ok(page_for(&project, Some(label), history_limit))
}

/// A file under a build's artifact root: content, a redirect into the
/// directory's index page, or 404.
pub async fn build_artifact(
    repo: &dyn ProjectRepo,
    project_name: &str,
    label: &str,
    path: &str,
) -> Result<BuildsOutcome, ApiError> {
    let Some(project) = repo.find(project_name).await? else {
        return Ok(BuildsOutcome::not_found(CoreError::ProjectNotFound(
            project_name.to_string(),
        )));
    };

    let build = match locator::locate(&project, Some(label)) {
        Ok(Located::Build(build)) => build,
        Ok(Located::NoBuildsYet) => {
            return Ok(BuildsOutcome::not_found(CoreError::BuildNotFound(
                label.to_string(),
            )));
        }
        Err(err) => return Ok(BuildsOutcome::not_found(err)),
    };

    Ok(match artifact::resolve(&build.artifact_root, path) {
        ResolvedArtifact::File {
            bytes,
            content_type,
        } => BuildsOutcome::Artifact {
            bytes,
            content_type,
        },
        ResolvedArtifact::Redirect { location } => BuildsOutcome::Redirect {
            location: format!("/builds/{project_name}/{label}/artifact/{location}"),
        },
        ResolvedArtifact::NotFound => BuildsOutcome::not_found(CoreError::ArtifactNotFound),
    })
}

// ============================================================================
// Helpers
// ============================================================================

fn page_for(project: &Project, label: Option<&str>, history_limit: usize) -> BuildsOutcome {
    match locator::locate(project, label) {
        Ok(Located::Build(build)) => {
            BuildsOutcome::Page(Box::new(build_page_model(project, build, history_limit)))
        }
        Ok(Located::NoBuildsYet) => BuildsOutcome::Page(Box::new(empty_page_model(project))),
        Err(err) => BuildsOutcome::not_found(err),
    }
}

fn build_page_model(project: &Project, build: &Build, history_limit: usize) -> BuildPage {
    let nav = navigator::navigate(project, build, history_limit);
    BuildPage {
        project: project.name.clone(),
        build: Some(BuildView::from(build)),
        previous: nav.previous.map(|b| b.label.to_string()),
        next: nav.next.map(|b| b.label.to_string()),
        latest: Some(nav.latest.label.to_string()),
        recent: nav.recent.into_iter().map(BuildLink::from).collect(),
        older: nav.older.into_iter().map(BuildLink::from).collect(),
        auto_refresh: refresh::should_auto_refresh(build),
    }
}

fn empty_page_model(project: &Project) -> BuildPage {
    BuildPage {
        project: project.name.clone(),
        build: None,
        previous: None,
        next: None,
        latest: None,
        recent: Vec::new(),
        older: Vec::new(),
        auto_refresh: false,
    }
}
