//! Projects index for the dashboard renderer.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::AppState;
use crate::error::ApiError;
use buildboard_core::BuildState;

#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub build_count: usize,
    pub last_label: Option<String>,
    pub last_state: Option<BuildState>,
}

pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<ProjectSummary>>, ApiError> {
    let projects = state.repo.list().await?;
    let summaries = projects
        .iter()
        .map(|project| ProjectSummary {
            name: project.name.clone(),
            build_count: project.builds().len(),
            last_label: project.last_build().map(|b| b.label.to_string()),
            last_state: project.last_build().map(|b| b.state),
        })
        .collect();
    Ok(Json(summaries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildboard_core::{Build, Project};
    use buildboard_store::MemoryProjectRepo;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_index_summarizes_latest_builds() {
        let repo = MemoryProjectRepo::with_projects(vec![
            Project::new(
                "widget",
                vec![
                    Build::new("1", BuildState::Failure, PathBuf::new()),
                    Build::new("2", BuildState::Success, PathBuf::new()),
                ],
            ),
            Project::new("fresh", vec![]),
        ]);
        let state = AppState::new(Arc::new(repo), 25);

        let Json(summaries) = index(State(state)).await.unwrap();
        assert_eq!(summaries.len(), 2);

        let fresh = &summaries[0];
        assert_eq!(fresh.name, "fresh");
        assert_eq!(fresh.build_count, 0);
        assert!(fresh.last_label.is_none());

        let widget = &summaries[1];
        assert_eq!(widget.last_label.as_deref(), Some("2"));
        assert_eq!(widget.last_state, Some(BuildState::Success));
    }
}
