//! Navigation between a project's builds.

use crate::project::{Build, Project};

/// Links surrounding one build, computed from a snapshot of the project's
/// build sequence.
#[derive(Debug)]
pub struct Navigation<'a> {
    /// Greatest label strictly below the current build, if any.
    pub previous: Option<&'a Build>,
    /// Smallest label strictly above the current build, if any.
    pub next: Option<&'a Build>,
    /// The highest-labeled build; may be the current build itself.
    pub latest: &'a Build,
    /// The most recent builds, newest first, at most `history_limit` long.
    pub recent: Vec<&'a Build>,
    /// Everything not in `recent`, newest first.
    pub older: Vec<&'a Build>,
}

/// Compute navigation for `current` within `project`.
///
/// `current` must be one of the project's builds, so the sequence is
/// non-empty here. Pure; operates on the snapshot only.
pub fn navigate<'a>(project: &'a Project, current: &Build, history_limit: usize) -> Navigation<'a> {
    let builds = project.builds();

    let previous = builds.iter().rev().find(|b| b.label < current.label);
    let next = builds.iter().find(|b| b.label > current.label);
    let latest = builds.last().expect("navigate requires at least one build");

    let split = builds.len().saturating_sub(history_limit);
    let recent = builds[split..].iter().rev().collect();
    let older = builds[..split].iter().rev().collect();

    Navigation {
        previous,
        next,
        latest,
        recent,
        older,
    }
}
