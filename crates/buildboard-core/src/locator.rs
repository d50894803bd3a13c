//! Build location within a project's build sequence.

use crate::error::{Error, Result};
use crate::project::{Build, Project};

/// Result of locating a build when no identifier was given.
///
/// A project with zero builds is a valid, renderable state, not an error;
/// it is distinct from a lookup for a label that does not exist.
#[derive(Debug)]
pub enum Located<'a> {
    Build(&'a Build),
    NoBuildsYet,
}

/// Find a build by label, or the latest build when `label` is `None`.
pub fn locate<'a>(project: &'a Project, label: Option<&str>) -> Result<Located<'a>> {
    match label {
        Some(label) => project
            .find_build(label)
            .map(Located::Build)
            .ok_or_else(|| Error::BuildNotFound(label.to_string())),
        None => Ok(project
            .last_build()
            .map(Located::Build)
            .unwrap_or(Located::NoBuildsYet)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::BuildState;
    use std::path::PathBuf;

    fn project(labels: &[&str]) -> Project {
        Project::new(
            "widget",
            labels
                .iter()
                .map(|l| Build::new(*l, BuildState::Success, PathBuf::new()))
                .collect(),
        )
    }

    #[test]
    fn test_locate_latest_when_no_label_given() {
        let project = project(&["23", "24", "25"]);
        match locate(&project, None).unwrap() {
            Located::Build(build) => assert_eq!(build.label.as_str(), "25"),
            Located::NoBuildsYet => panic!("expected a build"),
        }
    }

    #[test]
    fn test_locate_empty_project_is_not_an_error() {
        let project = project(&[]);
        assert!(matches!(
            locate(&project, None).unwrap(),
            Located::NoBuildsYet
        ));
    }

    #[test]
    fn test_locate_by_label() {
        let project = project(&["23", "24", "25"]);
        match locate(&project, Some("24")).unwrap() {
            Located::Build(build) => assert_eq!(build.label.as_str(), "24"),
            Located::NoBuildsYet => panic!("expected a build"),
        }
    }

    #[test]
    fn test_locate_unknown_label() {
        let project = project(&["23", "24"]);
        let err = locate(&project, Some("99")).unwrap_err();
        assert_eq!(err, Error::BuildNotFound("99".to_string()));
    }

    #[test]
    fn test_locate_label_in_empty_project() {
        let project = project(&[]);
        assert!(matches!(
            locate(&project, Some("1")),
            Err(Error::BuildNotFound(_))
        ));
    }
}
