//! Error types for Buildboard.

use thiserror::Error;

/// Expected, non-fatal resolution failures. The HTTP layer renders the
/// display text of these verbatim as 404 bodies, so the formats are part
/// of the external contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Project {0:?} not found")]
    ProjectNotFound(String),

    #[error("Build {0:?} not found")]
    BuildNotFound(String),

    #[error("Artifact not found")]
    ArtifactNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            Error::ProjectNotFound("foo".to_string()).to_string(),
            r#"Project "foo" not found"#
        );
        assert_eq!(
            Error::BuildNotFound("24".to_string()).to_string(),
            r#"Build "24" not found"#
        );
    }
}
