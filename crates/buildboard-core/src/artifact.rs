//! Artifact resolution under a build's output directory.

use std::fs;
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::content_type::content_type_for_path;

/// Outcome of resolving a requested path against an artifact root.
///
/// There is no error channel here: traversal attempts, missing files, and
/// files vanishing mid-resolution are all `NotFound`, indistinguishable to
/// the caller.
#[derive(Debug)]
pub enum ResolvedArtifact {
    File {
        bytes: Bytes,
        content_type: &'static str,
    },
    /// The path is a directory; the client should re-request `location`
    /// (relative to the same artifact root). Whether that index file
    /// exists is decided by the follow-up request.
    Redirect { location: String },
    NotFound,
}

/// Resolve `path` (slash-separated, relative) under `artifact_root`.
pub fn resolve(artifact_root: &Path, path: &str) -> ResolvedArtifact {
    let Some(relative) = sanitize(path) else {
        return ResolvedArtifact::NotFound;
    };
    let full = artifact_root.join(relative);

    let Ok(metadata) = fs::metadata(&full) else {
        return ResolvedArtifact::NotFound;
    };

    if metadata.is_dir() {
        let trimmed = path.trim_end_matches('/');
        let location = if trimmed.is_empty() {
            "index.html".to_string()
        } else {
            format!("{trimmed}/index.html")
        };
        return ResolvedArtifact::Redirect { location };
    }

    if !metadata.is_file() {
        return ResolvedArtifact::NotFound;
    }

    match fs::read(&full) {
        Ok(bytes) => ResolvedArtifact::File {
            bytes: Bytes::from(bytes),
            content_type: content_type_for_path(&full),
        },
        // The file disappeared between metadata and read; treat as absent.
        Err(_) => ResolvedArtifact::NotFound,
    }
}

/// Normalize a requested path into a relative `PathBuf`.
///
/// Empty and `.` segments are dropped; any `..` segment rejects the whole
/// path so nothing can escape the artifact root.
fn sanitize(path: &str) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            segment => clean.push(segment),
        }
    }
    Some(clean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn artifact_root() -> TempDir {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("reports")).unwrap();
        let mut index = File::create(root.path().join("reports/index.html")).unwrap();
        index.write_all(b"<html>report</html>").unwrap();
        let mut log = File::create(root.path().join("build.txt")).unwrap();
        log.write_all(b"all green").unwrap();
        root
    }

    #[test]
    fn test_resolve_regular_file() {
        let root = artifact_root();
        match resolve(root.path(), "build.txt") {
            ResolvedArtifact::File {
                bytes,
                content_type,
            } => {
                assert_eq!(&bytes[..], b"all green");
                assert_eq!(content_type, "text/plain");
            }
            other => panic!("expected file, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_directory_redirects_to_index() {
        let root = artifact_root();
        match resolve(root.path(), "reports") {
            ResolvedArtifact::Redirect { location } => {
                assert_eq!(location, "reports/index.html");
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_slash_does_not_double_up() {
        let root = artifact_root();
        match resolve(root.path(), "reports/") {
            ResolvedArtifact::Redirect { location } => {
                assert_eq!(location, "reports/index.html");
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_redirect_is_issued_even_without_index_file() {
        let root = artifact_root();
        fs::create_dir(root.path().join("empty")).unwrap();
        assert!(matches!(
            resolve(root.path(), "empty"),
            ResolvedArtifact::Redirect { .. }
        ));
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let root = artifact_root();
        assert!(matches!(
            resolve(root.path(), "nope.txt"),
            ResolvedArtifact::NotFound
        ));
    }

    #[test]
    fn test_traversal_attempts_are_not_found() {
        let outer = TempDir::new().unwrap();
        let root = outer.path().join("artifacts");
        fs::create_dir(&root).unwrap();
        let mut secret = File::create(outer.path().join("secret")).unwrap();
        secret.write_all(b"hidden").unwrap();

        assert!(matches!(
            resolve(&root, "../secret"),
            ResolvedArtifact::NotFound
        ));
        assert!(matches!(
            resolve(&root, "sub/../../secret"),
            ResolvedArtifact::NotFound
        ));
    }

    #[test]
    fn test_dot_and_empty_segments_are_ignored() {
        let root = artifact_root();
        match resolve(root.path(), "./reports//index.html") {
            ResolvedArtifact::File { content_type, .. } => {
                assert_eq!(content_type, "text/html");
            }
            other => panic!("expected file, got {other:?}"),
        }
    }

    #[test]
    fn test_resolution_is_stable() {
        let root = artifact_root();
        let first = resolve(root.path(), "build.txt");
        let second = resolve(root.path(), "build.txt");
        match (first, second) {
            (
                ResolvedArtifact::File {
                    bytes: a,
                    content_type: cta,
                },
                ResolvedArtifact::File {
                    bytes: b,
                    content_type: ctb,
                },
            ) => {
                assert_eq!(a, b);
                assert_eq!(cta, ctb);
            }
            other => panic!("expected two files, got {other:?}"),
        }
    }
}
