//! Project and build domain types.

use std::cmp::Ordering;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The ordering/identifying key of a build within a project.
///
/// Labels are typically numeric ("24") but may carry sub-numbers ("24.2").
/// They compare with a natural order: runs of digits compare numerically,
/// everything else byte-wise, so `9 < 10` and `24.2 < 24.10`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct BuildLabel(String);

impl BuildLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BuildLabel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Ord for BuildLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(&self.0, &other.0)
    }
}

impl PartialOrd for BuildLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Natural comparison: digit runs compare as integers, other runs byte-wise.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (mut a, mut b) = (a.as_bytes(), b.as_bytes());

    while !a.is_empty() && !b.is_empty() {
        let a_digits = a[0].is_ascii_digit();
        let b_digits = b[0].is_ascii_digit();

        if a_digits && b_digits {
            let (a_run, a_rest) = split_digit_run(a);
            let (b_run, b_rest) = split_digit_run(b);
            // Strip leading zeros; a longer stripped run is a larger number.
            let a_num = strip_zeros(a_run);
            let b_num = strip_zeros(b_run);
            let ord = a_num
                .len()
                .cmp(&b_num.len())
                .then_with(|| a_num.cmp(b_num))
                // "07" and "7" are distinct labels; break the tie textually.
                .then_with(|| a_run.cmp(b_run));
            if ord != Ordering::Equal {
                return ord;
            }
            a = a_rest;
            b = b_rest;
        } else {
            let ord = a[0].cmp(&b[0]);
            if ord != Ordering::Equal {
                return ord;
            }
            a = &a[1..];
            b = &b[1..];
        }
    }

    a.len().cmp(&b.len())
}

fn split_digit_run(s: &[u8]) -> (&[u8], &[u8]) {
    let end = s.iter().position(|b| !b.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn strip_zeros(run: &[u8]) -> &[u8] {
    let start = run.iter().position(|&b| b != b'0').unwrap_or(run.len());
    &run[start..]
}

/// Completion state of a build, derived from the result marker the
/// external build runner writes into the build directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildState {
    /// No result marker recorded yet; the build is still running.
    Incomplete,
    Success,
    Failure,
}

impl BuildState {
    pub fn is_complete(&self) -> bool {
        !matches!(self, BuildState::Incomplete)
    }
}

/// A single build within a project. Immutable once read; the external
/// runner may change the on-disk state between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Build {
    pub label: BuildLabel,
    pub state: BuildState,
    /// Directory under which this build's output files live.
    pub artifact_root: PathBuf,
    /// When the build directory was created, if known.
    pub started_at: Option<DateTime<Utc>>,
}

impl Build {
    pub fn new(label: impl Into<BuildLabel>, state: BuildState, artifact_root: PathBuf) -> Self {
        Self {
            label: label.into(),
            state,
            artifact_root,
            started_at: None,
        }
    }
}

/// A project and its ordered build sequence, read as one snapshot.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    builds: Vec<Build>,
}

impl Project {
    /// Create a project snapshot. Builds are sorted ascending by label;
    /// labels are assumed unique within one project.
    pub fn new(name: impl Into<String>, mut builds: Vec<Build>) -> Self {
        builds.sort_by(|a, b| a.label.cmp(&b.label));
        Self {
            name: name.into(),
            builds,
        }
    }

    /// All builds, ascending by label.
    pub fn builds(&self) -> &[Build] {
        &self.builds
    }

    pub fn find_build(&self, label: &str) -> Option<&Build> {
        self.builds.iter().find(|b| b.label.as_str() == label)
    }

    /// The highest-labeled build, if any.
    pub fn last_build(&self) -> Option<&Build> {
        self.builds.last()
    }
}
