//! Running-project value type discovered from the backend.

use std::path::PathBuf;

/// One running compose project. Containers belonging to the same project
/// collapse to a single value (set semantics over both fields).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunningProject {
    /// Canonical absolute path of the compose file that produced the project.
    pub compose_file: PathBuf,
    /// Backend-assigned compose project name. Carried alongside the path
    /// because the backend would otherwise derive the project from the
    /// containing directory name, which is wrong for content-addressed
    /// artifact directories.
    pub project: String,
}
