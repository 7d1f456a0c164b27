//! Application service — container backend introspection.
//!
//! Discovers, for each running container, the compose file and project name
//! that produced it by querying the backend's compose labels.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::ports::{CommandRunner, LocalFs};
use crate::domain::error::BackendError;
use crate::domain::project::RunningProject;

/// Compose label holding the project's working directory.
const LABEL_WORKING_DIR: &str = "com.docker.compose.project.working_dir";
/// Compose label holding the configured compose file path.
const LABEL_CONFIG_FILES: &str = "com.docker.compose.project.config_files";
/// Compose label holding the project name.
const LABEL_PROJECT: &str = "com.docker.compose.project";

/// Read-only introspection over the configured container backend.
pub struct BackendIntrospector<'a, C, F> {
    backend: &'a str,
    runner: &'a C,
    fs: &'a F,
}

impl<'a, C: CommandRunner, F: LocalFs> BackendIntrospector<'a, C, F> {
    pub fn new(backend: &'a str, runner: &'a C, fs: &'a F) -> Self {
        Self { backend, runner, fs }
    }

    /// Look up the compose file and project name behind one running
    /// container.
    ///
    /// Returns `Ok(None)` when the file the labels point at no longer
    /// exists on disk — the container may outlive a removed or relocated
    /// compose file, and then simply contributes nothing to the running
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::EmptyContainerId`] for an empty id, and
    /// surfaces any failing backend invocation.
    pub async fn describe_container(&self, container_id: &str) -> Result<Option<RunningProject>> {
        if container_id.is_empty() {
            return Err(BackendError::EmptyContainerId.into());
        }

        let working_dir = self.label(container_id, LABEL_WORKING_DIR).await?;
        let config_file = self.label(container_id, LABEL_CONFIG_FILES).await?;
        let project = self.label(container_id, LABEL_PROJECT).await?;

        // The backend reports the config file either absolute or relative
        // to the working directory, depending on how the project was
        // brought up.
        let reported = PathBuf::from(&config_file);
        let compose_file = if reported.starts_with(&working_dir) {
            reported
        } else {
            Path::new(&working_dir).join(reported)
        };

        if !self.fs.exists(&compose_file) {
            return Ok(None);
        }

        Ok(Some(RunningProject {
            compose_file: self.fs.canonicalize(&compose_file)?,
            project,
        }))
    }

    /// Collect the deduplicated set of running compose projects.
    ///
    /// # Errors
    ///
    /// Surfaces any failing backend invocation.
    pub async fn list_running(&self) -> Result<BTreeSet<RunningProject>> {
        let output = self.runner.run(self.backend, &["ps", "-q"]).await?;

        let mut running = BTreeSet::new();
        for container_id in output.stdout.lines().map(str::trim) {
            if container_id.is_empty() {
                continue;
            }
            if let Some(info) = self.describe_container(container_id).await? {
                running.insert(info);
            }
        }
        Ok(running)
    }

    async fn label(&self, container_id: &str, label: &str) -> Result<String> {
        let format = format!("--format={{{{ index .Config.Labels \"{label}\" }}}}");
        let output = self
            .runner
            .run(self.backend, &["inspect", container_id, format.as_str()])
            .await?;
        Ok(output.stdout)
    }
}
