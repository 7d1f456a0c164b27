//! Application service — rendered-artifact cleanup.

use std::path::Path;

use crate::application::ports::{LocalFs, ProgressReporter};
use crate::domain::artifact::is_within;

/// Deletes rendered compose artifacts once their project is torn down.
pub struct ArtifactCleaner<'a, F> {
    fs: &'a F,
    output_dir: &'a Path,
}

impl<'a, F: LocalFs> ArtifactCleaner<'a, F> {
    pub fn new(fs: &'a F, output_dir: &'a Path) -> Self {
        Self { fs, output_dir }
    }

    /// Remove the directory holding `rendered_path`, but only when that
    /// directory sits strictly below the managed output root. Compose files
    /// that never needed rendering live in their source-of-truth store and
    /// must never be deleted.
    ///
    /// Deletion failures are warned about and absorbed; the artifact stays
    /// behind for a future pass or manual removal.
    pub fn cleanup(&self, rendered_path: &Path, reporter: &impl ProgressReporter) {
        let root = self
            .fs
            .canonicalize(self.output_dir)
            .unwrap_or_else(|_| self.output_dir.to_path_buf());
        let resolved = self
            .fs
            .canonicalize(rendered_path)
            .unwrap_or_else(|_| rendered_path.to_path_buf());

        let Some(artifact_dir) = resolved.parent() else {
            return;
        };
        if !is_within(artifact_dir, &root) || artifact_dir == root {
            return;
        }

        // The rendered file and its private directory were created as a
        // unit; they are removed as one.
        if let Err(e) = self.fs.remove_dir_all(artifact_dir) {
            reporter.warn(&format!(
                "Failed to delete {}: {e:#}",
                artifact_dir.display()
            ));
        }
    }
}
