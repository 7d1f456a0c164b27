//! Port trait definitions for the application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`
//! or `crate::output`.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::error::BackendError;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Captured result of one external command invocation. Both streams are
/// trimmed of surrounding whitespace.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Abstracts process execution so infrastructure can be swapped or faked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output. A non-zero exit is reported in
    /// the returned [`RunOutput`], not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if the process cannot be spawned.
    async fn run_unchecked(&self, program: &str, args: &[&str]) -> Result<RunOutput>;

    /// Run a program, treating a non-zero exit as a failure.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::CommandFailed`] on a non-zero exit, or the
    /// spawn error from [`CommandRunner::run_unchecked`].
    async fn run(&self, program: &str, args: &[&str]) -> Result<RunOutput> {
        let output = self.run_unchecked(program, args).await?;
        if output.exit_code != 0 {
            let command = std::iter::once(program)
                .chain(args.iter().copied())
                .collect::<Vec<_>>()
                .join(" ");
            return Err(BackendError::CommandFailed {
                command,
                exit_code: output.exit_code,
                stdout: output.stdout,
                stderr: output.stderr,
            }
            .into());
        }
        Ok(output)
    }
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts local filesystem access so services can be tested in memory.
pub trait LocalFs {
    /// Checks whether a filesystem entry exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file's full contents as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is absent or unreadable.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write a string to a file, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Create a single directory. The parent must already exist; a directory
    /// that already exists is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_dir(&self, path: &Path) -> Result<()>;

    /// Set unix permission bits. No-op on non-unix platforms.
    ///
    /// # Errors
    ///
    /// Returns an error if the permissions cannot be changed.
    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()>;

    /// Remove a directory and everything beneath it.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be removed.
    fn remove_dir_all(&self, path: &Path) -> Result<()>;

    /// Resolve a path to its canonical absolute form.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or cannot be resolved.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
