//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Rendering errors ──────────────────────────────────────────────────────────

/// Errors raised while rendering a compose template.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Compose template not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("Secret file not found: {0}")]
    SecretNotFound(PathBuf),
}

// ── Backend errors ────────────────────────────────────────────────────────────

/// Errors raised while talking to the container backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Container id must not be empty")]
    EmptyContainerId,

    #[error("Command `{command}` exited with status {exit_code}\nstderr: {stderr}\nstdout: {stdout}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stdout: String,
        stderr: String,
    },
}

// ── Configuration errors ──────────────────────────────────────────────────────

/// Errors raised while loading the configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse JSON input: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid project name '{0}': must be non-empty and must not contain '/'")]
    InvalidProjectName(String),
}
