//! Configuration document types and validators.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use crate::domain::error::ConfigError;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration document, supplied as JSON via `--config`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Container backend executable name, e.g. `docker` or `podman`.
    pub backend: String,
    /// Desired compose projects, keyed by project name. `BTreeMap` so a
    /// pass walks projects in a stable order.
    #[serde(default)]
    pub projects: BTreeMap<String, ProjectConfig>,
}

/// One desired compose project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Path to the compose file, which may be a template with `${key}`
    /// placeholders.
    pub compose_file: PathBuf,
    /// Placeholder name → literal replacement value.
    #[serde(default)]
    pub substitutions: BTreeMap<String, String>,
    /// Placeholder name → path of a local file holding the replacement value.
    #[serde(default)]
    pub secrets: BTreeMap<String, PathBuf>,
}

impl Config {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or an invalid project name.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        for name in config.projects.keys() {
            validate_project_name(name)?;
        }
        Ok(config)
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a project name. The name doubles as the backend project
/// identity and as a directory-name suffix for rendered artifacts, so it
/// must be non-empty and must not contain a path separator.
///
/// # Errors
///
/// Returns an error if the name is empty or contains `/`.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('/') {
        return Err(ConfigError::InvalidProjectName(name.to_string()).into());
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
