//! Application service — compose template rendering.
//!
//! Substitutes `${key}` placeholders with configured literals and secret
//! file contents, writing the result into a content-addressed directory
//! under the managed output root.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::LocalFs;
use crate::domain::artifact::artifact_dir_name;
use crate::domain::error::RenderError;

/// Name of the rendered compose file inside its artifact directory.
pub const RENDERED_FILE_NAME: &str = "compose.yml";

/// Owner-only traversal for artifact directories. Rendered output may embed
/// secret values in plain text.
const ARTIFACT_DIR_MODE: u32 = 0o500;
/// Owner-only read for the rendered compose file.
const ARTIFACT_FILE_MODE: u32 = 0o400;

/// Renders compose templates into content-addressed artifacts.
pub struct TemplateRenderer<'a, F> {
    fs: &'a F,
    output_dir: &'a Path,
}

impl<'a, F: LocalFs> TemplateRenderer<'a, F> {
    pub fn new(fs: &'a F, output_dir: &'a Path) -> Self {
        Self { fs, output_dir }
    }

    /// Render one compose template and return the path to hand to the
    /// backend.
    ///
    /// With no substitutions and no secrets the template path is returned
    /// unchanged and nothing is written: such files stay wherever their
    /// source-of-truth store put them and are never treated as owned output.
    ///
    /// Otherwise every `${key}` placeholder is replaced in two passes:
    /// configured literals first, then secret file contents (trailing
    /// carriage returns trimmed). A key appearing in both maps is undefined
    /// configuration; the second pass happens to win, which is noted here
    /// rather than promised.
    ///
    /// The output directory name embeds a digest of the rendered text, so
    /// identical content maps to the same path on every run while changed
    /// content gets a fresh directory — the superseded artifact stays on
    /// disk for the backend to spin down before cleanup removes it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateNotFound`] or
    /// [`RenderError::SecretNotFound`] when an input is missing, or a
    /// filesystem error when the artifact cannot be written.
    pub fn render(
        &self,
        template: &Path,
        project_name: &str,
        substitutions: &BTreeMap<String, String>,
        secrets: &BTreeMap<String, PathBuf>,
    ) -> Result<PathBuf> {
        if !self.fs.exists(template) {
            return Err(RenderError::TemplateNotFound(template.to_path_buf()).into());
        }

        if substitutions.is_empty() && secrets.is_empty() {
            return Ok(template.to_path_buf());
        }

        let mut text = self.fs.read_to_string(template)?;

        for (key, value) in substitutions {
            text = text.replace(&placeholder(key), value);
        }

        for (key, secret_path) in secrets {
            if !self.fs.exists(secret_path) {
                return Err(RenderError::SecretNotFound(secret_path.clone()).into());
            }
            let secret = self.fs.read_to_string(secret_path)?;
            text = text.replace(&placeholder(key), secret.trim_end_matches('\r'));
        }

        let project_dir = self.output_dir.join(artifact_dir_name(&text, project_name));
        let output_path = project_dir.join(RENDERED_FILE_NAME);

        // An identical rendering already on disk is left untouched — the
        // file was made read-only when it was first written.
        if self.fs.exists(&output_path) && self.fs.read_to_string(&output_path)? == text {
            return Ok(output_path);
        }

        // Non-recursive: the output root itself must already exist.
        self.fs
            .create_dir(&project_dir)
            .with_context(|| format!("creating artifact dir {}", project_dir.display()))?;
        self.fs.write(&output_path, &text)?;

        // Restrict immediately after writing; the rendered text may hold
        // secrets.
        self.fs.set_permissions(&output_path, ARTIFACT_FILE_MODE)?;
        self.fs.set_permissions(&project_dir, ARTIFACT_DIR_MODE)?;

        Ok(output_path)
    }
}

fn placeholder(key: &str) -> String {
    format!("${{{key}}}")
}
