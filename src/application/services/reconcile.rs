//! Application service — the reconciliation pass.
//!
//! Diffs the desired project set against what the backend is running,
//! tears down stale projects, and (re)applies every desired one.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::ports::{CommandRunner, LocalFs, ProgressReporter};
use crate::application::services::cleanup::ArtifactCleaner;
use crate::application::services::introspect::BackendIntrospector;
use crate::application::services::render::TemplateRenderer;
use crate::domain::config::Config;

/// Run one reconciliation pass.
///
/// Rendering happens before any backend mutation: a desired project whose
/// template cannot render must not be misclassified as stale and torn down,
/// so a render failure aborts the pass. Failures during the down/up phase
/// are collected per project — the remaining projects are still processed,
/// and the pass ends with a single summarizing error.
///
/// # Errors
///
/// Returns an error when rendering or listing fails, or when at least one
/// project's down/up invocation failed.
pub async fn reconcile(
    config: &Config,
    output_dir: &Path,
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    let renderer = TemplateRenderer::new(fs, output_dir);
    let mut desired: BTreeSet<PathBuf> = BTreeSet::new();
    for (name, project) in &config.projects {
        let path = renderer.render(
            &project.compose_file,
            name,
            &project.substitutions,
            &project.secrets,
        )?;
        // Running paths come back canonical; resolve the desired side the
        // same way so the diff below compares like with like.
        desired.insert(fs.canonicalize(&path).unwrap_or(path));
    }

    let introspector = BackendIntrospector::new(&config.backend, runner, fs);
    let running = introspector.list_running().await?;

    let cleaner = ArtifactCleaner::new(fs, output_dir);
    let mut failures: Vec<String> = Vec::new();

    // Downs address paths the desired set no longer contains, so they never
    // interleave with the ups below.
    for info in running
        .iter()
        .filter(|info| !desired.contains(&info.compose_file))
    {
        reporter.step(&format!("Unloading: {}", info.compose_file.display()));
        let file = info.compose_file.to_string_lossy();
        let down = runner
            .run(
                &config.backend,
                &[
                    "compose",
                    "-p",
                    info.project.as_str(),
                    "--file",
                    file.as_ref(),
                    "down",
                ],
            )
            .await;
        match down {
            // The rendered file embedded secrets; remove it now that the
            // project is gone. A failed down keeps the artifact so a future
            // pass can retry.
            Ok(_) => cleaner.cleanup(&info.compose_file, reporter),
            Err(e) => failures.push(format!("{}: {e:#}", info.project)),
        }
    }

    for path in &desired {
        reporter.step(&format!("Loading: {}", path.display()));
        let file = path.to_string_lossy();
        if let Err(e) = runner
            .run(
                &config.backend,
                &["compose", "--file", file.as_ref(), "up", "--detach"],
            )
            .await
        {
            failures.push(format!("{}: {e:#}", path.display()));
        }
    }

    if failures.is_empty() {
        reporter.success(&format!("{} project(s) loaded", desired.len()));
        Ok(())
    } else {
        anyhow::bail!(
            "{} project(s) failed:\n{}",
            failures.len(),
            failures.join("\n")
        )
    }
}
