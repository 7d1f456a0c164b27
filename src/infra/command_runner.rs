//! Process execution backed by tokio.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, RunOutput};

/// Production `CommandRunner` — spawns the backend binary and captures its
/// output. No engine-imposed timeout: the backend's own exit behavior
/// governs the wall clock, and its failures are propagated as-is.
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run_unchecked(&self, program: &str, args: &[&str]) -> Result<RunOutput> {
        let output = tokio::process::Command::new(program)
            .args(args)
            .output()
            .await
            .with_context(|| format!("failed to spawn {program}"))?;

        Ok(RunOutput {
            // A signal-terminated child has no exit code; report -1.
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
