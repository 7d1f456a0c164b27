//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::application::services::reconcile;
use crate::domain::config::Config;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::RealFs;
use crate::output::OutputContext;
use crate::output::reporter::TerminalReporter;

/// Reconciles declarative compose projects against a container backend
#[derive(Parser)]
#[command(name = "stevedore", version)]
pub struct Cli {
    /// Path to the JSON configuration document
    #[arg(short, long)]
    pub config: PathBuf,

    /// Directory where rendered compose files are written
    #[arg(short, long, default_value = "/run/stevedore")]
    pub output_dir: PathBuf,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,
}

impl Cli {
    /// Load the configuration and run one reconciliation pass.
    ///
    /// # Errors
    ///
    /// Returns an error on an unreadable or malformed configuration
    /// document, or when the pass itself fails.
    pub async fn run(self) -> Result<()> {
        let ctx = OutputContext::new(self.no_color, self.quiet);

        let raw = std::fs::read_to_string(&self.config)
            .with_context(|| format!("cannot read {}", self.config.display()))?;
        let config = Config::from_json(&raw)
            .with_context(|| format!("cannot parse {}", self.config.display()))?;

        let runner = TokioCommandRunner;
        let fs = RealFs;
        let reporter = TerminalReporter::new(&ctx);
        reconcile::reconcile(&config, &self.output_dir, &runner, &fs, &reporter).await
    }
}
