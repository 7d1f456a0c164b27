//! Stevedore - reconciles declarative compose projects against a container backend

use clap::Parser;

use stevedore::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
