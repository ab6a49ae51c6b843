//! Atelier CLI entry point
//!
//! Parses arguments, initializes logging to stderr, dispatches to command
//! execution, and exits with the command's code.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use atelierctl::cli::{join_idea, Cli, Commands};
use atelierctl::commands;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Generate {
            idea,
            out,
            save,
            copy,
            share,
            json,
        } => {
            let prompt = join_idea(&idea);
            commands::generate(&prompt, &out, save, copy, share, json).await?
        }
        Commands::Config => commands::config(),
    };

    std::process::exit(code);
}
