//! Command-line argument parsing
//!
//! Keeps the clap surface separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Atelier CLI
#[derive(Parser)]
#[command(name = "atelierctl")]
#[command(about = "Atelier - AI brand identity studio", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a brand identity and visual from a short idea
    Generate {
        /// The idea, e.g. "a coffee shop for introverts"
        #[arg(required = true)]
        idea: Vec<String>,

        /// Directory for exported files
        #[arg(long, default_value = ".")]
        out: PathBuf,

        /// Write the Markdown, JSON and PNG bundle after generation
        #[arg(long)]
        save: bool,

        /// Copy the Markdown rendering to the clipboard
        #[arg(long)]
        copy: bool,

        /// Share the result (falls back to copying when no share target exists)
        #[arg(long)]
        share: bool,

        /// Print the JSON rendering instead of the styled view
        #[arg(long)]
        json: bool,
    },

    /// Show the resolved configuration (API key redacted)
    Config,
}

/// Join the idea words back into the single prompt the user typed.
pub fn join_idea(words: &[String]) -> String {
    words.join(" ")
}
