//! Command execution
//!
//! One function per subcommand. `generate` drives a full pipeline run with a
//! spinner tracking the phase, then renders and performs the requested
//! actions. Functions return an exit code; only unexpected failures bubble
//! as errors.

use anyhow::Result;
use atelier_common::{export, GeminiClient, GenerationError, Phase, Studio, StudioConfig};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::path::Path;
use std::time::Duration;

use crate::actions;
use crate::errors::{EXIT_GENERATION_FAILED, EXIT_NO_API_KEY, EXIT_SUCCESS};
use crate::render;

fn phase_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Run one generation pipeline and present the result.
pub async fn generate(
    prompt: &str,
    out: &Path,
    save: bool,
    copy: bool,
    share: bool,
    json: bool,
) -> Result<i32> {
    let config = StudioConfig::load();
    let client = match GeminiClient::new(config) {
        Ok(client) => client,
        Err(GenerationError::MissingApiKey) => {
            eprintln!("  {}", GenerationError::MissingApiKey.to_string().yellow());
            return Ok(EXIT_NO_API_KEY);
        }
        Err(e) => return Err(e.into()),
    };
    let mut studio = Studio::new(client);

    let spinner = phase_spinner();
    spinner.set_message("Distilling the concept");
    let phase = studio
        .submit(prompt, |phase| {
            if phase == Phase::GeneratingImage {
                spinner.set_message("Manifesting the visual");
            }
        })
        .await;
    spinner.finish_and_clear();

    match phase {
        Phase::Complete | Phase::Error if studio.concept().is_some() => {}
        Phase::Error => {
            render::failure(studio.error().unwrap_or("Generation failed."));
            return Ok(EXIT_GENERATION_FAILED);
        }
        _ => {
            // Empty prompt was rejected before any transition.
            eprintln!("  {}", "Nothing to generate: the idea is empty.".yellow());
            return Ok(EXIT_GENERATION_FAILED);
        }
    }

    let concept = studio.concept().expect("concept present").clone();
    let image_url = studio.image_url().map(str::to_string);

    if json {
        println!("{}", export::to_json(&concept)?);
    } else {
        render::concept(&concept, image_url.is_some());
    }

    if phase == Phase::Error {
        // Image step failed after a good concept; show what we have, flag it.
        render::failure(studio.error().unwrap_or("Generation failed."));
    }

    if save {
        actions::save_bundle(out, &concept, image_url.as_deref());
    }
    if copy {
        actions::copy_markdown(&concept).await;
    }
    if share {
        actions::share(&concept).await;
    }

    if phase == Phase::Error {
        Ok(EXIT_GENERATION_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Print the resolved configuration.
pub fn config() -> i32 {
    render::config(&StudioConfig::load());
    EXIT_SUCCESS
}
