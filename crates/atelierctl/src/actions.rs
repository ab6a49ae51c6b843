//! Post-generation actions: clipboard, file export, share
//!
//! These are fire-and-forget conveniences over the completed concept. Their
//! failures (clipboard denial, absent share target) are soft: logged,
//! reported quietly, never an exit-code change and never a pipeline state
//! change.

use atelier_common::export;
use atelier_common::BrandConcept;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// How long the "copied" acknowledgement stays on screen before it clears.
const COPY_ACK: Duration = Duration::from_secs(2);

/// Reference link included in shared summaries.
const SHARE_URL: &str = "https://github.com/atelier-studio/atelier";

/// Payload for a platform share target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareContent {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Compose the {title, text, url} triple for a concept.
pub fn share_content(concept: &BrandConcept) -> ShareContent {
    ShareContent {
        title: concept.name.clone(),
        text: format!("{}: {}", concept.name, concept.tagline),
        url: SHARE_URL.to_string(),
    }
}

/// Whether the platform offers a native share target. Desktop terminals do
/// not, so share always takes the clipboard fallback today; the seam exists
/// for platforms that grow one.
fn native_share_available() -> bool {
    false
}

fn set_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text.to_string()) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("clipboard write failed: {e}");
                false
            }
        },
        Err(e) => {
            tracing::debug!("clipboard unavailable: {e}");
            false
        }
    }
}

/// Copy the Markdown rendering to the system clipboard, with a transient
/// acknowledgement that self-clears after two seconds.
pub async fn copy_markdown(concept: &BrandConcept) {
    let markdown = export::to_markdown(concept);
    if set_clipboard(&markdown) {
        print!("  {}", "Copied to clipboard".green());
        let _ = io::stdout().flush();
        tokio::time::sleep(COPY_ACK).await;
        print!("\r\x1b[K");
        let _ = io::stdout().flush();
    } else {
        println!("  {}", "Clipboard unavailable; nothing copied".dimmed());
    }
}

/// Share the concept: native share target when one exists, clipboard
/// fallback otherwise. Neither absence nor cancellation is an error.
pub async fn share(concept: &BrandConcept) {
    let content = share_content(concept);
    if native_share_available() {
        // Unreachable on current platforms; kept as the dispatch point for
        // ones with a share sheet.
        tracing::debug!(title = %content.title, "invoking native share");
        return;
    }
    let summary = format!("{}\n{}", content.text, content.url);
    if set_clipboard(&summary) {
        println!("  {}", "Share summary copied to clipboard".green());
    } else {
        println!("  {}", "No share target and no clipboard; share skipped".dimmed());
    }
}

/// Write the export bundle and report each file written.
pub fn save_bundle(dir: &Path, concept: &BrandConcept, image_url: Option<&str>) {
    match export::export_bundle(dir, concept, image_url) {
        Ok(paths) => {
            for path in paths {
                println!("  {} {}", "saved".green(), path.display());
            }
        }
        Err(e) => {
            tracing::debug!("export failed: {e}");
            println!("  {} {}", "export failed:".yellow(), e);
        }
    }
}
