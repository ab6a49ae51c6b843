//! Terminal rendering of a completed brand concept
//!
//! The styled results view: name, tagline, narrative, audience, vibe,
//! truecolor palette swatches, products, marketing copy. `--json` bypasses
//! all of this and prints the canonical JSON rendering instead.

use atelier_common::{BrandConcept, BrandPalette};
use owo_colors::OwoColorize;

const HR: &str = "────────────────────────────────────────────────────────";

fn section(title: &str) {
    println!();
    println!("  {}", title.to_uppercase().dimmed());
}

/// Print the full styled results view.
pub fn concept(concept: &BrandConcept, has_visual: bool) {
    println!();
    println!("  {}", concept.name.bold());
    println!("  {}", concept.tagline.italic());
    println!("  {}", HR.dimmed());

    section("The Narrative");
    println!("  {}", concept.description);

    section("The Vibe");
    println!("  {}", concept.vibe);

    section("Target Audience");
    println!("  {}", concept.target_audience);

    section("Color Palette");
    for (slot, color) in concept.palette.slots() {
        match BrandPalette::to_rgb(color) {
            Some((r, g, b)) => {
                println!("  {}  {}  {}", "      ".on_truecolor(r, g, b), color, slot.dimmed());
            }
            None => println!("  {color}  {}", slot.dimmed()),
        }
    }

    section("Signature Products");
    for product in &concept.products {
        println!(
            "  {} {}",
            product.name.bold(),
            format!("({})", product.price_point).dimmed()
        );
        println!("    {}", product.description);
    }

    section("Marketing Copy");
    println!("  {}", format!("\"{}\"", concept.marketing_copy).italic());

    println!();
    println!("  {}", HR.dimmed());
    if has_visual {
        println!("  {}", "Visual generated. Use --save to write the PNG.".dimmed());
    } else {
        println!("  {}", "No visual was generated for this run.".dimmed());
    }
    println!();
}

/// Print the generic failure banner for a run that ended in the error phase.
pub fn failure(message: &str) {
    eprintln!();
    eprintln!("  {}", message.red());
    eprintln!();
}

/// Print the resolved configuration, key redacted.
pub fn config(config: &atelier_common::StudioConfig) {
    println!("endpoint     {}", config.endpoint);
    println!("text_model   {}", config.text_model);
    println!("image_model  {}", config.image_model);
    println!("timeout      {}s", config.timeout_secs);
    println!("api_key      {}", config.redacted_key());
    if let Some(path) = atelier_common::StudioConfig::path() {
        println!("config file  {}", path.display());
    }
}
