//! Export transforms
//!
//! Pure renderings of a completed concept (Markdown, pretty JSON) plus the
//! file bundle writer. The Markdown template is deterministic: the same
//! concept always yields byte-identical output. File names derive from a
//! slug of the brand name: `<slug>-Identity.md`, `<slug>-Data.json`,
//! `<slug>-Visual.png`.

use base64::Engine;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::concept::BrandConcept;

/// Errors from file export and data-URI decoding.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("not a base64 image data URI")]
    NotADataUri,

    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("write failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON render failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Lowercase the name and join alphanumeric runs with `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("brand");
    }
    slug
}

/// Deterministic Markdown rendering of the concept.
pub fn to_markdown(concept: &BrandConcept) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# {}", concept.name);
    let _ = writeln!(md);
    let _ = writeln!(md, "> {}", concept.tagline);
    let _ = writeln!(md);
    let _ = writeln!(md, "## The Narrative");
    let _ = writeln!(md);
    let _ = writeln!(md, "{}", concept.description);
    let _ = writeln!(md);
    let _ = writeln!(md, "## The Vibe");
    let _ = writeln!(md);
    let _ = writeln!(md, "{}", concept.vibe);
    let _ = writeln!(md);
    let _ = writeln!(md, "## Target Audience");
    let _ = writeln!(md);
    let _ = writeln!(md, "{}", concept.target_audience);
    let _ = writeln!(md);
    let _ = writeln!(md, "## Signature Products");
    for product in &concept.products {
        let _ = writeln!(md);
        let _ = writeln!(md, "### {} ({})", product.name, product.price_point);
        let _ = writeln!(md);
        let _ = writeln!(md, "{}", product.description);
    }
    let _ = writeln!(md);
    let _ = writeln!(md, "## Marketing Copy");
    let _ = writeln!(md);
    let _ = writeln!(md, "> \"{}\"", concept.marketing_copy);
    let _ = writeln!(md);
    let _ = writeln!(md, "## Color Palette");
    let _ = writeln!(md);
    for (slot, color) in concept.palette.slots() {
        let _ = writeln!(md, "- **{slot}**: `{color}`");
    }
    md
}

/// Canonical pretty-printed JSON of the concept, no extra metadata.
pub fn to_json(concept: &BrandConcept) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(concept)?)
}

/// Decode a `data:image/...;base64,` URI into raw bytes.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, ExportError> {
    let payload = uri
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, payload)| payload)
        .ok_or(ExportError::NotADataUri)?;
    Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
}

fn write_file(path: PathBuf, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    fs::write(&path, bytes).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Write the Markdown and JSON renderings, plus the visual when present,
/// into `dir`. Re-running overwrites; each file is independent.
pub fn export_bundle(
    dir: &Path,
    concept: &BrandConcept,
    image_url: Option<&str>,
) -> Result<Vec<PathBuf>, ExportError> {
    let slug = slugify(&concept.name);
    let mut written = Vec::new();

    let md_path = dir.join(format!("{slug}-Identity.md"));
    written.push(write_file(md_path, to_markdown(concept).as_bytes())?);

    let json_path = dir.join(format!("{slug}-Data.json"));
    written.push(write_file(json_path, to_json(concept)?.as_bytes())?);

    if let Some(uri) = image_url {
        let bytes = decode_data_uri(uri)?;
        let png_path = dir.join(format!("{slug}-Visual.png"));
        written.push(write_file(png_path, &bytes)?);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::test_fixtures::sample_concept;

    #[test]
    fn slugs() {
        assert_eq!(slugify("Hearth & Hush"), "hearth-hush");
        assert_eq!(slugify("NOIR."), "noir");
        assert_eq!(slugify("Velvet  Void 9"), "velvet-void-9");
        assert_eq!(slugify("---"), "brand");
        assert_eq!(slugify(""), "brand");
    }

    #[test]
    fn markdown_is_deterministic() {
        let concept = sample_concept();
        assert_eq!(to_markdown(&concept), to_markdown(&concept));
    }

    #[test]
    fn markdown_layout() {
        let md = to_markdown(&sample_concept());
        assert!(md.starts_with("# Hearth & Hush\n"));
        assert!(md.contains("> Quiet is the new loud\n"));
        assert!(md.contains("## The Narrative"));
        assert!(md.contains("## The Vibe"));
        assert!(md.contains("## Target Audience"));
        assert!(md.contains("### The Alcove Pass (Accessible)"));
        assert!(md.contains("## Marketing Copy"));
        // Palette bullets keep the fixed slot order.
        let primary = md.find("- **primary**: `#2E2A27`").unwrap();
        let secondary = md.find("- **secondary**: `#8A7B6C`").unwrap();
        let accent = md.find("- **accent**: `#D9A441`").unwrap();
        let background = md.find("- **background**: `#F4EFE8`").unwrap();
        assert!(primary < secondary && secondary < accent && accent < background);
    }

    #[test]
    fn json_round_trips() {
        let concept = sample_concept();
        let rendered = to_json(&concept).unwrap();
        let parsed: BrandConcept = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, concept);
    }

    #[test]
    fn data_uri_decoding() {
        let uri = "data:image/png;base64,QUJD";
        assert_eq!(decode_data_uri(uri).unwrap(), b"ABC");
        assert!(matches!(
            decode_data_uri("https://example.com/x.png"),
            Err(ExportError::NotADataUri)
        ));
        assert!(matches!(
            decode_data_uri("data:image/png;base64,@@@"),
            Err(ExportError::Base64(_))
        ));
    }

    #[test]
    fn bundle_writes_expected_files() {
        let dir = tempfile::tempdir().unwrap();
        let concept = sample_concept();

        let written = export_bundle(dir.path(), &concept, Some("data:image/png;base64,QUJD")).unwrap();
        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "hearth-hush-Identity.md",
                "hearth-hush-Data.json",
                "hearth-hush-Visual.png",
            ]
        );
        assert_eq!(fs::read(&written[2]).unwrap(), b"ABC");

        // Idempotent: a second run overwrites cleanly.
        let again = export_bundle(dir.path(), &concept, Some("data:image/png;base64,QUJD")).unwrap();
        assert_eq!(again.len(), 3);

        // Without an image only the two text renderings are written.
        let text_only = export_bundle(dir.path(), &concept, None).unwrap();
        assert_eq!(text_only.len(), 2);
    }
}
