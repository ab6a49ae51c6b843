//! Brand concept data model
//!
//! The structured creative output of one generation run, as returned by the
//! text model under a schema-constrained completion. Field names on the wire
//! are camelCase to match the service schema exactly.
//!
//! Validation happens here, at the deserialization boundary: a structurally
//! incomplete concept is rejected, never patched with defaults.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Four mandatory color slots, each a hex string like `#1A2B3C`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
}

impl BrandPalette {
    /// Slots in the fixed rendering order: primary, secondary, accent, background.
    pub fn slots(&self) -> [(&'static str, &str); 4] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("background", self.background.as_str()),
        ]
    }

    /// Syntax check for `#RGB` or `#RRGGBB`.
    pub fn is_valid_hex(color: &str) -> bool {
        let Some(digits) = color.strip_prefix('#') else {
            return false;
        };
        matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Decompose a hex color into (r, g, b) for terminal swatches.
    /// Returns `None` for malformed input.
    pub fn to_rgb(color: &str) -> Option<(u8, u8, u8)> {
        if !Self::is_valid_hex(color) {
            return None;
        }
        let digits = &color[1..];
        let expand = |c: char| {
            let v = c.to_digit(16).unwrap_or(0) as u8;
            v << 4 | v
        };
        if digits.len() == 3 {
            let mut it = digits.chars();
            let r = expand(it.next()?);
            let g = expand(it.next()?);
            let b = expand(it.next()?);
            Some((r, g, b))
        } else {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((r, g, b))
        }
    }
}

/// One signature product or service the brand would offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIdea {
    pub name: String,
    pub description: String,
    /// Free-form tier label, e.g. "High-end" or "$$$".
    pub price_point: String,
}

/// The full brand identity produced by one text-generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandConcept {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub target_audience: String,
    pub vibe: String,
    pub marketing_copy: String,
    pub palette: BrandPalette,
    pub products: Vec<ProductIdea>,
}

impl BrandConcept {
    /// Boundary validation: every scalar non-empty, all four palette slots
    /// syntactically valid hex, at least one product.
    pub fn validate(&self) -> Result<(), GenerationError> {
        let scalars = [
            ("name", &self.name),
            ("tagline", &self.tagline),
            ("description", &self.description),
            ("targetAudience", &self.target_audience),
            ("vibe", &self.vibe),
            ("marketingCopy", &self.marketing_copy),
        ];
        for (field, value) in scalars {
            if value.trim().is_empty() {
                return Err(GenerationError::InvalidConcept(format!(
                    "field '{field}' is empty"
                )));
            }
        }
        for (slot, color) in self.palette.slots() {
            if !BrandPalette::is_valid_hex(color) {
                return Err(GenerationError::InvalidConcept(format!(
                    "palette slot '{slot}' is not a hex color: {color:?}"
                )));
            }
        }
        if self.products.is_empty() {
            return Err(GenerationError::InvalidConcept(
                "products list is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// The pipeline's output pair for one run. Owned by the [`crate::Studio`]
/// controller and replaced wholesale when a new run starts.
#[derive(Debug, Clone, Default)]
pub struct GeneratedAsset {
    pub concept: Option<BrandConcept>,
    /// `data:image/png;base64,…` URI for the generated visual.
    pub image_url: Option<String>,
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    pub fn sample_concept() -> BrandConcept {
        BrandConcept {
            name: "Hearth & Hush".to_string(),
            tagline: "Quiet is the new loud".to_string(),
            description: "A sanctuary cafe for people who recharge alone. \
                          Every corner is a pocket of calm."
                .to_string(),
            target_audience: "Urban introverts, remote workers, readers".to_string(),
            vibe: "Muted, candlelit, wool and walnut".to_string(),
            marketing_copy: "Step out of the noise and into a room that asks \
                             nothing of you. At Hearth & Hush the coffee is \
                             strong, the lights are low, and nobody expects \
                             small talk."
                .to_string(),
            palette: BrandPalette {
                primary: "#2E2A27".to_string(),
                secondary: "#8A7B6C".to_string(),
                accent: "#D9A441".to_string(),
                background: "#F4EFE8".to_string(),
            },
            products: vec![
                ProductIdea {
                    name: "The Alcove Pass".to_string(),
                    description: "A reserved nook for two hours of silence".to_string(),
                    price_point: "Accessible".to_string(),
                },
                ProductIdea {
                    name: "Hush Blend".to_string(),
                    description: "House-roasted low-acid espresso".to_string(),
                    price_point: "$$".to_string(),
                },
                ProductIdea {
                    name: "Night Chapter".to_string(),
                    description: "After-hours reading club, capped at eight seats".to_string(),
                    price_point: "High-end".to_string(),
                },
            ],
        }
    }
}
