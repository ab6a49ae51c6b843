//! Fixed prompt material for the two generation calls
//!
//! The system instruction, the structured-output schema the text model must
//! satisfy, and the image prompt template. All deterministic; the only
//! variable content is the user idea and the concept fields interpolated
//! into the image prompt.

use serde_json::{json, Value};

use crate::concept::BrandConcept;

/// Creative-director persona for the text call.
pub const SYSTEM_INSTRUCTION: &str = "\
You are the Creative Director of Velvet & Void, an avant-garde branding agency.
Your goal is to take a simple user idea and transform it into a high-end, luxury, or cutting-edge brand identity.
Be bold, poetic, and precise. Avoid generic corporate jargon. Use evocative language.";

/// Structured-output schema for the brand concept, in the Generative
/// Language API's response-schema dialect. Every field is required; a
/// response missing any of them is a generation failure, not a partial
/// result.
pub fn concept_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING", "description": "A punchy, memorable brand name." },
            "tagline": { "type": "STRING", "description": "A short, impactful slogan." },
            "description": { "type": "STRING", "description": "A 2-sentence elevator pitch." },
            "targetAudience": { "type": "STRING", "description": "Who is this for?" },
            "vibe": { "type": "STRING", "description": "Keywords describing the mood (e.g., Ethereal, Industrial)." },
            "marketingCopy": { "type": "STRING", "description": "A paragraph of high-converting copy." },
            "palette": {
                "type": "OBJECT",
                "properties": {
                    "primary": { "type": "STRING", "description": "Hex code" },
                    "secondary": { "type": "STRING", "description": "Hex code" },
                    "accent": { "type": "STRING", "description": "Hex code" },
                    "background": { "type": "STRING", "description": "Hex code" }
                },
                "required": ["primary", "secondary", "accent", "background"]
            },
            "products": {
                "type": "ARRAY",
                "description": "List of 3 signature products or services this brand offers.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING", "description": "Creative product name" },
                        "description": { "type": "STRING", "description": "Short description" },
                        "pricePoint": { "type": "STRING", "description": "e.g. High-end, Accessible, $$$" }
                    },
                    "required": ["name", "description", "pricePoint"]
                }
            }
        },
        "required": [
            "name", "tagline", "description", "targetAudience",
            "vibe", "palette", "marketingCopy", "products"
        ]
    })
}

/// Image prompt derived from the concept. Interpolates name, vibe, the
/// primary and accent colors, and the description into a fixed editorial
/// template that forbids text in the image.
pub fn image_prompt(concept: &BrandConcept) -> String {
    format!(
        "A cinematic, high-end editorial photograph representing the brand \"{}\".\n\
         Vibe: {}.\n\
         Key Colors: {}, {}.\n\
         Context: {}.\n\
         Style: Photorealistic, 8k resolution, dramatic lighting, award-winning photography.\n\
         Do not include text in the image.",
        concept.name,
        concept.vibe,
        concept.palette.primary,
        concept.palette.accent,
        concept.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::test_fixtures::sample_concept;

    #[test]
    fn schema_requires_every_concept_field() {
        let schema = concept_response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        for field in [
            "name",
            "tagline",
            "description",
            "targetAudience",
            "vibe",
            "palette",
            "marketingCopy",
            "products",
        ] {
            assert!(required.contains(&field), "missing required field {field}");
        }
        let palette_required = schema["properties"]["palette"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(palette_required.len(), 4);
    }

    #[test]
    fn image_prompt_carries_concept_fields() {
        let concept = sample_concept();
        let prompt = image_prompt(&concept);
        assert!(prompt.contains(&concept.name));
        assert!(prompt.contains(&concept.vibe));
        assert!(prompt.contains(&concept.palette.primary));
        assert!(prompt.contains(&concept.palette.accent));
        assert!(prompt.contains(&concept.description));
        assert!(prompt.contains("Do not include text in the image."));
    }
}
