//! End-to-end pipeline tests against the scripted fake client.
//!
//! Covers the full transition surface of one generation run: happy path,
//! failure at each of the two service calls, prompt validation, and the
//! reset semantics of a resubmission.

use atelier_common::client::FakeGenerationClient;
use atelier_common::pipeline::GENERIC_FAILURE_MESSAGE;
use atelier_common::{
    BrandConcept, BrandPalette, GenerationError, Phase, ProductIdea, Studio,
};
use std::sync::Arc;

fn coffee_concept() -> BrandConcept {
    BrandConcept {
        name: "Hearth & Hush".to_string(),
        tagline: "Quiet is the new loud".to_string(),
        description: "A sanctuary cafe for people who recharge alone.".to_string(),
        target_audience: "Urban introverts".to_string(),
        vibe: "Muted, candlelit, wool and walnut".to_string(),
        marketing_copy: "Step out of the noise and into a room that asks nothing of you."
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
                description: "After-hours reading club".to_string(),
                price_point: "High-end".to_string(),
            },
        ],
    }
}

const IMAGE_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

#[tokio::test]
async fn happy_path_reaches_complete() {
    let client = FakeGenerationClient::happy(coffee_concept(), IMAGE_URI);
    let mut studio = Studio::new(client);
    assert_eq!(studio.phase(), Phase::Idle);

    let mut seen = Vec::new();
    let phase = studio
        .submit("a coffee shop for introverts", |p| seen.push(p))
        .await;

    assert_eq!(phase, Phase::Complete);
    assert_eq!(
        seen,
        vec![Phase::GeneratingText, Phase::GeneratingImage, Phase::Complete]
    );
    let concept = studio.concept().expect("concept stored");
    assert_eq!(concept.products.len(), 3);
    for (_, color) in concept.palette.slots() {
        assert!(BrandPalette::is_valid_hex(color));
    }
    assert_eq!(studio.image_url(), Some(IMAGE_URI));
    assert!(studio.error().is_none());
}

#[tokio::test]
async fn empty_prompt_is_rejected_before_any_transition() {
    let client = FakeGenerationClient::happy(coffee_concept(), IMAGE_URI);
    let mut studio = Studio::new(client);

    for prompt in ["", "   ", "\n\t"] {
        let mut seen = Vec::new();
        let phase = studio.submit(prompt, |p| seen.push(p)).await;
        assert_eq!(phase, Phase::Idle);
        assert!(seen.is_empty());
    }
}

#[tokio::test]
async fn text_failure_moves_to_error_with_no_concept() {
    let client = FakeGenerationClient::text_fails(GenerationError::EmptyResponse);
    let mut studio = Studio::new(client);

    let phase = studio.submit("a coffee shop for introverts", |_| {}).await;

    assert_eq!(phase, Phase::Error);
    assert!(studio.concept().is_none());
    assert!(studio.image_url().is_none());
    assert_eq!(studio.error(), Some(GENERIC_FAILURE_MESSAGE));
}

#[tokio::test]
async fn schema_violating_text_response_is_a_generation_failure() {
    // The service returning `{}` surfaces as an InvalidJson/InvalidConcept
    // failure from the client; the controller treats it like any other.
    let client = FakeGenerationClient::text_fails(GenerationError::InvalidJson(
        "missing field `name`".to_string(),
    ));
    let mut studio = Studio::new(client);

    assert_eq!(studio.submit("anything", |_| {}).await, Phase::Error);
    assert!(studio.concept().is_none());
}

#[tokio::test]
async fn image_failure_retains_the_concept() {
    let client = FakeGenerationClient::image_fails(coffee_concept(), GenerationError::MissingImage);
    let mut studio = Studio::new(client);

    let phase = studio.submit("a coffee shop for introverts", |_| {}).await;

    assert_eq!(phase, Phase::Error);
    let concept = studio.concept().expect("concept from the first step retained");
    assert_eq!(concept.name, "Hearth & Hush");
    assert!(studio.image_url().is_none());
    assert_eq!(studio.error(), Some(GENERIC_FAILURE_MESSAGE));
}

#[tokio::test]
async fn image_call_receives_the_generated_concept() {
    let client = Arc::new(FakeGenerationClient::happy(coffee_concept(), IMAGE_URI));
    let mut studio = Studio::new(client.clone());
    studio.submit("a coffee shop for introverts", |_| {}).await;

    assert_eq!(client.identity_calls(), 1);
    assert_eq!(
        client.identity_prompts(),
        vec!["a coffee shop for introverts".to_string()]
    );

    // The image step is handed the concept from the text step, and the real
    // client derives its prompt from exactly these fields.
    let handed = &client.image_concepts()[0];
    assert_eq!(*handed, coffee_concept());
    let prompt = atelier_common::prompts::image_prompt(handed);
    assert!(prompt.contains(&handed.name));
    assert!(prompt.contains(&handed.vibe));
    assert!(prompt.contains(&handed.palette.primary));
    assert!(prompt.contains(&handed.palette.accent));
    assert!(prompt.contains(&handed.description));
}

#[tokio::test]
async fn resubmission_clears_prior_run_state() {
    let client = FakeGenerationClient::new(
        vec![
            Err(GenerationError::Http("503 from service".to_string())),
            Ok(coffee_concept()),
        ],
        vec![Ok(IMAGE_URI.to_string())],
    );
    let mut studio = Studio::new(client);

    assert_eq!(studio.submit("first try", |_| {}).await, Phase::Error);
    assert!(studio.error().is_some());

    // A new submission from Error resets fully and can complete.
    assert_eq!(studio.submit("second try", |_| {}).await, Phase::Complete);
    assert!(studio.error().is_none());
    assert!(studio.concept().is_some());
    assert!(studio.image_url().is_some());

    // And from Complete, a third run clears the finished asset first.
    let phase = studio.submit("third try", |_| {}).await;
    assert_eq!(phase, Phase::Error); // identity queue is exhausted
    assert!(studio.concept().is_none());
    assert!(studio.image_url().is_none());
}
