//! Generation client abstraction
//!
//! A trait seam over the two external AI calls so the pipeline can run
//! against the real HTTP client in production and a deterministic fake in
//! tests. No system access is required to test the pipeline.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::concept::BrandConcept;
use crate::error::GenerationError;

/// The two calls one generation run makes, in order. Image generation is
/// sequenced after text generation because its prompt is derived from the
/// concept (name, vibe, colors).
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Schema-constrained text completion: user idea in, validated concept out.
    async fn generate_identity(&self, prompt: &str) -> Result<BrandConcept, GenerationError>;

    /// Image completion for a previously produced concept. Returns a
    /// `data:image/png;base64,…` URI.
    async fn generate_image(&self, concept: &BrandConcept) -> Result<String, GenerationError>;
}

// Lets callers share one client between the studio and an inspection handle.
#[async_trait]
impl<C: GenerationClient + ?Sized> GenerationClient for Arc<C> {
    async fn generate_identity(&self, prompt: &str) -> Result<BrandConcept, GenerationError> {
        (**self).generate_identity(prompt).await
    }

    async fn generate_image(&self, concept: &BrandConcept) -> Result<String, GenerationError> {
        (**self).generate_image(concept).await
    }
}

/// Scripted client for tests: queued responses, call counts, captured prompts.
pub struct FakeGenerationClient {
    identity_results: Mutex<Vec<Result<BrandConcept, GenerationError>>>,
    image_results: Mutex<Vec<Result<String, GenerationError>>>,
    identity_prompts: Mutex<Vec<String>>,
    image_concepts: Mutex<Vec<BrandConcept>>,
}

impl FakeGenerationClient {
    pub fn new(
        identity_results: Vec<Result<BrandConcept, GenerationError>>,
        image_results: Vec<Result<String, GenerationError>>,
    ) -> Self {
        Self {
            identity_results: Mutex::new(identity_results),
            image_results: Mutex::new(image_results),
            identity_prompts: Mutex::new(Vec::new()),
            image_concepts: Mutex::new(Vec::new()),
        }
    }

    /// Both calls succeed with the given results.
    pub fn happy(concept: BrandConcept, image_url: &str) -> Self {
        Self::new(vec![Ok(concept)], vec![Ok(image_url.to_string())])
    }

    /// Text call fails; image call is never expected to run.
    pub fn text_fails(error: GenerationError) -> Self {
        Self::new(vec![Err(error)], Vec::new())
    }

    /// Text call succeeds, image call fails.
    pub fn image_fails(concept: BrandConcept, error: GenerationError) -> Self {
        Self::new(vec![Ok(concept)], vec![Err(error)])
    }

    pub fn identity_calls(&self) -> usize {
        self.identity_prompts.lock().unwrap().len()
    }

    pub fn image_calls(&self) -> usize {
        self.image_concepts.lock().unwrap().len()
    }

    /// Prompts passed to `generate_identity`, in call order.
    pub fn identity_prompts(&self) -> Vec<String> {
        self.identity_prompts.lock().unwrap().clone()
    }

    /// Concepts passed to `generate_image`, in call order.
    pub fn image_concepts(&self) -> Vec<BrandConcept> {
        self.image_concepts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationClient for FakeGenerationClient {
    async fn generate_identity(&self, prompt: &str) -> Result<BrandConcept, GenerationError> {
        self.identity_prompts.lock().unwrap().push(prompt.to_string());
        let mut queue = self.identity_results.lock().unwrap();
        if queue.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        queue.remove(0)
    }

    async fn generate_image(&self, concept: &BrandConcept) -> Result<String, GenerationError> {
        self.image_concepts.lock().unwrap().push(concept.clone());
        let mut queue = self.image_results.lock().unwrap();
        if queue.is_empty() {
            return Err(GenerationError::MissingImage);
        }
        queue.remove(0)
    }
}
