//! Gemini generation client
//!
//! HTTP implementation of [`GenerationClient`] against the Google Generative
//! Language REST API. One request per operation, no retry, no caching. The
//! text call is schema-constrained; the image call is a plain prompt whose
//! response parts are scanned for inline image bytes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::client::GenerationClient;
use crate::concept::BrandConcept;
use crate::config::StudioConfig;
use crate::error::GenerationError;
use crate::prompts;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: String,
    data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl Content {
    fn from_text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: Some(text.to_string()),
                inline_data: None,
            }],
        }
    }
}

/// Production client. Holds the API key and a pooled reqwest client with a
/// per-request timeout from [`StudioConfig`].
pub struct GeminiClient {
    config: StudioConfig,
    api_key: String,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: StudioConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(GenerationError::MissingApiKey)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            api_key: api_key.trim().to_string(),
            http,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            model
        )
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout(self.config.timeout_secs)
                } else {
                    GenerationError::Http(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            return Err(GenerationError::Http(format!(
                "HTTP {status} from {model}: {snippet}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidJson(format!("malformed service response: {e}")))
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate_identity(&self, prompt: &str) -> Result<BrandConcept, GenerationError> {
        let request = GenerateContentRequest {
            system_instruction: Some(Content::from_text(prompts::SYSTEM_INSTRUCTION)),
            contents: vec![Content::from_text(prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: prompts::concept_response_schema(),
            }),
        };

        tracing::debug!(model = %self.config.text_model, "requesting brand concept");
        let response = self
            .generate_content(&self.config.text_model, &request)
            .await?;

        let text = response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.iter().find_map(|p| p.text.as_deref()))
            .ok_or(GenerationError::EmptyResponse)?;

        let concept: BrandConcept = serde_json::from_str(text)
            .map_err(|e| GenerationError::InvalidJson(e.to_string()))?;
        concept.validate()?;
        Ok(concept)
    }

    async fn generate_image(&self, concept: &BrandConcept) -> Result<String, GenerationError> {
        // Image models of this class take a bare prompt; no schema support.
        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::from_text(&prompts::image_prompt(concept))],
            generation_config: None,
        };

        tracing::debug!(model = %self.config.image_model, brand = %concept.name, "requesting brand visual");
        let response = self
            .generate_content(&self.config.image_model, &request)
            .await?;

        let data = response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| {
                content
                    .parts
                    .iter()
                    .find_map(|p| p.inline_data.as_ref().map(|d| d.data.clone()))
            })
            .ok_or(GenerationError::MissingImage)?;

        Ok(format!("data:image/png;base64,{data}"))
    }
}
