//! Generation failure taxonomy
//!
//! Every way the two service calls can fail. No retry anywhere: each variant
//! propagates unchanged to the pipeline controller, which maps all of them to
//! one generic user-facing message and logs the specific cause.

/// Errors from the generation client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    #[error("no API key configured (set GEMINI_API_KEY or api_key in config.toml)")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    #[error("service returned no text")]
    EmptyResponse,

    #[error("model output is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("incomplete brand concept: {0}")]
    InvalidConcept(String),

    #[error("no inline image data in any response part")]
    MissingImage,
}
