//! Atelier shared library
//!
//! The generation core behind the `atelierctl` CLI: brand concept data model,
//! the Gemini generation client, the pipeline state machine, and the
//! export transforms. No terminal rendering lives here.

pub mod client;
pub mod concept;
pub mod config;
pub mod error;
pub mod export;
pub mod gemini;
pub mod pipeline;
pub mod prompts;

pub use client::GenerationClient;
pub use concept::{BrandConcept, BrandPalette, GeneratedAsset, ProductIdea};
pub use config::StudioConfig;
pub use error::GenerationError;
pub use gemini::GeminiClient;
pub use pipeline::{Phase, PipelineEvent, Studio};
