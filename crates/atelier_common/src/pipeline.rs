//! Generation pipeline state machine
//!
//! One run: `Idle -> GeneratingText -> GeneratingImage -> Complete`, with
//! `Error` reachable from either generating phase. Transitions are a pure
//! function of (phase, event); the [`Studio`] controller owns the single
//! mutable copy of the run state and sequences the two client calls.
//!
//! The image call is sequenced after the text call because its prompt is
//! derived from the concept. Only one run is in flight per studio; a submit
//! during a run is a no-op (the UI keeps its submission control disabled for
//! the whole generating span).

use std::fmt;

use crate::client::GenerationClient;
use crate::concept::{BrandConcept, GeneratedAsset};

/// Message shown for any generation failure. The specific cause goes to the
/// log, never to the user.
pub const GENERIC_FAILURE_MESSAGE: &str = "The creative spirits are turbulent. Please try again.";

/// The controller's position in the generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    GeneratingText,
    GeneratingImage,
    Complete,
    Error,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::GeneratingText => write!(f, "generating-text"),
            Phase::GeneratingImage => write!(f, "generating-image"),
            Phase::Complete => write!(f, "complete"),
            Phase::Error => write!(f, "error"),
        }
    }
}

/// Events that drive the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineEvent {
    Submit,
    ConceptReady,
    ConceptFailed,
    ImageReady,
    ImageFailed,
}

impl Phase {
    /// Pure transition function. Pairs outside the transition table are
    /// identity transitions: the phase does not change.
    pub fn step(self, event: PipelineEvent) -> Phase {
        use PipelineEvent::*;
        match (self, event) {
            (Phase::Idle | Phase::Complete | Phase::Error, Submit) => Phase::GeneratingText,
            (Phase::GeneratingText, ConceptReady) => Phase::GeneratingImage,
            (Phase::GeneratingText, ConceptFailed) => Phase::Error,
            (Phase::GeneratingImage, ImageReady) => Phase::Complete,
            (Phase::GeneratingImage, ImageFailed) => Phase::Error,
            (phase, _) => phase,
        }
    }

    /// True while a run is in flight and submission must stay disabled.
    pub fn is_generating(self) -> bool {
        matches!(self, Phase::GeneratingText | Phase::GeneratingImage)
    }
}

/// The application controller: current phase, the run's asset pair, and the
/// user-facing error message if the run failed.
pub struct Studio<C: GenerationClient> {
    client: C,
    phase: Phase,
    asset: GeneratedAsset,
    error: Option<String>,
}

impl<C: GenerationClient> Studio<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            phase: Phase::Idle,
            asset: GeneratedAsset::default(),
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn concept(&self) -> Option<&BrandConcept> {
        self.asset.concept.as_ref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.asset.image_url.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Run one generation pipeline to completion. `on_phase` fires at every
    /// transition so a caller can drive a progress display.
    ///
    /// An empty or whitespace-only prompt is rejected before any transition,
    /// as is a submit while a run is already in flight. Otherwise the prior
    /// concept, image, and error are cleared and the run always ends in
    /// `Complete` or `Error`.
    pub async fn submit<F>(&mut self, prompt: &str, mut on_phase: F) -> Phase
    where
        F: FnMut(Phase),
    {
        if prompt.trim().is_empty() {
            tracing::debug!("ignoring empty prompt");
            return self.phase;
        }
        if self.phase.is_generating() {
            tracing::debug!(phase = %self.phase, "ignoring submit while a run is in flight");
            return self.phase;
        }

        self.asset = GeneratedAsset::default();
        self.error = None;
        self.transition(PipelineEvent::Submit, &mut on_phase);

        let concept = match self.client.generate_identity(prompt).await {
            Ok(concept) => concept,
            Err(e) => {
                tracing::error!("brand generation failed: {e}");
                self.error = Some(GENERIC_FAILURE_MESSAGE.to_string());
                self.transition(PipelineEvent::ConceptFailed, &mut on_phase);
                return self.phase;
            }
        };
        self.asset.concept = Some(concept.clone());
        self.transition(PipelineEvent::ConceptReady, &mut on_phase);

        match self.client.generate_image(&concept).await {
            Ok(image_url) => {
                self.asset.image_url = Some(image_url);
                self.transition(PipelineEvent::ImageReady, &mut on_phase);
            }
            Err(e) => {
                // The concept from the successful first step is retained.
                tracing::error!("image generation failed: {e}");
                self.error = Some(GENERIC_FAILURE_MESSAGE.to_string());
                self.transition(PipelineEvent::ImageFailed, &mut on_phase);
            }
        }
        self.phase
    }

    fn transition<F: FnMut(Phase)>(&mut self, event: PipelineEvent, on_phase: &mut F) {
        let next = self.phase.step(event);
        if next != self.phase {
            tracing::debug!(from = %self.phase, to = %next, "phase transition");
            self.phase = next;
            on_phase(next);
        }
    }
}
