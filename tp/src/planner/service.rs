//! Plan requester: validated request in, itinerary out
//!
//! Exactly one generation call per `generate`. Every failure is collapsed
//! into `PlanError::GenerationFailed`; the underlying cause is kept as the
//! error source and logged, never shown to the user.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info};

use super::schema::{SCHEMA_NAME, itinerary_schema};
use crate::config::LlmConfig;
use crate::domain::{ItineraryError, ItineraryPlan, PlanRequest};
use crate::llm::{GenerationRequest, LlmClient, LlmError};
use crate::prompts::PromptLoader;

/// User-facing failure of a planning request
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Failed to generate itinerary. The AI model may be temporarily unavailable. Please try again later.")]
    GenerationFailed(#[source] GenerationFailure),
}

/// What actually went wrong; logged, not displayed
#[derive(Debug, Error)]
pub enum GenerationFailure {
    #[error("prompt rendering failed: {0}")]
    Prompt(String),

    #[error("generation service failed: {0}")]
    Service(#[from] LlmError),

    #[error("unusable response: {0}")]
    Response(#[from] ItineraryError),

    #[error("request task ended without a result")]
    Interrupted,
}

impl GenerationFailure {
    /// HTTP status when the service rejected the call
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the service answered with something unusable
    pub fn is_bad_response(&self) -> bool {
        match self {
            Self::Service(e) => e.is_bad_response(),
            Self::Response(_) => true,
            _ => false,
        }
    }
}

impl From<GenerationFailure> for PlanError {
    fn from(cause: GenerationFailure) -> Self {
        PlanError::GenerationFailed(cause)
    }
}

/// Sends itinerary requests through an `LlmClient`
pub struct Planner {
    llm: Arc<dyn LlmClient>,
    prompts: PromptLoader,
    temperature: f32,
    max_output_tokens: u32,
}

impl Planner {
    pub fn new(llm: Arc<dyn LlmClient>, prompts: PromptLoader, config: &LlmConfig) -> Self {
        debug!(model = %llm.model(), temperature = config.temperature, "Planner::new: called");
        Self {
            llm,
            prompts,
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }

    /// Model identifier of the underlying client
    pub fn model(&self) -> &str {
        self.llm.model()
    }

    /// Build the single generation request for a plan request
    pub fn build_request(&self, request: &PlanRequest) -> Result<GenerationRequest, GenerationFailure> {
        debug!(destination = %request.destination(), "Planner::build_request: called");
        let prompt = self
            .prompts
            .itinerary_prompt(request)
            .map_err(|e| GenerationFailure::Prompt(e.to_string()))?;

        Ok(GenerationRequest::new(prompt, SCHEMA_NAME, itinerary_schema())
            .with_temperature(self.temperature)
            .with_max_output_tokens(self.max_output_tokens))
    }

    /// Generate an itinerary; no retry, no partial result
    pub async fn generate(&self, request: &PlanRequest) -> Result<ItineraryPlan, PlanError> {
        info!(
            destination = %request.destination(),
            budget = %request.budget(),
            interests = %request.interests_label(),
            "Planner::generate: requesting itinerary"
        );

        match self.try_generate(request).await {
            Ok(plan) => {
                info!(
                    days = plan.itinerary.len(),
                    activities = plan.activity_count(),
                    "Planner::generate: itinerary ready"
                );
                Ok(plan)
            }
            Err(cause) => {
                error!(
                    error = %cause,
                    status = ?cause.status(),
                    bad_response = cause.is_bad_response(),
                    "Error generating itinerary"
                );
                Err(PlanError::from(cause))
            }
        }
    }

    async fn try_generate(&self, request: &PlanRequest) -> Result<ItineraryPlan, GenerationFailure> {
        let generation = self.build_request(request)?;
        let response = self.llm.generate(generation).await?;
        debug!(text_len = response.text.len(), "Planner::try_generate: response received");
        Ok(ItineraryPlan::from_response_text(&response.text)?)
    }
}
