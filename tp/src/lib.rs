//! Trip Planner - AI student travel itineraries
//!
//! Collects a destination, a budget tier and a set of interests, asks a
//! generative model for a 5-day plan constrained by a response schema, and
//! renders the result as a day-by-day timeline.
//!
//! # Modules
//!
//! - [`domain`] - Plan request, budget tiers, interests and the itinerary model
//! - [`llm`] - Generation client trait with Gemini and OpenAI implementations
//! - [`prompts`] - Handlebars prompt templates with user overrides
//! - [`planner`] - Builds the request, calls the model, parses the answer
//! - [`render`] - Display model, activity classifier and terminal text output
//! - [`tui`] - Interactive terminal UI
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod llm;
pub mod planner;
pub mod prompts;
pub mod render;
pub mod tui;

// Re-export commonly used types
pub use config::{Config, LlmConfig};
pub use domain::{BudgetTier, FormError, Interest, ItineraryActivity, ItineraryDay, ItineraryPlan, PlanRequest};
pub use llm::{GeminiClient, GenerationRequest, GenerationResponse, LlmClient, LlmError, OpenAIClient, create_client};
pub use planner::{PlanError, Planner};
pub use prompts::{PromptContext, PromptLoader};
pub use render::{ActivityCategory, PlanView, classify, render_text};
