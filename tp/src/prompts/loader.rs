//! Prompt Loader
//!
//! Loads prompt templates from files or falls back to embedded defaults.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::{debug, info};

use super::embedded;
use crate::domain::{PlanRequest, TRIP_DAYS};

/// Context for rendering the itinerary prompt
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext {
    pub destination: String,
    pub budget: String,
    /// Comma-joined interest labels
    pub interests: String,
    pub days: u32,
}

impl PromptContext {
    pub fn from_request(request: &PlanRequest) -> Self {
        Self {
            destination: request.destination().to_string(),
            budget: request.budget().label().to_string(),
            interests: request.interests_label(),
            days: TRIP_DAYS,
        }
    }
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// User override directory (e.g., `.tripplanner/prompts/`)
    user_dir: Option<PathBuf>,
    /// Repo default directory (e.g., `prompts/`)
    repo_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a new prompt loader rooted at the given directory
    ///
    /// # Arguments
    /// * `root` - Directory containing `.tripplanner/prompts/` and/or `prompts/`
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let user_dir = root.join(".tripplanner/prompts");
        let repo_dir = root.join("prompts");

        Self {
            hbs: Self::engine(),
            user_dir: if user_dir.exists() { Some(user_dir) } else { None },
            repo_dir: if repo_dir.exists() { Some(repo_dir) } else { None },
        }
    }

    /// Create a loader that only uses embedded prompts (for testing)
    pub fn embedded_only() -> Self {
        Self {
            hbs: Self::engine(),
            user_dir: None,
            repo_dir: None,
        }
    }

    /// User text goes into the prompt verbatim, so HTML escaping is off
    fn engine() -> Handlebars<'static> {
        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(handlebars::no_escape);
        hbs.set_strict_mode(true);
        hbs
    }

    /// Load a template by name
    ///
    /// Checks in order:
    /// 1. User override: `.tripplanner/prompts/{name}.pmt`
    /// 2. Repo default: `prompts/{name}.pmt`
    /// 3. Embedded fallback
    fn load_template(&self, name: &str) -> Result<String> {
        // Try user override first
        if let Some(ref user_dir) = self.user_dir {
            let path = user_dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!("Loading prompt from user override: {:?}", path);
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read user prompt {}: {}", path.display(), e));
            }
        }

        // Try repo default
        if let Some(ref repo_dir) = self.repo_dir {
            let path = repo_dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!("Loading prompt from repo: {:?}", path);
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read repo prompt {}: {}", path.display(), e));
            }
        }

        // Fall back to embedded
        if let Some(content) = embedded::get_embedded(name) {
            debug!("Using embedded prompt: {}", name);
            return Ok(content.to_string());
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &PromptContext) -> Result<String> {
        let template = self.load_template(template_name)?;
        info!(
            "Rendering template '{}' for {} ({} days)",
            template_name, context.destination, context.days
        );

        self.hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }

    /// Render the itinerary prompt for a request
    pub fn itinerary_prompt(&self, request: &PlanRequest) -> Result<String> {
        self.render("itinerary", &PromptContext::from_request(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BudgetTier, Interest};

    fn tokyo() -> PlanRequest {
        PlanRequest::new("Tokyo, Japan", BudgetTier::Moderate, [Interest::Food, Interest::Culture]).unwrap()
    }

    #[test]
    fn test_prompt_contains_inputs_verbatim() {
        let loader = PromptLoader::embedded_only();
        let prompt = loader.itinerary_prompt(&tokyo()).unwrap();

        assert!(prompt.contains("Destination: Tokyo, Japan"));
        assert!(prompt.contains("Budget Level: Moderate"));
        assert!(prompt.contains("Interests: food, culture"));
        assert!(prompt.contains("5-day trip"));
    }

    #[test]
    fn test_no_html_escaping() {
        let loader = PromptLoader::embedded_only();
        let request = PlanRequest::new(
            "Trinidad & Tobago <\"Port of Spain\">",
            BudgetTier::Shoestring,
            [Interest::Music],
        )
        .unwrap();
        let prompt = loader.itinerary_prompt(&request).unwrap();
        assert!(prompt.contains("Trinidad & Tobago <\"Port of Spain\">"));
    }

    #[test]
    fn test_prompt_context_from_request() {
        let ctx = PromptContext::from_request(&tokyo());
        assert_eq!(ctx.budget, "Moderate");
        assert_eq!(ctx.interests, "food, culture");
        assert_eq!(ctx.days, TRIP_DAYS);
    }

    #[test]
    fn test_user_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let prompts = dir.path().join(".tripplanner/prompts");
        std::fs::create_dir_all(&prompts).unwrap();
        std::fs::write(prompts.join("itinerary.pmt"), "Go to {{destination}} on a {{budget}} budget").unwrap();

        let loader = PromptLoader::new(dir.path());
        let prompt = loader.itinerary_prompt(&tokyo()).unwrap();
        assert_eq!(prompt, "Go to Tokyo, Japan on a Moderate budget");
    }

    #[test]
    fn test_repo_dir_used_when_no_override() {
        let dir = tempfile::tempdir().unwrap();
        let prompts = dir.path().join("prompts");
        std::fs::create_dir_all(&prompts).unwrap();
        std::fs::write(prompts.join("itinerary.pmt"), "{{interests}}").unwrap();

        let loader = PromptLoader::new(dir.path());
        assert_eq!(loader.itinerary_prompt(&tokyo()).unwrap(), "food, culture");
    }

    #[test]
    fn test_unknown_variable_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let prompts = dir.path().join("prompts");
        std::fs::create_dir_all(&prompts).unwrap();
        std::fs::write(prompts.join("itinerary.pmt"), "{{hotel}}").unwrap();

        let loader = PromptLoader::new(dir.path());
        assert!(loader.itinerary_prompt(&tokyo()).is_err());
    }

    #[test]
    fn test_prompt_loader_unknown_template() {
        let loader = PromptLoader::embedded_only();
        let result = loader.load_template("nonexistent-template");
        assert!(result.is_err());
    }
}
