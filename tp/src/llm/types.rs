//! Generation request/response types
//!
//! Provider-agnostic: each client translates these into its own wire format.

use tracing::debug;

use super::SchemaNode;

/// A single structured-output generation request
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Natural-language instruction (rendered from the prompt template)
    pub prompt: String,

    /// Shape the response body must follow
    pub response_schema: SchemaNode,

    /// Name the schema is registered under (OpenAI requires one)
    pub schema_name: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Max tokens for the response
    pub max_output_tokens: u32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, schema_name: impl Into<String>, response_schema: SchemaNode) -> Self {
        let prompt = prompt.into();
        debug!(prompt_len = prompt.len(), "GenerationRequest::new: called");
        Self {
            prompt,
            response_schema,
            schema_name: schema_name.into(),
            temperature: 1.0,
            max_output_tokens: 8192,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

/// Response from a generation request
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    /// Complete response body (expected to be JSON text)
    pub text: String,

    /// Why the model stopped
    pub finish_reason: FinishReason,

    /// Token usage
    pub usage: TokenUsage,
}

/// Why the model stopped generating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Other(String),
}

impl FinishReason {
    /// Parse from Gemini's `finishReason`
    pub fn from_gemini(s: &str) -> Self {
        match s {
            "STOP" => Self::Stop,
            "MAX_TOKENS" => Self::MaxTokens,
            "SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT" => Self::Safety,
            other => Self::Other(other.to_string()),
        }
    }

    /// Parse from OpenAI's `finish_reason`
    pub fn from_openai(s: &str) -> Self {
        match s {
            "stop" => Self::Stop,
            "length" => Self::MaxTokens,
            "content_filter" => Self::Safety,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Token usage for logging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = GenerationRequest::new("Plan a trip", "itinerary", SchemaNode::string("x"))
            .with_temperature(0.8)
            .with_max_output_tokens(2048);
        assert_eq!(req.prompt, "Plan a trip");
        assert_eq!(req.schema_name, "itinerary");
        assert!((req.temperature - 0.8).abs() < f32::EPSILON);
        assert_eq!(req.max_output_tokens, 2048);
    }

    #[test]
    fn test_finish_reason_from_gemini() {
        assert_eq!(FinishReason::from_gemini("STOP"), FinishReason::Stop);
        assert_eq!(FinishReason::from_gemini("MAX_TOKENS"), FinishReason::MaxTokens);
        assert_eq!(FinishReason::from_gemini("SAFETY"), FinishReason::Safety);
        assert_eq!(
            FinishReason::from_gemini("LANGUAGE"),
            FinishReason::Other("LANGUAGE".to_string())
        );
    }

    #[test]
    fn test_finish_reason_from_openai() {
        assert_eq!(FinishReason::from_openai("stop"), FinishReason::Stop);
        assert_eq!(FinishReason::from_openai("length"), FinishReason::MaxTokens);
        assert_eq!(FinishReason::from_openai("content_filter"), FinishReason::Safety);
    }
}
