//! LlmClient trait definition

use async_trait::async_trait;

use super::{GenerationRequest, GenerationResponse, LlmError};

/// Stateless generation client - each call is independent
///
/// One request in, one complete response out. No streaming and no
/// conversation state between calls.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single structured-output request and wait for the full body
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, LlmError>;

    /// Model identifier used for every request
    fn model(&self) -> &str;
}
