//! Text-generation port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::generation::{ModelId, Prompt};

/// Text-generation errors
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty response from the model")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for the external text-generation service
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt.
    ///
    /// # Arguments
    /// * `prompt` - The assembled prompt
    /// * `model` - The model to generate with
    ///
    /// # Returns
    /// The generated text, unparsed
    async fn generate(&self, prompt: &Prompt, model: &ModelId) -> Result<String, GenerationError>;

    /// List the ids of every model the service offers.
    async fn list_models(&self) -> Result<Vec<String>, GenerationError>;
}
