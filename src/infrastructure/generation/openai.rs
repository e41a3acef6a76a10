//! OpenAI-compatible chat completions adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationError, TextGenerator};
use crate::domain::config::DEFAULT_BASE_URL;
use crate::domain::generation::{ModelId, Prompt, SYSTEM_MESSAGE};

// Request types for the chat completions API

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

// Response types for the chat completions and models APIs

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Option<Vec<Choice>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Text generator backed by an OpenAI-compatible HTTP API
pub struct OpenAiGenerator {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiGenerator {
    /// Create a generator for the public OpenAI API
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a generator for a custom OpenAI-compatible endpoint
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build an endpoint URL
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Build the request body
    fn build_request<'a>(prompt: &'a Prompt, model: &'a ModelId) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: model.as_str(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE,
                },
                ChatMessage {
                    role: "user",
                    content: prompt.content(),
                },
            ],
        }
    }

    /// Extract text from response
    fn extract_text(response: &ChatCompletionResponse) -> Option<&str> {
        response
            .choices
            .as_ref()?
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
    }

    /// Pull a readable message out of an error body
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => envelope.error.message,
            Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }

    /// Map non-success HTTP statuses to generation errors
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GenerationError> {
        let status = response.status();
        log::debug!("API responded with HTTP {}", status);

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(GenerationError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerationError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::ApiError(format!(
                "HTTP {}: {}",
                status,
                Self::error_message(&body)
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &Prompt, model: &ModelId) -> Result<String, GenerationError> {
        let url = self.endpoint("chat/completions");
        let body = Self::build_request(prompt, model);
        log::debug!("POST {} (model {})", url, model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        let response: ChatCompletionResponse = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| GenerationError::ParseError(e.to_string()))?;

        // Check for API error in response body
        if let Some(error) = response.error {
            return Err(GenerationError::ApiError(error.message));
        }

        let text = Self::extract_text(&response)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        Ok(text.to_string())
    }

    async fn list_models(&self) -> Result<Vec<String>, GenerationError> {
        let url = self.endpoint("models");
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        let models: ModelList = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| GenerationError::ParseError(e.to_string()))?;

        Ok(models.data.into_iter().map(|m| m.id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transcript::Transcript;

    fn prompt(text: &str) -> Prompt {
        Prompt::build(&Transcript::new(text).unwrap())
    }

    #[test]
    fn build_request_has_system_and_user_messages() {
        let prompt = prompt("Hello world");
        let model = ModelId::default();

        let request = OpenAiGenerator::build_request(&prompt, &model);

        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[0].content, SYSTEM_MESSAGE);
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[1].content, prompt.content());
    }

    #[test]
    fn request_serializes_to_chat_shape() {
        let prompt = prompt("Hi");
        let model = ModelId::new("gpt-4o").unwrap();
        let json = serde_json::to_value(OpenAiGenerator::build_request(&prompt, &model)).unwrap();

        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][1]["role"], "user");
        assert!(json["messages"][1]["content"].as_str().unwrap().contains("Hi"));
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let generator = OpenAiGenerator::with_base_url("key", "http://localhost:9000/v1/");
        assert_eq!(
            generator.endpoint("chat/completions"),
            "http://localhost:9000/v1/chat/completions"
        );
    }

    #[test]
    fn default_endpoint_is_openai() {
        let generator = OpenAiGenerator::new("key");
        assert_eq!(generator.endpoint("models"), "https://api.openai.com/v1/models");
    }

    #[test]
    fn extract_text_from_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Hello"}},{"message":{"content":"Other"}}]}"#,
        )
        .unwrap();

        assert_eq!(OpenAiGenerator::extract_text(&response), Some("Hello"));
    }

    #[test]
    fn extract_text_empty_response() {
        let response = ChatCompletionResponse {
            choices: Some(vec![]),
            error: None,
        };
        assert!(OpenAiGenerator::extract_text(&response).is_none());

        let response = ChatCompletionResponse {
            choices: None,
            error: None,
        };
        assert!(OpenAiGenerator::extract_text(&response).is_none());
    }

    #[test]
    fn error_message_prefers_json_message() {
        let body = r#"{"error":{"message":"The model `gpt-x` does not exist","type":"invalid_request_error"}}"#;
        assert_eq!(
            OpenAiGenerator::error_message(body),
            "The model `gpt-x` does not exist"
        );
    }

    #[test]
    fn error_message_falls_back_to_body() {
        assert_eq!(OpenAiGenerator::error_message("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(OpenAiGenerator::error_message(""), "Unknown error");
    }
}
