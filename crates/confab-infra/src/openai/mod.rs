//! OpenAiClient — concrete [`CompletionClient`] for OpenAI-compatible
//! chat completion APIs.
//!
//! Sends non-streaming requests to `/v1/chat/completions` with bearer
//! authentication. The API key is wrapped in [`secrecy::SecretString`]
//! and is never logged or included in `Debug` output.

mod types;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use confab_core::client::CompletionClient;
use confab_types::completion::{CompletionRequest, CompletionResponse, Usage};
use confab_types::error::CompletionError;

use self::types::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Default request timeout. Long generations can take a while; there is
/// no cancellation contract beyond this.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// OpenAI-compatible completion client.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

// OpenAiClient intentionally does NOT derive Debug so the credential
// never reaches log output.

impl OpenAiClient {
    /// Create a client with the default API endpoint and timeout.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com".to_string(),
        }
    }

    /// Override the base URL (tests, proxies, compatible providers).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");
        self
    }

    fn to_wire_request(request: &CompletionRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: request.model.clone(),
            messages: request
                .messages
                .iter()
                .map(|turn| ChatMessage {
                    role: turn.role.to_string(),
                    content: turn.content.clone(),
                })
                .collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

impl CompletionClient for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let body = Self::to_wire_request(request);
        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => CompletionError::AuthenticationFailed,
                429 => CompletionError::RateLimited,
                code => {
                    // Prefer the provider's message field when the body parses.
                    let message = serde_json::from_str::<ApiErrorBody>(&error_body)
                        .map(|b| b.error.message)
                        .unwrap_or(error_body);
                    CompletionError::Api {
                        status: code,
                        message,
                    }
                }
            });
        }

        let wire: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Deserialization(e.to_string()))?;

        let choice = wire
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::Deserialization("response has no choices".to_string()))?;

        Ok(CompletionResponse {
            content: choice.message.content,
            model: wire.model,
            usage: Usage {
                input_tokens: wire.usage.prompt_tokens,
                output_tokens: wire.usage.completion_tokens,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confab_types::completion::Turn;

    fn make_client() -> OpenAiClient {
        OpenAiClient::new(SecretString::from("sk-test-not-real"))
    }

    #[test]
    fn test_client_name() {
        assert_eq!(make_client().name(), "openai");
    }

    #[test]
    fn test_base_url_override() {
        let client = make_client().with_base_url("http://localhost:8080".to_string());
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_wire_request_mapping() {
        let request = CompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![Turn::system("Be brief."), Turn::user("hi")],
            temperature: Some(0.7),
            max_tokens: 2000,
        };
        let wire = OpenAiClient::to_wire_request(&request);
        assert_eq!(wire.model, "gpt-3.5-turbo");
        assert_eq!(wire.messages.len(), 2);
        assert_eq!(wire.messages[0].role, "system");
        assert_eq!(wire.messages[1].role, "user");
        assert_eq!(wire.max_tokens, 2000);
    }
}
