use std::time::Duration;
use serde::{Serialize, Deserialize};
use async_trait::async_trait;
use reqwest::Client;
use log::error;

use crate::errors::ProviderError;
use crate::providers::Provider;

/// OpenAI client for interacting with OpenAI-compatible chat-completion APIs.
///
/// The endpoint is configurable so the same client talks to the public
/// OpenAI API, gateway services, or local OpenAI-compatible servers.
#[derive(Debug)]
pub struct OpenAI {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint base URL (including the /v1 path segment)
    endpoint: String,
    /// Maximum number of retry attempts for retryable failures
    max_retries: u32,
    /// Base backoff time in milliseconds, doubled on each retry
    backoff_base_ms: u64,
}

/// Chat message format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// Chat completion request
#[derive(Debug, Serialize)]
pub struct OpenAIRequest {
    /// The model to use
    model: String,

    /// The messages for the conversation
    messages: Vec<OpenAIMessage>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct OpenAIUsage {
    /// Number of prompt tokens
    pub prompt_tokens: u32,
    /// Number of completion tokens
    pub completion_tokens: u32,
    /// Total tokens for the request
    pub total_tokens: u32,
}

/// A single completion choice
#[derive(Debug, Deserialize)]
pub struct OpenAIChoice {
    /// The generated message
    pub message: OpenAIMessage,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
pub struct OpenAIResponse {
    /// The completion choices
    pub choices: Vec<OpenAIChoice>,
    /// Token usage information, when the service reports it
    pub usage: Option<OpenAIUsage>,
}

impl OpenAIRequest {
    /// Create a new chat completion request
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(OpenAIMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of output tokens
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Number of messages currently attached
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

impl OpenAI {
    /// Create a new OpenAI client with default retry settings
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::new_with_config(api_key, endpoint, 60, 3, 1000)
    }

    /// Create a new OpenAI client with full configuration
    pub fn new_with_config(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .pool_idle_timeout(Duration::from_secs(90))
                .tcp_keepalive(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            max_retries,
            backoff_base_ms,
        }
    }

    /// Full URL of the chat-completions resource
    fn completions_url(&self) -> String {
        let base = if self.endpoint.is_empty() {
            "https://api.openai.com/v1"
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!("{}/chat/completions", base)
    }

    /// Send a chat completion request with retry on transient failures.
    ///
    /// Server errors and rate-limit responses are retried with exponential
    /// backoff; other client errors fail immediately.
    pub async fn complete_request(&self, request: &OpenAIRequest) -> Result<OpenAIResponse, ProviderError> {
        let url = self.completions_url();
        let mut last_error: Option<ProviderError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let backoff_ms = self.backoff_base_ms * (1u64 << (attempt - 1));
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }

            let response_result = self.client.post(&url)
                .header("Content-Type", "application/json")
                .bearer_auth(&self.api_key)
                .json(request)
                .send()
                .await;

            let response = match response_result {
                Ok(response) => response,
                Err(e) => {
                    // Network-level failure, worth retrying
                    last_error = Some(ProviderError::ConnectionError(e.to_string()));
                    continue;
                }
            };

            let status = response.status();
            if status.is_success() {
                return response.json::<OpenAIResponse>().await
                    .map_err(|e| ProviderError::ParseError(e.to_string()));
            }

            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("OpenAI-compatible API error ({}): {} - attempt {}/{}",
                   status, error_text, attempt + 1, self.max_retries + 1);

            match status.as_u16() {
                401 | 403 => {
                    return Err(ProviderError::AuthenticationError(error_text));
                }
                429 => {
                    last_error = Some(ProviderError::RateLimitExceeded(error_text));
                }
                s if status.is_server_error() => {
                    last_error = Some(ProviderError::ApiError {
                        status_code: s,
                        message: error_text,
                    });
                }
                s => {
                    // Remaining client errors will not improve on retry
                    return Err(ProviderError::ApiError {
                        status_code: s,
                        message: error_text,
                    });
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::RequestFailed("Request failed with no recorded error".to_string())
        }))
    }

    /// Extract text from an OpenAI response
    pub fn extract_text_from_response(response: &OpenAIResponse) -> String {
        response.choices.first()
            .map(|choice| choice.message.content.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Provider for OpenAI {
    type Request = OpenAIRequest;
    type Response = OpenAIResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        self.complete_request(&request).await
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        // Model listing is the cheapest authenticated probe the API offers
        let base = if self.endpoint.is_empty() {
            "https://api.openai.com/v1".to_string()
        } else {
            self.endpoint.trim_end_matches('/').to_string()
        };

        let response = self.client.get(format!("{}/models", base))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            Err(ProviderError::AuthenticationError(format!("status {}", status)))
        } else {
            Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: "connection test failed".to_string(),
            })
        }
    }

    fn extract_text(response: &Self::Response) -> String {
        Self::extract_text_from_response(response)
    }
}
