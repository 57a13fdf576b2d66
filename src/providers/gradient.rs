use std::time::Duration;
use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Gradient client for the DigitalOcean Gradient AI inference API
///
/// The wire format is OpenAI-style chat completions: a role-tagged message
/// list goes up, a list of choices with message content comes back.
#[derive(Debug)]
pub struct Gradient {
    /// HTTP client for API requests
    client: Client,
    /// Model access key for authentication
    api_key: String,
    /// API endpoint URL
    endpoint: String,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

/// Gradient chat completion request
#[derive(Debug, Clone, Serialize)]
pub struct GradientRequest {
    /// The model to use
    model: String,

    /// The messages for the conversation
    messages: Vec<GradientMessage>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Gradient message format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientMessage {
    /// Role of the message sender (user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct TokenUsage {
    /// Number of prompt tokens
    pub prompt_tokens: u32,
    /// Number of completion tokens
    pub completion_tokens: u32,
    /// Total tokens consumed
    pub total_tokens: u32,
}

/// Gradient chat completion response
#[derive(Debug, Deserialize)]
pub struct GradientResponse {
    /// The completion choices
    pub choices: Vec<GradientChoice>,
    /// Token usage information
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

/// Individual choice in a Gradient response
#[derive(Debug, Deserialize)]
pub struct GradientChoice {
    /// The message for this choice
    pub message: GradientMessage,
}

impl GradientRequest {
    /// Create a new Gradient request
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
        self.messages.push(GradientMessage {
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

    /// Set the maximum number of tokens to generate
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

impl Gradient {
    /// Create a new Gradient client with default retry settings
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::new_with_config(api_key, endpoint, 3, 1000, 30)
    }

    /// Create a new Gradient client with retry and timeout configuration
    pub fn new_with_config(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        max_retries: u32,
        backoff_base_ms: u64,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            max_retries,
            backoff_base_ms,
        }
    }

    /// Complete a chat request with retry logic
    ///
    /// Server errors, rate limiting and network failures are retried with
    /// exponential backoff up to the configured retry count; other client
    /// errors fail immediately.
    pub async fn chat_completion(
        &self,
        request: GradientRequest,
    ) -> Result<GradientResponse, ProviderError> {
        let api_url = format!(
            "{}/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            let response_result = self.client.post(&api_url)
                .header("Content-Type", "application/json")
                .bearer_auth(&self.api_key)
                .json(&request)
                .send()
                .await;

            match response_result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response.json::<GradientResponse>().await.map_err(|e| {
                            ProviderError::ParseError(format!(
                                "Failed to parse Gradient API response: {}",
                                e
                            ))
                        });
                    }

                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Failed to get error response text".to_string());

                    if status.as_u16() == 429 {
                        // Quota exhausted or rate limited - can retry
                        last_error = Some(ProviderError::RateLimitExceeded(error_text.clone()));
                        error!("Gradient API rate limited: {} - attempt {}/{}",
                               error_text, attempt + 1, self.max_retries + 1);
                    } else if status.is_server_error() {
                        // Server error - can retry
                        last_error = Some(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message: error_text.clone(),
                        });
                        error!("Gradient API error ({}): {} - attempt {}/{}",
                               status, error_text, attempt + 1, self.max_retries + 1);
                    } else if status.as_u16() == 401 || status.as_u16() == 403 {
                        error!("Gradient API authentication error ({}): {}", status, error_text);
                        return Err(ProviderError::AuthenticationError(error_text));
                    } else {
                        // Other client error - don't retry
                        error!("Gradient API error ({}): {}", status, error_text);
                        return Err(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message: error_text,
                        });
                    }
                },
                Err(e) => {
                    // Network error - can retry
                    last_error = Some(ProviderError::ConnectionError(format!(
                        "Failed to send request to Gradient API: {}",
                        e
                    )));
                    error!("Gradient API network error: {} - attempt {}/{}",
                           e, attempt + 1, self.max_retries + 1);
                }
            }

            attempt += 1;

            // If we have more retries left, wait with exponential backoff
            if attempt <= self.max_retries {
                let backoff_ms = self.backoff_base_ms * (1u64 << (attempt - 1));
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::RequestFailed(format!(
                "Gradient API request failed after {} attempts",
                self.max_retries + 1
            ))
        }))
    }
}

#[async_trait]
impl Provider for Gradient {
    type Request = GradientRequest;
    type Response = GradientResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        self.chat_completion(request).await
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = GradientRequest::new("llama3.3-70b-instruct")
            .max_tokens(10)
            .add_message("user", "Hello");

        self.chat_completion(request).await?;
        Ok(())
    }

    fn extract_text(response: &Self::Response) -> String {
        response.choices
            .first()
            .map(|choice| choice.message.content.clone())
            .unwrap_or_default()
    }
}
