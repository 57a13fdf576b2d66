/*!
 * Mock provider implementation for testing
 *
 * Provides a scripted in-process provider so tests never make external API
 * calls. The mock records every request it receives and can be configured to
 * fail the next call with a chosen error type.
 */

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::gradient::{GradientChoice, GradientMessage, GradientRequest, GradientResponse, TokenUsage};
use crate::providers::Provider;

/// Tracks API calls to ensure no actual external requests are made
#[derive(Debug, Default)]
pub struct ApiCallTracker {
    /// Count of mock API calls made
    pub call_count: usize,
    /// Last request received
    pub last_request: Option<String>,
    /// Should the next call fail
    pub should_fail: bool,
    /// Error to return if failing
    pub error_type: MockErrorType,
}

/// Type of error to simulate
#[derive(Debug, Clone, Copy, Default)]
pub enum MockErrorType {
    /// Authentication error (invalid API key)
    #[default]
    Auth,
    /// Connection error
    Connection,
    /// Rate limit error
    RateLimit,
    /// API error
    Api,
}

/// Mock implementation of the Gradient provider
#[derive(Debug)]
pub struct MockGradient {
    tracker: Arc<Mutex<ApiCallTracker>>,
    /// Reply content returned on success
    reply: String,
}

impl MockGradient {
    /// Create a new mock provider with a default reply
    pub fn new() -> Self {
        Self::with_reply("This is a mock translation.")
    }

    /// Create a new mock provider returning the given reply content
    pub fn with_reply(reply: impl Into<String>) -> Self {
        MockGradient {
            tracker: Arc::new(Mutex::new(ApiCallTracker::default())),
            reply: reply.into(),
        }
    }

    /// Get the API call tracker
    pub fn tracker(&self) -> Arc<Mutex<ApiCallTracker>> {
        self.tracker.clone()
    }

    /// Configure the mock to fail on the next call
    pub fn fail_next_call(&self, error_type: MockErrorType) {
        let mut tracker = self.tracker.lock().unwrap();
        tracker.should_fail = true;
        tracker.error_type = error_type;
    }
}

impl Default for MockGradient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for MockGradient {
    type Request = GradientRequest;
    type Response = GradientResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        let mut tracker = self.tracker.lock().unwrap();
        tracker.call_count += 1;
        tracker.last_request = Some(format!("{:?}", request));

        if tracker.should_fail {
            tracker.should_fail = false; // Reset for next call
            return match tracker.error_type {
                MockErrorType::Auth => Err(ProviderError::AuthenticationError("Invalid API key".into())),
                MockErrorType::Connection => Err(ProviderError::ConnectionError("Connection failed".into())),
                MockErrorType::RateLimit => Err(ProviderError::RateLimitExceeded("Rate limit exceeded".into())),
                MockErrorType::Api => Err(ProviderError::ApiError {
                    status_code: 400,
                    message: "Bad request".into()
                }),
            };
        }

        Ok(GradientResponse {
            choices: vec![
                GradientChoice {
                    message: GradientMessage {
                        role: "assistant".into(),
                        content: self.reply.clone(),
                    },
                }
            ],
            usage: Some(TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 20,
                total_tokens: 30,
            }),
        })
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    fn extract_text(response: &Self::Response) -> String {
        response.choices
            .first()
            .map(|choice| choice.message.content.clone())
            .unwrap_or_default()
    }
}
