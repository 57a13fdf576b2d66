/*!
 * Core translation service implementation.
 *
 * This module contains the TranslationService struct, which builds the
 * medical-translation prompt, sends it to the configured LLM provider and
 * post-processes the reply.
 */

use log::{debug, error, info};

use crate::app_config::TranslationConfig;
use crate::errors::TranslationError;
use crate::providers::gradient::{Gradient, GradientRequest};
use crate::providers::mock::MockGradient;
use crate::providers::Provider;

/// Instructional prompt sent with every prescription
///
/// Placeholders: {target_language}, {prescription}
const MEDICAL_TRANSLATOR_PROMPT: &str = "\
You are a professional medical translator. Your task is to accurately translate \
the following medical prescription into {target_language}.

Ensure that you maintain the exact medical terminology, dosage instructions, and \
any special notes related to the prescription. Provide a clear and concise \
translation that a pharmacist or healthcare professional would understand.

Here is the prescription text:
{prescription}";

/// Provider implementation selected for the service
enum TranslationProviderImpl {
    /// Hosted Gradient AI endpoint
    Gradient { client: Gradient },
    /// Scripted mock, for tests
    Mock { client: MockGradient },
}

/// Translation service for prescription documents
pub struct TranslationService {
    /// Provider implementation
    provider: TranslationProviderImpl,

    /// Configuration for the translation service
    pub config: TranslationConfig,
}

impl TranslationService {
    /// Create a new translation service with the given configuration
    pub fn new(config: TranslationConfig) -> Self {
        let client = Gradient::new_with_config(
            config.get_api_key(),
            config.endpoint.clone(),
            config.retry_count,
            config.retry_backoff_ms,
            config.timeout_secs,
        );

        Self {
            provider: TranslationProviderImpl::Gradient { client },
            config,
        }
    }

    /// Create a translation service backed by a mock provider
    pub fn with_mock_provider(config: TranslationConfig, client: MockGradient) -> Self {
        Self {
            provider: TranslationProviderImpl::Mock { client },
            config,
        }
    }

    /// Build the prompt sent to the provider for a prescription
    pub fn build_prompt(prescription_text: &str, target_language: &str) -> String {
        MEDICAL_TRANSLATOR_PROMPT
            .replace("{target_language}", target_language)
            .replace("{prescription}", prescription_text)
    }

    /// Strip literal markdown bold markers from a provider reply
    ///
    /// Models regularly decorate replies with `**`; the prescription output
    /// is plain text, so every occurrence is removed.
    pub fn strip_bold_markers(text: &str) -> String {
        text.replace("**", "")
    }

    /// Translate a formatted prescription into the target language
    ///
    /// Issues one logical request; transport-level retries live inside the
    /// provider client. On failure the error is logged and returned - the
    /// caller decides whether to re-invoke, there is no pipeline-level
    /// auto-retry.
    pub async fn translate(
        &self,
        prescription_text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        let prompt = Self::build_prompt(prescription_text, target_language);
        debug!("Sending translation request for target language '{}'", target_language);

        let request = GradientRequest::new(&self.config.model)
            .add_message("user", prompt);

        let content = match &self.provider {
            TranslationProviderImpl::Gradient { client } => {
                let response = client.complete(request).await.map_err(|e| {
                    error!("Translation request failed: {}", e);
                    e
                })?;
                Gradient::extract_text(&response)
            },
            TranslationProviderImpl::Mock { client } => {
                let response = client.complete(request).await.map_err(|e| {
                    error!("Translation request failed: {}", e);
                    e
                })?;
                MockGradient::extract_text(&response)
            },
        };

        if content.trim().is_empty() {
            error!("Provider returned an empty translation");
            return Err(TranslationError::EmptyResult);
        }

        info!("Received translation ({} chars)", content.len());
        Ok(Self::strip_bold_markers(&content))
    }

    /// Test the connection to the translation provider
    pub async fn test_connection(&self) -> Result<(), TranslationError> {
        match &self.provider {
            TranslationProviderImpl::Gradient { client } => client.test_connection().await?,
            TranslationProviderImpl::Mock { client } => client.test_connection().await?,
        }
        Ok(())
    }
}
