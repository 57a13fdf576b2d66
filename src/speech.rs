/*!
 * Speech synthesis client.
 *
 * Sends translated prescription text to a remote gTTS-style synthesis
 * endpoint and returns the MP3 byte stream. A copy of the most recent audio
 * per language is cached under the configured audio directory, last write
 * wins.
 */

use std::path::PathBuf;
use std::time::Duration;
use bytes::Bytes;
use log::{debug, warn};
use reqwest::Client;
use url::Url;

use crate::app_config::SpeechConfig;
use crate::errors::SynthesisError;
use crate::file_utils::FileManager;
use crate::language_utils;

/// Speech synthesizer backed by a remote TTS service
pub struct SpeechSynthesizer {
    /// HTTP client for synthesis requests
    client: Client,
    /// Synthesis configuration
    config: SpeechConfig,
}

impl SpeechSynthesizer {
    /// Create a new synthesizer with the given configuration
    pub fn new(config: SpeechConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            config,
        }
    }

    /// Path of the cached audio file for a language
    pub fn audio_cache_path(&self, language: &str) -> PathBuf {
        PathBuf::from(&self.config.audio_dir)
            .join(format!("prescription_audio_{}.mp3", language))
    }

    /// Build the synthesis request URL for the given text and language name
    fn build_request_url(&self, text: &str, language: &str) -> Result<Url, SynthesisError> {
        let lang_code = language_utils::synthesis_code(language);

        let mut url = Url::parse(&self.config.endpoint)
            .map_err(|e| SynthesisError::RequestFailed(format!("Invalid synthesis endpoint: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("ie", "UTF-8")
            .append_pair("client", "tw-ob")
            .append_pair("q", text)
            .append_pair("tl", lang_code)
            .append_pair("ttsspeed", if self.config.slow { "0.3" } else { "1" });

        Ok(url)
    }

    /// Synthesize speech for the given text and language name
    ///
    /// Returns the MP3 bytes and caches a copy under the audio directory. A
    /// failed cache write downgrades to a warning; the in-memory bytes are
    /// still returned. Synthesis failure itself must be treated as non-fatal
    /// by callers - the text result stays usable.
    pub async fn synthesize(&self, text: &str, language: &str) -> Result<Bytes, SynthesisError> {
        let url = self.build_request_url(text, language)?;
        debug!("Requesting speech synthesis for language '{}' ({})",
               language, language_utils::synthesis_code(language));

        let response = self.client.get(url)
            .send()
            .await
            .map_err(|e| SynthesisError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(SynthesisError::ServiceError {
                status_code: status.as_u16(),
                message,
            });
        }

        let audio = response.bytes().await
            .map_err(|e| SynthesisError::RequestFailed(e.to_string()))?;

        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        // Cache the most recent audio per language; last write wins
        let cache_path = self.audio_cache_path(language);
        if let Err(e) = FileManager::write_bytes(&cache_path, &audio) {
            warn!("Could not cache audio file {:?}: {}", cache_path, e);
        }

        Ok(audio)
    }
}
