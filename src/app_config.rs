/*!
 * Application configuration module.
 *
 * This module handles the application configuration including loading,
 * validating and saving configuration settings. The translation API key is
 * never stored in source; it comes from the config file or, preferably, from
 * the SCRIPTSENSE_API_KEY environment variable at startup.
 */

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::language_utils;

/// Environment variable consulted for the translation API key
pub const API_KEY_ENV_VAR: &str = "SCRIPTSENSE_API_KEY";

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Target language name for translation (e.g. "Hindi", "Tamil")
    pub target_language: String,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Speech synthesis config
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Directory where downloadable text artifacts are written
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Model name used on the completion endpoint
    #[serde(default = "default_model")]
    pub model: String,

    /// API key for the service (env var takes precedence, see get_api_key)
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service endpoint URL
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry count for failed requests
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Backoff multiplier for retries (in milliseconds)
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl TranslationConfig {
    /// Resolve the API key, preferring the environment over the config file
    pub fn get_api_key(&self) -> String {
        match std::env::var(API_KEY_ENV_VAR) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => self.api_key.clone(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: String::new(),
            endpoint: default_translation_endpoint(),
            timeout_secs: default_timeout_secs(),
            retry_count: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

/// Speech synthesis configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpeechConfig {
    /// Synthesis service endpoint URL
    #[serde(default = "default_speech_endpoint")]
    pub endpoint: String,

    /// Whether to request slow speech
    #[serde(default)]
    pub slow: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Directory where the per-language audio copy is cached
    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: default_speech_endpoint(),
            slow: false,
            timeout_secs: default_timeout_secs(),
            audio_dir: default_audio_dir(),
        }
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Config {
    /// Validate the configuration after loading and CLI overrides
    pub fn validate(&self) -> Result<()> {
        if !language_utils::is_supported(&self.target_language) {
            return Err(anyhow!(
                "Unsupported target language: {}. Run 'scriptsense languages' for the list.",
                self.target_language
            ));
        }

        if self.translation.get_api_key().is_empty() {
            return Err(anyhow!(
                "Translation API key is required (set it in the config file or via {})",
                API_KEY_ENV_VAR
            ));
        }

        if self.translation.timeout_secs == 0 || self.speech.timeout_secs == 0 {
            return Err(anyhow!("Request timeout must be greater than zero"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            target_language: "Hindi".to_string(),
            translation: TranslationConfig::default(),
            speech: SpeechConfig::default(),
            output_dir: default_output_dir(),
            log_level: LogLevel::default(),
        }
    }
}

fn default_model() -> String {
    "llama3.3-70b-instruct".to_string()
}

fn default_translation_endpoint() -> String {
    "https://inference.do-ai.run/v1".to_string()
}

fn default_speech_endpoint() -> String {
    "https://translate.google.com/translate_tts".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_count() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    1000
}

fn default_audio_dir() -> String {
    "audio".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}
