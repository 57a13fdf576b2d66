use anyhow::{Context, Result};
use bytes::Bytes;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::PathBuf;
use std::time::Duration;

use crate::app_config::Config;
use crate::export;
use crate::file_utils::FileManager;
use crate::prescription::PrescriptionRecord;
use crate::speech::SpeechSynthesizer;
use crate::translation_service::TranslationService;

// @module: Application controller for the prescription pipeline

/// Result of one pipeline run
///
/// Everything here is derived output; the record itself is discarded once the
/// run completes.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Target language of the run
    pub language: String,
    /// Cleaned translated prescription text
    pub translated_text: String,
    /// Downloadable text document (translation + original)
    pub download_document: String,
    /// Data link embedding the text document
    pub download_link: String,
    /// Synthesized MP3 audio, when synthesis succeeded
    pub audio: Option<Bytes>,
    /// Path of the written text artifact
    pub text_artifact_path: PathBuf,
    /// Path of the cached audio copy, when synthesis succeeded
    pub audio_artifact_path: Option<PathBuf>,
}

/// Main application controller for prescription translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.target_language.is_empty()
    }

    /// Run the whole pipeline for one prescription record
    ///
    /// validate -> format -> translate -> synthesize -> export. Validation
    /// failure aborts before the translation client is invoked; translation
    /// failure aborts before synthesis; synthesis failure degrades to a
    /// warning and the text artifacts are still produced.
    pub async fn run(&self, record: &PrescriptionRecord, skip_audio: bool) -> Result<PipelineOutcome> {
        let language = self.config.target_language.clone();

        // Invalid records never reach the translation client
        record.validate()
            .context("Prescription validation failed")?;

        let prescription_text = record.format();

        let translation_service = TranslationService::new(self.config.translation.clone());
        self.run_pipeline(&translation_service, &prescription_text, &language, skip_audio)
            .await
    }

    /// Pipeline body, shared with tests that inject a mock-backed service
    pub async fn run_pipeline(
        &self,
        translation_service: &TranslationService,
        prescription_text: &str,
        language: &str,
        skip_audio: bool,
    ) -> Result<PipelineOutcome> {
        let spinner = Self::spinner("Translating...");
        let translation_result = translation_service
            .translate(prescription_text, language)
            .await;
        spinner.finish_and_clear();

        let translated_text = match translation_result {
            Ok(text) => text,
            Err(e) => {
                // No synthesis attempt on a failed translation
                error!("Translation failed: {}", e);
                return Err(anyhow::Error::from(e)
                    .context("Translation failed. Please check your API key and try again."));
            }
        };
        info!("Translation complete");

        let (audio, audio_artifact_path) = if skip_audio {
            (None, None)
        } else {
            let spinner = Self::spinner("Generating audio...");
            let synthesizer = SpeechSynthesizer::new(self.config.speech.clone());
            let synthesis_result = synthesizer.synthesize(&translated_text, language).await;
            spinner.finish_and_clear();

            match synthesis_result {
                Ok(bytes) => {
                    info!("Audio generated ({} bytes)", bytes.len());
                    let cache_path = synthesizer.audio_cache_path(language);
                    (Some(bytes), Some(cache_path))
                },
                Err(e) => {
                    // Non-fatal: text output stays usable
                    warn!("Could not generate audio, text translation is still available: {}", e);
                    (None, None)
                }
            }
        };

        let download_document =
            export::download_document(&translated_text, prescription_text, language);
        let download_link = export::download_link(&download_document);

        let text_artifact_path =
            PathBuf::from(&self.config.output_dir).join(export::text_artifact_name(language));
        FileManager::write_to_file(&text_artifact_path, &download_document)?;

        Ok(PipelineOutcome {
            language: language.to_string(),
            translated_text,
            download_document,
            download_link,
            audio,
            text_artifact_path,
            audio_artifact_path,
        })
    }

    /// Spinner for the long remote calls
    fn spinner(message: &'static str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}
