/*!
 * # ScriptSense - Medical Prescription Translator
 *
 * A Rust library for translating structured medical prescriptions into Indian
 * languages using a hosted LLM, with speech synthesis of the result.
 *
 * ## Features
 *
 * - Structured prescription records with required-field validation
 * - Deterministic fixed-layout rendering of prescriptions to plain text
 * - Translation via the DigitalOcean Gradient AI completion endpoint
 * - Bounded retry with exponential backoff on transient API failures
 * - MP3 speech synthesis of the translation via a remote TTS service
 * - Downloadable text and audio artifacts
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `prescription`: Prescription record, validation and formatting
 * - `translation_service`: LLM-powered prescription translation
 * - `speech`: Speech synthesis client
 * - `export`: Download artifact rendering
 * - `language_utils`: Language catalogue and synthesis code table
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `providers`: Client implementations for LLM providers:
 *   - `providers::gradient`: Gradient AI API client
 *   - `providers::mock`: Scripted provider for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod export;
pub mod file_utils;
pub mod language_utils;
pub mod prescription;
pub mod providers;
pub mod speech;
pub mod translation_service;

// Re-export main types for easier usage
pub use app_config::Config;
pub use prescription::{MedicationEntry, PrescriptionRecord, TreatmentType};
pub use translation_service::TranslationService;
pub use speech::SpeechSynthesizer;
pub use language_utils::{synthesis_code, is_supported, SUPPORTED_LANGUAGES};
pub use errors::{AppError, PrescriptionError, ProviderError, SynthesisError, TranslationError};
