/*!
 * Error types for the scriptsense application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with the LLM provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting or exhausted quota
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while validating a prescription record
#[derive(Error, Debug, PartialEq)]
pub enum PrescriptionError {
    /// The patient name field is empty
    #[error("Patient name is required")]
    MissingPatientName,

    /// No medication with a non-empty name was provided
    #[error("At least one medication is required")]
    NoMedications,

    /// The age field is outside the accepted range
    #[error("Patient age {0} is out of range (0-120)")]
    AgeOutOfRange(u32),
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider returned an empty or unusable reply
    #[error("Empty translation returned by provider")]
    EmptyResult,
}

/// Errors that can occur during speech synthesis
#[derive(Error, Debug)]
pub enum SynthesisError {
    /// Error when making the synthesis request fails
    #[error("Synthesis request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the synthesis service
    #[error("Synthesis service responded with error: {status_code} - {message}")]
    ServiceError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the service
        message: String
    },

    /// The service returned an empty audio stream
    #[error("Synthesis service returned no audio data")]
    EmptyAudio,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from prescription validation
    #[error("Validation error: {0}")]
    Prescription(#[from] PrescriptionError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error from speech synthesis
    #[error("Synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
