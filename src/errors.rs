/*!
 * Error types for the bookwai application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with provider APIs
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
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while extracting page text from a source document.
///
/// These are fatal: the job aborts before any chunk is processed.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The source file could not be read or parsed
    #[error("Failed to read source document: {0}")]
    ReadFailed(String),

    /// The source document yielded no usable page text
    #[error("No usable text content in source document: {0}")]
    NoContent(String),

    /// The source file format is not supported
    #[error("Unsupported source format: {0}")]
    UnsupportedFormat(String),
}

/// Errors that can occur during translation of a single chunk.
///
/// The orchestrator contains these locally: a failed chunk is recorded as a
/// sentinel outcome and the job continues with the next chunk.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider returned a response with no usable text
    #[error("Empty response from provider")]
    EmptyResponse,
}

/// Errors that can occur while writing the assembled output document.
///
/// Fatal at the end of the job; translated chunks are not persisted anywhere
/// else, so callers who need them must retain the job before assembly.
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// Error writing the output file
    #[error("Failed to write output document: {0}")]
    WriteFailed(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid or missing setup (credentials, configuration)
    #[error("Setup error: {0}")]
    Setup(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error extracting text from the source document
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error assembling the output document
    #[error("Assembly error: {0}")]
    Assembly(#[from] AssemblyError),

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

impl From<std::io::Error> for AssemblyError {
    fn from(error: std::io::Error) -> Self {
        Self::WriteFailed(error.to_string())
    }
}
