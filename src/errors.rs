/*!
 * Error types for the workbookgen application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions. Every error exposes
 * a stable `kind()` tag next to its human-readable message.
 */

use thiserror::Error;

/// Errors that can occur while assembling a worksheet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorksheetError {
    /// No usable English sentence was found
    #[error("No valid English sentence found; please provide a passage")]
    EmptyInput,

    /// English and Korean sentence counts disagree
    #[error("Sentence counts do not match: {english_count} English, {korean_count} Korean")]
    SentenceCountMismatch {
        /// Number of English sentences parsed
        english_count: usize,
        /// Number of Korean sentences parsed
        korean_count: usize,
    },
}

impl WorksheetError {
    /// Machine-readable error tag
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::SentenceCountMismatch { .. } => "sentence_count_mismatch",
        }
    }
}

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No provider was chosen
    #[error("No AI provider selected")]
    NotSelected,

    /// The provider id is not in the catalog
    #[error("Unknown AI provider: {0}")]
    UnknownProvider(String),

    /// The API key is missing or blank
    #[error("An API key is required for the selected provider")]
    MissingApiKey,

    /// Another translation request is still running
    #[error("A translation request is already in progress")]
    RequestInProgress,

    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

impl ProviderError {
    /// Machine-readable error tag
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotSelected => "not_selected",
            Self::UnknownProvider(_) => "unknown_provider",
            Self::MissingApiKey => "missing_api_key",
            Self::RequestInProgress => "request_in_progress",
            Self::RequestFailed(_) => "request_failed",
            Self::ConnectionError(_) => "connection_error",
            Self::ApiError { .. } => "api_error",
            Self::ParseError(_) => "parse_error",
        }
    }

    /// Map a reqwest transport failure onto a provider error
    pub fn from_transport(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            Self::ConnectionError(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from worksheet assembly
    #[error("Worksheet error: {0}")]
    Worksheet(#[from] WorksheetError),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AppError {
    /// Machine-readable error tag, delegating to the wrapped error when there is one
    pub fn kind(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Config(_) => "config",
            Self::Worksheet(e) => e.kind(),
            Self::Provider(e) => e.kind(),
            Self::Unknown(_) => "unknown",
        }
    }
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
