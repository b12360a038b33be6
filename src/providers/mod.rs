/*!
 * Provider implementations for AI translation services.
 *
 * This module contains client implementations for the supported provider families:
 * - OpenAI: Chat completions API
 * - Gemini: Google generateContent API
 *
 * plus the fixed catalog of selectable provider entries and a mock translator
 * for tests.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all LLM providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing the translation service to drive them the same way.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// The request type for this provider
    type Request: Send + Sync;

    /// The response type for this provider
    type Response: Send + Sync;

    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<Self::Response, ProviderError>` - The response from the provider or an error
    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError>;

    /// Extract text from the provider response
    ///
    /// # Returns
    /// * `String` - The extracted text, empty when the response carries none
    fn extract_text(response: &Self::Response) -> String;
}

/// Pull the `error.message` field out of an error body, if the body has one
pub(crate) fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

pub mod catalog;
pub mod gemini;
pub mod mock;
pub mod openai;
