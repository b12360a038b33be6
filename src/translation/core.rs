/*!
 * Core translation service implementation.
 *
 * `TranslationService` resolves a provider id against the catalog, builds the
 * prompt, and sends a single request to the matching API. Only one request may
 * be outstanding per service; there is no retry and no fallback, so provider
 * failures reach the caller unchanged. Dropping the returned future cancels
 * the request.
 */

use async_trait::async_trait;
use log::{debug, info};
use std::time::Instant;
use tokio::sync::Mutex;

use crate::app_config::TranslationConfig;
use crate::errors::ProviderError;
use crate::providers::Provider;
use crate::providers::catalog::{self, ProviderInfo, ProviderKind};
use crate::providers::gemini::{Gemini, GeminiRequest};
use crate::providers::openai::{OpenAI, OpenAIRequest};
use super::prompts::build_translation_prompt;

/// Translates an English passage into Korean
#[async_trait]
pub trait PassageTranslator: Send + Sync {
    /// Translate `passage` with the provider `provider_id`, authenticating with `api_key`
    async fn translate(&self, passage: &str, provider_id: &str, api_key: &str) -> Result<String, ProviderError>;
}

/// Translation service backed by the remote provider APIs
#[derive(Debug)]
pub struct TranslationService {
    /// Translation settings
    config: TranslationConfig,
    /// Held for the duration of a request
    in_flight: Mutex<()>,
}

impl TranslationService {
    /// Create a new translation service
    pub fn new(config: TranslationConfig) -> Self {
        Self {
            config,
            in_flight: Mutex::new(()),
        }
    }

    /// Resolve a provider id and check the credential before any network traffic
    pub fn resolve_provider(provider_id: &str, api_key: &str) -> Result<&'static ProviderInfo, ProviderError> {
        if catalog::is_none_id(provider_id) {
            return Err(ProviderError::NotSelected);
        }

        let provider = catalog::find(provider_id)
            .ok_or_else(|| ProviderError::UnknownProvider(provider_id.trim().to_string()))?;

        if api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey);
        }

        Ok(provider)
    }

    async fn complete_prompt(&self, provider: &ProviderInfo, api_key: &str, prompt: String) -> Result<String, ProviderError> {
        let api_key = api_key.trim();
        let text = match provider.kind {
            ProviderKind::OpenAI => {
                let client = OpenAI::new(api_key, provider.endpoint, self.config.timeout_secs);
                let request = OpenAIRequest::new(provider.model)
                    .add_message("user", prompt)
                    .temperature(self.config.temperature);
                let response = client.complete(request).await?;
                OpenAI::extract_text(&response)
            }
            ProviderKind::Gemini => {
                let client = Gemini::new(api_key, provider.endpoint, self.config.timeout_secs);
                let response = client.complete(GeminiRequest::from_prompt(prompt)).await?;
                Gemini::extract_text(&response)
            }
        };

        if text.trim().is_empty() {
            return Err(ProviderError::ParseError(format!(
                "{} response contained no text",
                provider.kind
            )));
        }

        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl PassageTranslator for TranslationService {
    async fn translate(&self, passage: &str, provider_id: &str, api_key: &str) -> Result<String, ProviderError> {
        let provider = Self::resolve_provider(provider_id, api_key)?;
        let _guard = self.in_flight.try_lock().map_err(|_| ProviderError::RequestInProgress)?;

        info!("Requesting Korean translation from {} ({})", provider.name, provider.model);
        let start = Instant::now();

        let prompt = build_translation_prompt(&self.config.prompt_template, passage);
        let text = self.complete_prompt(provider, api_key, prompt).await?;

        debug!("Translation received in {:.2}s ({} chars)", start.elapsed().as_secs_f64(), text.chars().count());
        Ok(text)
    }
}
