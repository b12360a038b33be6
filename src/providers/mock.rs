/*!
 * Mock translator for testing.
 *
 * This module provides a mock `PassageTranslator` that simulates different behaviors:
 * - `MockTranslator::working()` - Always succeeds, one translated sentence per source sentence
 * - `MockTranslator::failing()` - Always fails with an API error
 * - `MockTranslator::empty()` - Succeeds with an empty body, reported as a parse error
 * - `MockTranslator::slow(ms)` - Succeeds after a delay
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::translation::PassageTranslator;
use crate::translation::core::TranslationService;
use crate::worksheet::segment;

/// Behavior mode for the mock translator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a sentence-aligned translation
    Working,
    /// Always fails with an error
    Failing,
    /// Returns an empty response
    Empty,
    /// Simulates a slow response
    Slow { delay_ms: u64 },
}

/// A request seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct MockRequest {
    pub passage: String,
    pub provider_id: String,
    pub api_key: String,
}

/// Mock translator for exercising translation callers without network access
#[derive(Debug, Clone)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of translate calls, shared between clones
    request_count: Arc<AtomicUsize>,
    /// Last request received
    last_request: Arc<Mutex<Option<MockRequest>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&str) -> String>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
            custom_response: None,
        }
    }

    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Set a custom response generator, called with the passage
    pub fn with_custom_response(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of translate calls made so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<MockRequest> {
        self.last_request.lock().clone()
    }

    /// One `[번역] ...` line per sentence of the passage
    pub fn aligned_translation(passage: &str) -> String {
        segment(passage)
            .iter()
            .map(|sentence| format!("[번역] {}", sentence))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn respond(&self, passage: &str) -> String {
        match self.custom_response {
            Some(generator) => generator(passage),
            None => Self::aligned_translation(passage),
        }
    }
}

#[async_trait]
impl PassageTranslator for MockTranslator {
    async fn translate(&self, passage: &str, provider_id: &str, api_key: &str) -> Result<String, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock() = Some(MockRequest {
            passage: passage.to_string(),
            provider_id: provider_id.to_string(),
            api_key: api_key.to_string(),
        });

        // Same selection and credential checks as the real service
        TranslationService::resolve_provider(provider_id, api_key)?;

        match self.behavior {
            MockBehavior::Working => Ok(self.respond(passage)),
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),
            MockBehavior::Empty => Err(ProviderError::ParseError("Simulated empty response".to_string())),
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(self.respond(passage))
            }
        }
    }
}
