/*!
 * Tests for the provider catalog and mock translator
 */

use workbookgen::errors::ProviderError;
use workbookgen::providers::catalog::{self, NO_PROVIDER_ID, PROVIDERS, ProviderKind};
use workbookgen::providers::mock::MockTranslator;
use workbookgen::translation::PassageTranslator;
use workbookgen::worksheet::segment;
use crate::common;

/// Test the catalog lists both families
#[test]
fn test_catalog_shouldListElevenProvidersFromBothFamilies() {
    assert_eq!(PROVIDERS.len(), 11);
    assert_eq!(PROVIDERS.iter().filter(|p| p.kind == ProviderKind::OpenAI).count(), 7);
    assert_eq!(PROVIDERS.iter().filter(|p| p.kind == ProviderKind::Gemini).count(), 4);
}

/// Test Gemini endpoints embed their model
#[test]
fn test_catalog_geminiEndpoints_shouldNameTheirModel() {
    for provider in PROVIDERS.iter().filter(|p| p.kind == ProviderKind::Gemini) {
        assert!(provider.endpoint.contains(provider.model), "{}", provider.id);
        assert!(provider.endpoint.ends_with(":generateContent"));
    }
}

/// Test lookups trim whitespace and reject the none id
#[test]
fn test_catalogFind_shouldTrimAndRejectNone() {
    assert!(catalog::find("  openai-gpt4.1 ").is_some());
    assert!(catalog::find(NO_PROVIDER_ID).is_none());
    assert!(catalog::is_none_id(" NONE "));
    assert!(!catalog::is_none_id("gemini-2.0-flash"));
}

/// Test the mock produces one translated sentence per English sentence
#[tokio::test]
async fn test_mockTranslator_shouldKeepSentenceAlignment() {
    let translator = MockTranslator::working();
    let text = translator.translate(common::SAMPLE_PASSAGE, common::TEST_PROVIDER, "key").await.unwrap();
    assert_eq!(segment(&text).len(), segment(common::SAMPLE_PASSAGE).len());
    assert_eq!(translator.request_count(), 1);

    let request = translator.last_request().unwrap();
    assert_eq!(request.provider_id, common::TEST_PROVIDER);
    assert_eq!(request.api_key, "key");
}

/// Test the mock applies the same credential checks as the service
#[tokio::test]
async fn test_mockTranslator_withoutKey_shouldFailMissingApiKey() {
    let translator = MockTranslator::working();
    let result = translator.translate("Hi.", common::TEST_PROVIDER, "").await;
    assert!(matches!(result, Err(ProviderError::MissingApiKey)));
}

/// Test the empty mock surfaces a parse error
#[tokio::test]
async fn test_mockTranslator_empty_shouldFailParseError() {
    let translator = MockTranslator::empty();
    let result = translator.translate("Hi.", common::TEST_PROVIDER, "key").await;
    assert!(matches!(result, Err(ProviderError::ParseError(_))));
}
