/*!
 * Tests for the translation service and prompt construction
 */

use workbookgen::app_config::TranslationConfig;
use workbookgen::errors::ProviderError;
use workbookgen::providers::catalog::ProviderKind;
use workbookgen::translation::{
    DEFAULT_PROMPT_TEMPLATE, PassageTranslator, TranslationService, build_translation_prompt,
};
use crate::common;

/// Test provider resolution returns the catalog entry
#[test]
fn test_resolveProvider_withKnownIdAndKey_shouldReturnEntry() {
    let provider = TranslationService::resolve_provider(common::TEST_PROVIDER, "key").unwrap();
    assert_eq!(provider.kind, ProviderKind::Gemini);
    assert_eq!(provider.model, "gemini-2.5-flash");
}

/// Test the checks run in selection, catalog, credential order
#[test]
fn test_resolveProvider_shouldCheckSelectionBeforeKey() {
    assert!(matches!(TranslationService::resolve_provider("none", ""), Err(ProviderError::NotSelected)));
    assert!(matches!(
        TranslationService::resolve_provider("bogus", ""),
        Err(ProviderError::UnknownProvider(id)) if id == "bogus"
    ));
    assert!(matches!(
        TranslationService::resolve_provider("openai-gpt5", "   "),
        Err(ProviderError::MissingApiKey)
    ));
}

/// Test the service fails fast without a provider, before any network call
#[tokio::test]
async fn test_translate_withoutProvider_shouldFailNotSelected() {
    let service = TranslationService::new(TranslationConfig::default());
    let result = service.translate(common::SAMPLE_PASSAGE, "none", "").await;
    assert!(matches!(result, Err(ProviderError::NotSelected)));
}

/// Test the service fails fast without a key
#[tokio::test]
async fn test_translate_withoutKey_shouldFailMissingApiKey() {
    let service = TranslationService::new(TranslationConfig::default());
    let result = service.translate(common::SAMPLE_PASSAGE, "openai-gpt4o-mini", "").await;
    assert!(matches!(result, Err(ProviderError::MissingApiKey)));
}

/// Test a custom template without the placeholder gets the passage appended
#[test]
fn test_buildPrompt_withoutPlaceholder_shouldAppendPassage() {
    let prompt = build_translation_prompt("Translate into Korean:  ", "Hi.");
    assert_eq!(prompt, "Translate into Korean:\n\nHi.");
}

/// Test the default template asks to keep sentence boundaries
#[test]
fn test_defaultTemplate_shouldMentionSentenceBoundaries() {
    let prompt = build_translation_prompt(DEFAULT_PROMPT_TEMPLATE, common::SAMPLE_PASSAGE);
    assert!(prompt.contains("문장 구분을 유지"));
    assert!(prompt.ends_with(common::SAMPLE_PASSAGE));
}
