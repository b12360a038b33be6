/*!
 * Tests for error types
 */

use workbookgen::errors::{AppError, ProviderError, WorksheetError};

/// Test worksheet error messages and kinds
#[test]
fn test_worksheetError_shouldDescribeCounts() {
    let error = WorksheetError::SentenceCountMismatch { english_count: 5, korean_count: 4 };
    assert_eq!(error.to_string(), "Sentence counts do not match: 5 English, 4 Korean");
    assert_eq!(error.kind(), "sentence_count_mismatch");
    assert_eq!(WorksheetError::EmptyInput.kind(), "empty_input");
}

/// Test every provider error has a distinct kind
#[test]
fn test_providerError_kinds_shouldBeDistinct() {
    let errors = [
        ProviderError::NotSelected,
        ProviderError::UnknownProvider("x".to_string()),
        ProviderError::MissingApiKey,
        ProviderError::RequestInProgress,
        ProviderError::RequestFailed("x".to_string()),
        ProviderError::ConnectionError("x".to_string()),
        ProviderError::ApiError { status_code: 401, message: "x".to_string() },
        ProviderError::ParseError("x".to_string()),
    ];

    let mut kinds: Vec<&str> = errors.iter().map(ProviderError::kind).collect();
    kinds.sort_unstable();
    kinds.dedup();
    assert_eq!(kinds.len(), errors.len());
}

/// Test API errors carry the status code in their message
#[test]
fn test_providerError_apiError_shouldIncludeStatus() {
    let error = ProviderError::ApiError { status_code: 429, message: "Rate limited".to_string() };
    assert_eq!(error.to_string(), "API responded with error: 429 - Rate limited");
}

/// Test wrapping keeps the inner kind
#[test]
fn test_appError_fromInnerErrors_shouldDelegateKind() {
    let app: AppError = WorksheetError::EmptyInput.into();
    assert_eq!(app.kind(), "empty_input");
    assert!(app.to_string().starts_with("Worksheet error:"));

    let app: AppError = ProviderError::MissingApiKey.into();
    assert_eq!(app.kind(), "missing_api_key");
}

/// Test io and anyhow conversions
#[test]
fn test_appError_fromIoAndAnyhow_shouldMapToFileAndUnknown() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    assert_eq!(AppError::from(io).kind(), "file");

    let other = AppError::from(anyhow::anyhow!("boom"));
    assert_eq!(other.kind(), "unknown");
    assert_eq!(other.to_string(), "Unknown error: boom");
}

/// Test worksheet errors survive an anyhow round trip
#[test]
fn test_worksheetError_throughAnyhow_shouldDowncast() {
    let error: anyhow::Error = WorksheetError::EmptyInput.into();
    assert_eq!(error.downcast_ref::<WorksheetError>(), Some(&WorksheetError::EmptyInput));
}
