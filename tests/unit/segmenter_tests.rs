/*!
 * Tests for sentence segmentation
 */

use workbookgen::worksheet::{Sentence, segment};
use crate::common;

fn texts(input: &str) -> Vec<String> {
    segment(input).into_iter().map(Sentence::into_inner).collect()
}

/// Test the sample passage splits into its four sentences
#[test]
fn test_segment_withSamplePassage_shouldReturnFourSentences() {
    let sentences = texts(common::SAMPLE_PASSAGE);
    assert_eq!(sentences.len(), 4);
    assert_eq!(sentences[0], "The students opened their books quietly.");
    assert_eq!(sentences[3], "Practice makes progress.");
}

/// Test the Korean translation pairs one-to-one with the passage
#[test]
fn test_segment_withSampleKorean_shouldMatchEnglishCount() {
    assert_eq!(segment(common::SAMPLE_KOREAN).len(), segment(common::SAMPLE_PASSAGE).len());
}

/// Test that every sentence is trimmed and non-empty
#[test]
fn test_segment_withIrregularSpacing_shouldTrimEverySentence() {
    let sentences = texts("   Spaced out.     Very   spaced!   ");
    assert_eq!(sentences, vec!["Spaced out.", "Very   spaced!"]);
    assert!(sentences.iter().all(|s| !s.is_empty() && s.trim() == s));
}

/// Test that abbreviations split like any other period
#[test]
fn test_segment_withAbbreviation_shouldSplitAtEveryPeriod() {
    assert_eq!(texts("Mr. Kim left."), vec!["Mr.", "Kim left."]);
}

/// Test punctuation-only input becomes a single leftover sentence
#[test]
fn test_segment_withOnlyPunctuation_shouldKeepLeftover() {
    assert_eq!(texts("?!"), vec!["?!"]);
}
