/*!
 * Punctuation-based sentence segmentation.
 *
 * A sentence is a run of characters that are not `.`, `!` or `?`, closed by
 * one or more of those terminators. Whatever text is left over once every
 * such run has been taken (typically a trailing fragment with no closing
 * punctuation) becomes one final sentence.
 */

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use super::model::Sentence;

/// Non-terminator run followed by its terminator run
static SENTENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^.!?]+[.!?]+").expect("sentence pattern is valid")
});

/// Split raw text into ordered, trimmed, non-empty sentences
pub fn segment(text: &str) -> Vec<Sentence> {
    let mut sentences: Vec<Sentence> = SENTENCE_REGEX
        .find_iter(text)
        .filter_map(|m| Sentence::new(m.as_str()))
        .collect();

    let leftover = SENTENCE_REGEX.replace_all(text, "");
    if let Some(fragment) = Sentence::new(&leftover) {
        sentences.push(fragment);
    }

    trace!("Segmented {} chars into {} sentences", text.len(), sentences.len());
    sentences
}
