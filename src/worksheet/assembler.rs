/*!
 * Worksheet assembly.
 *
 * Segments the English passage (and the optional Korean reference), checks
 * that both line up sentence for sentence, then renders every sentence with
 * the requested exercise variant. Validation runs before any block is built,
 * so a failed request never yields a partial document.
 */

use log::{debug, info};
use rand::Rng;

use crate::errors::WorksheetError;
use super::exercise;
use super::model::{ExerciseBlock, ExerciseVariant, Sentence, WorksheetDocument};
use super::segmenter::segment;

/// Everything needed to generate one worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorksheetRequest {
    /// Worksheet title
    pub title: String,
    /// Optional second header line; blank means none
    pub subtitle: String,
    /// Exercise format for every sentence
    pub variant: ExerciseVariant,
    /// English passage
    pub english_text: String,
    /// Korean translation aligned sentence by sentence; blank means none
    pub korean_text: String,
    /// Whether to print reference footers
    pub show_reference: bool,
}

impl WorksheetRequest {
    /// Create a request with no subtitle, no Korean reference and footers enabled
    pub fn new(title: impl Into<String>, variant: ExerciseVariant, english_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            variant,
            english_text: english_text.into(),
            korean_text: String::new(),
            show_reference: true,
        }
    }

    /// Set the subtitle
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Set the Korean reference text
    pub fn korean_text(mut self, korean_text: impl Into<String>) -> Self {
        self.korean_text = korean_text.into();
        self
    }

    /// Enable or disable reference footers
    pub fn show_reference(mut self, show_reference: bool) -> Self {
        self.show_reference = show_reference;
        self
    }
}

/// Assemble a worksheet using the thread-local RNG for scrambling
pub fn assemble(request: &WorksheetRequest) -> Result<WorksheetDocument, WorksheetError> {
    assemble_with_rng(request, &mut rand::rng())
}

/// Assemble a worksheet drawing scramble permutations from `rng`
pub fn assemble_with_rng<R: Rng + ?Sized>(
    request: &WorksheetRequest,
    rng: &mut R,
) -> Result<WorksheetDocument, WorksheetError> {
    let (english, korean) = aligned_sentences(&request.english_text, &request.korean_text)?;
    debug!(
        "Assembling {} worksheet: {} sentences, {} with reference",
        request.variant,
        english.len(),
        korean.len()
    );

    let blocks = english
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            let reference = korean.get(i).map(Sentence::as_str);
            let rendered = exercise::render(request.variant, sentence, reference, &mut *rng);
            ExerciseBlock {
                index: i + 1,
                variant: request.variant,
                primary_content: rendered.primary_content,
                auxiliary_content: rendered.auxiliary_content,
                reference_translation: reference.map(str::to_string),
                show_reference: request.show_reference
                    && reference.is_some()
                    && request.variant.allows_reference_footer(),
            }
        })
        .collect::<Vec<_>>();

    let subtitle = request.subtitle.trim();
    let document = WorksheetDocument {
        title: request.title.clone(),
        subtitle: (!subtitle.is_empty()).then(|| subtitle.to_string()),
        variant: request.variant,
        label: request.variant.label().to_string(),
        blocks,
    };

    info!("Worksheet assembled ({} sentences, 1 page)", document.sentence_count());
    Ok(document)
}

/// Segment both passages and check that they pair up
fn aligned_sentences(
    english_text: &str,
    korean_text: &str,
) -> Result<(Vec<Sentence>, Vec<Sentence>), WorksheetError> {
    if english_text.trim().is_empty() {
        return Err(WorksheetError::EmptyInput);
    }

    let english = segment(english_text);
    if english.is_empty() {
        return Err(WorksheetError::EmptyInput);
    }

    if korean_text.trim().is_empty() {
        return Ok((english, Vec::new()));
    }

    let korean = segment(korean_text);
    if korean.len() != english.len() {
        return Err(WorksheetError::SentenceCountMismatch {
            english_count: english.len(),
            korean_count: korean.len(),
        });
    }

    Ok((english, korean))
}
