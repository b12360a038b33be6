/*!
 * Exercise rendering, one algorithm per variant.
 *
 * Every function here is pure apart from the scramble shuffle, which draws
 * from the caller's RNG. Returned content is escaped markup; the only
 * unescaped pieces are the literals inserted by this module (blank
 * placeholder and markers).
 */

use rand::Rng;
use rand::seq::SliceRandom;

use super::escape::escape_html;
use super::model::{ExerciseVariant, RenderedExercise, Sentence};

/// Placeholder shown in place of a blanked word
pub const BLANK_PLACEHOLDER: &str = r#"<span class="blank">_____</span>"#;

/// Hint list shown when a fill-in sentence has no blanks
pub const NO_BLANKS_MARKER: &str = "(빈칸 없음)";

/// Shown instead of the Korean sentence when no reference exists
pub const NO_TRANSLATION_MARKER: &str = "한국어 번역 없음";

/// Separator between scrambled words
pub const SCRAMBLE_SEPARATOR: &str = " / ";

/// Every third word (0-based positions 2, 5, 8, ...) is a blank candidate
const BLANK_EVERY: usize = 3;

/// Candidates this short after stripping stay visible
const MIN_BLANK_CHARS: usize = 3;

/// Punctuation stripped from the end of a blanked word before it becomes a hint
const HINT_TRAILING_PUNCTUATION: [char; 5] = ['.', ',', '?', '!', ';'];

/// Render one sentence for the given variant
pub fn render<R: Rng + ?Sized>(
    variant: ExerciseVariant,
    sentence: &Sentence,
    reference: Option<&str>,
    rng: &mut R,
) -> RenderedExercise {
    match variant {
        ExerciseVariant::Translation => render_translation(sentence),
        ExerciseVariant::Analysis => render_analysis(sentence),
        ExerciseVariant::FillIn => render_fill_in(sentence),
        ExerciseVariant::Scramble => render_scramble(sentence, rng),
        ExerciseVariant::KoreanOnly => render_korean_only(reference),
    }
}

/// Sentence text, escaped
pub fn render_translation(sentence: &Sentence) -> RenderedExercise {
    RenderedExercise {
        primary_content: escape_html(sentence.as_str()),
        auxiliary_content: None,
    }
}

/// Sentence text, escaped; emphasis and the annotation box come from the markup layer
pub fn render_analysis(sentence: &Sentence) -> RenderedExercise {
    RenderedExercise {
        primary_content: escape_html(sentence.as_str()),
        auxiliary_content: None,
    }
}

/// Blank every third word longer than two characters and list the blanked words as hints
pub fn render_fill_in(sentence: &Sentence) -> RenderedExercise {
    let mut display = Vec::new();
    let mut hints = Vec::new();

    for (position, word) in sentence.words().into_iter().enumerate() {
        if position % BLANK_EVERY == BLANK_EVERY - 1 {
            let stripped = word.trim_end_matches(HINT_TRAILING_PUNCTUATION);
            if stripped.chars().count() >= MIN_BLANK_CHARS {
                display.push(BLANK_PLACEHOLDER.to_string());
                hints.push(escape_html(stripped));
                continue;
            }
        }
        display.push(escape_html(word));
    }

    let hint_list = if hints.is_empty() {
        NO_BLANKS_MARKER.to_string()
    } else {
        hints.join(", ")
    };

    RenderedExercise {
        primary_content: display.join(" "),
        auxiliary_content: Some(hint_list),
    }
}

/// Uniformly shuffle the words of the sentence
pub fn render_scramble<R: Rng + ?Sized>(sentence: &Sentence, rng: &mut R) -> RenderedExercise {
    let mut words = sentence.words();
    words.shuffle(rng);

    let scrambled: Vec<String> = words.into_iter().map(escape_html).collect();
    RenderedExercise {
        primary_content: scrambled.join(SCRAMBLE_SEPARATOR),
        auxiliary_content: None,
    }
}

/// The Korean reference, escaped, or a marker when there is none
pub fn render_korean_only(reference: Option<&str>) -> RenderedExercise {
    let text = reference
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(NO_TRANSLATION_MARKER);
    RenderedExercise {
        primary_content: escape_html(text),
        auxiliary_content: None,
    }
}
