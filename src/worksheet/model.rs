/*!
 * Worksheet document model.
 *
 * Sentences, exercise variants, exercise blocks and the assembled document.
 * Everything here is created per generation request and never mutated
 * afterwards; regenerating produces a brand-new document.
 */

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A trimmed, non-empty sentence taken from a passage
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentence(String);

impl Sentence {
    /// Build a sentence from raw text, returning `None` when nothing is left after trimming
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Borrow the sentence text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated words of the sentence
    pub fn words(&self) -> Vec<&str> {
        self.0.split_whitespace().collect()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sentence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Exercise format applied to every sentence of one worksheet
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseVariant {
    // @variant: Translate each sentence into Korean
    #[default]
    Translation,
    // @variant: Annotate sentence structure (SVOC)
    Analysis,
    // @variant: Fill in blanked words from a hint list
    FillIn,
    // @variant: Put scrambled words back in order
    Scramble,
    // @variant: Compose the English sentence from its Korean translation
    KoreanOnly,
}

impl ExerciseVariant {
    /// All variants in worksheet-menu order
    pub const ALL: [ExerciseVariant; 5] = [
        Self::Translation,
        Self::Analysis,
        Self::FillIn,
        Self::Scramble,
        Self::KoreanOnly,
    ];

    // @returns: Stable identifier used in config files and CSS classes
    pub fn id(&self) -> &'static str {
        match self {
            Self::Translation => "translation",
            Self::Analysis => "analysis",
            Self::FillIn => "fill-in",
            Self::Scramble => "scramble",
            Self::KoreanOnly => "korean-only",
        }
    }

    // @returns: Header label printed on the worksheet
    pub fn label(&self) -> &'static str {
        match self {
            Self::Translation => "1. 번역 연습 (기본)",
            Self::Analysis => "2. 문장 구조 분석 (SVOC)",
            Self::FillIn => "3. 빈칸 채우기 (주요 어휘/구문)",
            Self::Scramble => "4. 순서 배열 (단어/구문 섞기)",
            Self::KoreanOnly => "5. 영작하기 (한글 번역 참고)",
        }
    }

    /// Whether a block of this variant may carry a reference-translation footer
    pub fn allows_reference_footer(&self) -> bool {
        !matches!(self, Self::KoreanOnly)
    }
}

impl fmt::Display for ExerciseVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for ExerciseVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "translation" => Ok(Self::Translation),
            "analysis" => Ok(Self::Analysis),
            "fill-in" | "fillin" => Ok(Self::FillIn),
            "scramble" => Ok(Self::Scramble),
            "korean-only" | "koreanonly" => Ok(Self::KoreanOnly),
            _ => Err(anyhow!("Invalid exercise variant: {}", s)),
        }
    }
}

/// Rendered content of one sentence, before it is numbered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedExercise {
    /// Escaped markup for the exercise body
    pub primary_content: String,
    /// Escaped markup for the hint list (fill-in only)
    pub auxiliary_content: Option<String>,
}

/// One numbered exercise on the worksheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseBlock {
    /// 1-based position in the passage
    pub index: usize,

    /// Exercise format of this block
    pub variant: ExerciseVariant,

    /// Escaped markup specific to the variant
    pub primary_content: String,

    /// Hint word list for fill-in blocks
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub auxiliary_content: Option<String>,

    /// Korean sentence at the same position, as plain text
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reference_translation: Option<String>,

    /// Whether the reference footer is printed under this block
    pub show_reference: bool,
}

impl ExerciseBlock {
    /// Reference text to print under the block, if any
    pub fn reference_footer(&self) -> Option<&str> {
        if self.show_reference {
            self.reference_translation.as_deref()
        } else {
            None
        }
    }
}

/// A fully assembled worksheet: header plus ordered exercise blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetDocument {
    /// Worksheet title
    pub title: String,

    /// Optional second header line
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subtitle: Option<String>,

    /// Exercise format used by every block
    pub variant: ExerciseVariant,

    /// Human-readable variant label shown in the header
    pub label: String,

    /// Exercise blocks in passage order
    pub blocks: Vec<ExerciseBlock>,
}

impl WorksheetDocument {
    /// Number of exercise blocks
    pub fn sentence_count(&self) -> usize {
        self.blocks.len()
    }
}
