/*!
 * AI-assisted translation of a passage into Korean.
 *
 * - `core`: The `PassageTranslator` interface and the HTTP-backed `TranslationService`
 * - `prompts`: Prompt template handling
 */

// Re-export main types for easier usage
pub use self::core::{PassageTranslator, TranslationService};
pub use self::prompts::{DEFAULT_PROMPT_TEMPLATE, build_translation_prompt};

// Submodules
pub mod core;
pub mod prompts;
