/*!
 * Worksheet generation pipeline.
 *
 * - `segmenter`: Punctuation-based sentence splitting
 * - `exercise`: Per-variant rendering of one sentence
 * - `assembler`: Sentence pairing, validation and document assembly
 * - `html`: Printable HTML page for an assembled document
 * - `escape`: HTML escaping
 * - `model`: Sentences, variants, blocks and documents
 */

// Re-export main types for easier usage
pub use self::assembler::{WorksheetRequest, assemble, assemble_with_rng};
pub use self::escape::escape_html;
pub use self::html::render_document;
pub use self::model::{ExerciseBlock, ExerciseVariant, RenderedExercise, Sentence, WorksheetDocument};
pub use self::segmenter::segment;

// Submodules
pub mod assembler;
pub mod escape;
pub mod exercise;
pub mod html;
pub mod model;
pub mod segmenter;
