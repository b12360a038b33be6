/*!
 * # workbookgen - English reading worksheet generator
 *
 * A Rust library for turning an English passage into a printable exercise
 * worksheet, one exercise block per sentence.
 *
 * ## Features
 *
 * - Punctuation-based sentence segmentation
 * - Five exercise formats:
 *   - Translation practice
 *   - Sentence structure analysis (SVOC)
 *   - Fill-in-the-blank with a hint list
 *   - Word scramble
 *   - English composition from the Korean sentence
 * - Optional sentence-aligned Korean reference with per-block footers
 * - AI-generated Korean translation through OpenAI or Google Gemini
 * - Printable A4 two-column HTML output, or JSON
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `worksheet`: Segmentation, exercise rendering, assembly and HTML output
 * - `translation`: The passage translation interface and its HTTP-backed service
 * - `providers`: Provider catalog and API clients:
 *   - `providers::openai`: OpenAI chat completions client
 *   - `providers::gemini`: Gemini generateContent client
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod providers;
pub mod translation;
pub mod worksheet;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, GenerateJob, OutputFormat};
pub use errors::{AppError, ProviderError, WorksheetError};
pub use translation::{PassageTranslator, TranslationService};
pub use worksheet::{
    ExerciseBlock, ExerciseVariant, WorksheetDocument, WorksheetRequest, assemble, segment,
};
