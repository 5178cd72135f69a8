/*!
 * # BookwAI - Book Translation with AI
 *
 * A Rust library for translating paginated documents (books, manuals,
 * reports) with AI while preserving cross-page reading context.
 *
 * ## Features
 *
 * - Extract per-page text from PDF documents
 * - Stitch pages into one continuous text with context overlap markers
 * - Split text into bounded, sentence-respecting translation chunks
 * - Translate chunks through OpenAI-compatible endpoints with pacing,
 *   bounded retry, and per-chunk failure containment
 * - Keep a fixed glossary of technical vocabulary untranslated
 * - Assemble a bilingual Markdown document from the ordered results
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `pdf_extractor`: Per-page text extraction from source documents
 * - `text_processor`: Paragraph segmentation and overlap merging
 * - `translation`: AI-powered translation pipeline:
 *   - `translation::chunk`: Sentence-respecting chunk splitting
 *   - `translation::core`: Core translation service
 *   - `translation::orchestrator`: Ordered, failure-contained orchestration
 *   - `translation::pacing`: Request pacing
 *   - `translation::glossary` and `translation::prompts`: Instruction payload
 * - `document_assembler`: Bilingual output document writing
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `providers`: Client implementations for LLM providers
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
pub mod document_assembler;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod pdf_extractor;
pub mod providers;
pub mod text_processor;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use document_assembler::{DocumentAssembler, JobMetadata, MarkdownAssembler};
pub use text_processor::{OverlapMerger, ParagraphSegmenter};
pub use translation::{
    ChunkSplitter, ChunkTranslator, TranslationJob, TranslationOrchestrator, TranslationOutcome,
    TranslationService, TranslationUnit,
};
pub use language_utils::{get_language_name, language_codes_match, normalize_to_part2t};
pub use errors::{AppError, AssemblyError, ExtractionError, ProviderError, TranslationError};
