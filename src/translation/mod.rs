/*!
 * Translation pipeline for book translation using AI providers.
 *
 * This module contains the core functionality for turning merged document
 * text into ordered, translated units. It is split into several submodules:
 *
 * - `chunk`: Sentence-respecting chunk splitting
 * - `core`: Core translation service definition
 * - `glossary`: Non-translatable terminology
 * - `orchestrator`: Ordered, failure-contained translation orchestration
 * - `pacing`: Request pacing for rate-limited providers
 * - `prompts`: Prompt templates for translation
 */

// Re-export main types for easier usage
pub use self::chunk::ChunkSplitter;
pub use self::core::TranslationService;
pub use self::glossary::Glossary;
pub use self::orchestrator::{
    ChunkTranslator, TranslationJob, TranslationOrchestrator, TranslationOutcome, TranslationUnit,
};
pub use self::pacing::FixedIntervalPacer;
pub use self::prompts::PromptTemplate;

// Submodules
pub mod chunk;
pub mod core;
pub mod glossary;
pub mod orchestrator;
pub mod pacing;
pub mod prompts;
