/*!
 * Ordered, rate-limited, failure-contained translation orchestration.
 *
 * The orchestrator drives one job: each chunk is sent to the translation
 * capability in index order, paced by a shared gate, and every outcome is
 * recorded - a failed call becomes a tagged error outcome, never an abort.
 * The returned unit sequence always has the same length and index
 * correspondence as the chunk sequence.
 */

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use log::{debug, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::errors::TranslationError;
use super::pacing::FixedIntervalPacer;

/// The seam to the external translation capability.
///
/// The production implementation is `TranslationService`; tests substitute
/// deterministic stubs. The call is synchronous from the orchestrator's point
/// of view even when it is network I/O underneath.
#[async_trait]
pub trait ChunkTranslator: Send + Sync {
    /// Translate one chunk of text between the given languages
    async fn translate_chunk(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError>;
}

/// Outcome of translating a single chunk.
///
/// Failures are first-class values: a failed chunk keeps its slot in the
/// sequence and carries the reason it failed.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationOutcome {
    /// The chunk was translated successfully
    Translated(String),
    /// The translation call failed; the reason is preserved
    Failed(String),
}

impl TranslationOutcome {
    /// Whether this outcome is a contained failure
    pub fn is_failed(&self) -> bool {
        matches!(self, TranslationOutcome::Failed(_))
    }

    /// Render the outcome for the output document.
    ///
    /// Failures render as the sentinel value, so downstream consumers always
    /// receive well-formed text in every slot.
    pub fn rendered(&self) -> String {
        match self {
            TranslationOutcome::Translated(text) => text.clone(),
            TranslationOutcome::Failed(reason) => format!("[Translation Error: {}]", reason),
        }
    }
}

/// A chunk paired with its translation outcome
#[derive(Debug, Clone)]
pub struct TranslationUnit {
    /// Position in the chunk sequence
    pub index: usize,

    /// What happened when the chunk was translated
    pub outcome: TranslationOutcome,
}

/// One translation job: the ordered chunks and their ordered outcomes.
///
/// Jobs live in memory only - created, populated, translated, handed to the
/// document assembler, discarded.
#[derive(Debug, Default)]
pub struct TranslationJob {
    /// Ordered original chunks
    pub chunks: Vec<String>,

    /// Ordered translation units, one per chunk, same index
    pub units: Vec<TranslationUnit>,
}

impl TranslationJob {
    /// Create a job from chunks and their units.
    ///
    /// Callers uphold the pairing invariant; `is_aligned` exposes it.
    pub fn new(chunks: Vec<String>, units: Vec<TranslationUnit>) -> Self {
        TranslationJob { chunks, units }
    }

    /// Whether every chunk has exactly one unit at the matching index
    pub fn is_aligned(&self) -> bool {
        self.chunks.len() == self.units.len()
            && self.units.iter().enumerate().all(|(i, u)| u.index == i)
    }

    /// Ordered (original, rendered translation) pairs for the assembler
    pub fn pairs(&self) -> impl Iterator<Item = (&str, String)> {
        self.chunks
            .iter()
            .zip(self.units.iter())
            .map(|(chunk, unit)| (chunk.as_str(), unit.outcome.rendered()))
    }

    /// Number of chunks in the job
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the job holds no chunks
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Number of contained per-chunk failures
    pub fn failed_count(&self) -> usize {
        self.units.iter().filter(|u| u.outcome.is_failed()).count()
    }
}

/// Sequences chunk translation calls, pacing, and failure containment.
pub struct TranslationOrchestrator {
    /// Gate spacing successive provider calls
    pacer: FixedIntervalPacer,

    /// Number of chunk translations allowed in flight at once
    max_concurrent_requests: usize,
}

impl TranslationOrchestrator {
    /// Create an orchestrator with the given pacing interval and concurrency.
    ///
    /// A concurrency of 1 is the sequential baseline: each chunk waits for
    /// the previous one to complete.
    pub fn new(inter_chunk_delay: Duration, max_concurrent_requests: usize) -> Self {
        TranslationOrchestrator {
            pacer: FixedIntervalPacer::new(inter_chunk_delay),
            max_concurrent_requests: max_concurrent_requests.max(1),
        }
    }

    /// Translate every chunk, in order, containing per-chunk failures.
    ///
    /// Always returns exactly one unit per chunk at the matching index,
    /// regardless of how many individual calls failed. The progress callback
    /// receives (completed, total) after each chunk settles.
    pub async fn translate_all<T, F>(
        &self,
        chunks: &[String],
        source_language: &str,
        target_language: &str,
        translator: &T,
        progress_callback: F,
    ) -> Vec<TranslationUnit>
    where
        T: ChunkTranslator,
        F: Fn(usize, usize) + Send + Sync,
    {
        if chunks.is_empty() {
            return Vec::new();
        }

        if self.max_concurrent_requests <= 1 {
            self.translate_sequential(chunks, source_language, target_language, translator, &progress_callback)
                .await
        } else {
            self.translate_bounded_parallel(chunks, source_language, target_language, translator, &progress_callback)
                .await
        }
    }

    /// Baseline: one chunk at a time, strict index order, paced between calls
    async fn translate_sequential<T, F>(
        &self,
        chunks: &[String],
        source_language: &str,
        target_language: &str,
        translator: &T,
        progress_callback: &F,
    ) -> Vec<TranslationUnit>
    where
        T: ChunkTranslator,
        F: Fn(usize, usize) + Send + Sync,
    {
        let total = chunks.len();
        let mut units = Vec::with_capacity(total);

        for (index, chunk) in chunks.iter().enumerate() {
            self.pacer.wait_turn().await;

            let outcome = Self::settle(translator, chunk, source_language, target_language, index).await;
            units.push(TranslationUnit { index, outcome });
            progress_callback(index + 1, total);
        }

        units
    }

    /// Bounded fan-out: several chunks in flight, shared pacer, results
    /// reassembled into original chunk order before returning
    async fn translate_bounded_parallel<T, F>(
        &self,
        chunks: &[String],
        source_language: &str,
        target_language: &str,
        translator: &T,
        progress_callback: &F,
    ) -> Vec<TranslationUnit>
    where
        T: ChunkTranslator,
        F: Fn(usize, usize) + Send + Sync,
    {
        let total = chunks.len();
        let completed = Arc::new(AtomicUsize::new(0));

        let mut units = stream::iter(chunks.iter().enumerate())
            .map(|(index, chunk)| {
                let completed = Arc::clone(&completed);
                async move {
                    self.pacer.wait_turn().await;

                    let outcome =
                        Self::settle(translator, chunk, source_language, target_language, index).await;
                    let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                    progress_callback(done, total);

                    TranslationUnit { index, outcome }
                }
            })
            .buffer_unordered(self.max_concurrent_requests)
            .collect::<Vec<_>>()
            .await;

        // Completion order is arbitrary; the handoff order is not
        units.sort_by_key(|unit| unit.index);
        units
    }

    /// Run one translation call and fold any failure into the outcome
    async fn settle<T: ChunkTranslator>(
        translator: &T,
        chunk: &str,
        source_language: &str,
        target_language: &str,
        index: usize,
    ) -> TranslationOutcome {
        match translator.translate_chunk(chunk, source_language, target_language).await {
            Ok(translated) => {
                debug!("Chunk {} translated ({} -> {} chars)", index + 1, chunk.len(), translated.len());
                TranslationOutcome::Translated(translated)
            }
            Err(e) => {
                warn!("Chunk {} failed, continuing: {}", index + 1, e);
                TranslationOutcome::Failed(e.to_string())
            }
        }
    }
}
