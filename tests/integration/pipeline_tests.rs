/*!
 * End-to-end pipeline tests: pages -> merged text -> chunks -> ordered
 * translation units -> assembled document
 */

use std::time::Duration;

use bookwai::app_config::Config;
use bookwai::app_controller::Controller;
use bookwai::document_assembler::{DocumentAssembler, JobMetadata, MarkdownAssembler};
use bookwai::text_processor::{OverlapMerger, ParagraphSegmenter, CONTEXT_MARKER_OPEN};
use bookwai::translation::chunk::split_sentences;
use bookwai::translation::{ChunkSplitter, TranslationJob, TranslationOrchestrator};
use crate::common::{self, UpperCaseTranslator};

#[tokio::test]
async fn test_fullPipeline_withThreePages_shouldProduceOrderedBilingualDocument() {
    // Three pages of two paragraphs each, one paragraph of overlap
    let pages = common::three_page_document();
    let merger = OverlapMerger::new(1, ParagraphSegmenter::default());
    let merged = merger.merge(&pages);

    // Two page boundaries => two context-marker blocks
    assert_eq!(merged.matches(CONTEXT_MARKER_OPEN).count(), 2);

    // A threshold low enough to force exactly two chunks
    let chunks = ChunkSplitter::new(200).split(&merged);
    assert_eq!(chunks.len(), 2);

    // The chunks jointly cover the merged text's sentence sequence
    let mut covered = Vec::new();
    for chunk in &chunks {
        covered.extend(split_sentences(chunk));
    }
    assert_eq!(covered, split_sentences(&merged));

    // Orchestrate with an upper-casing stub
    let orchestrator = TranslationOrchestrator::new(Duration::ZERO, 1);
    let units = orchestrator
        .translate_all(&chunks, "en", "fa", &UpperCaseTranslator, |_, _| {})
        .await;

    assert_eq!(units.len(), 2);
    let job = TranslationJob::new(chunks.clone(), units);
    assert!(job.is_aligned());
    assert_eq!(job.failed_count(), 0);

    // Each translated value is the upper-cased corresponding chunk
    for (i, (original, translated)) in job.pairs().enumerate() {
        assert_eq!(original, chunks[i]);
        assert_eq!(translated, chunks[i].to_uppercase());
    }

    // The assembler receives both pairs in original order
    let dir = common::create_temp_dir().unwrap();
    let output = dir.path().join("book.fa.md");
    let metadata = JobMetadata::new("English", "Persian", job.len(), "stub-model", "stub-endpoint");
    MarkdownAssembler::new(&output).assemble(&job, &metadata).unwrap();

    let document = std::fs::read_to_string(&output).unwrap();
    assert!(document.contains("Total Sections: 2"));
    let first = document.find(&chunks[0].to_uppercase()).unwrap();
    let second = document.find(&chunks[1].to_uppercase()).unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn test_pipeline_withNoPages_shouldYieldNothingAtEveryStage() {
    let merger = OverlapMerger::new(1, ParagraphSegmenter::default());
    let merged = merger.merge(&[]);
    assert!(merged.is_empty());

    let chunks = ChunkSplitter::new(2000).split(&merged);
    assert!(chunks.is_empty());

    let orchestrator = TranslationOrchestrator::new(Duration::ZERO, 1);
    let units = orchestrator
        .translate_all(&chunks, "en", "fa", &UpperCaseTranslator, |_, _| {})
        .await;
    assert!(units.is_empty());
}

#[tokio::test]
async fn test_controllerRun_withWhitespaceOnlySource_shouldReportExtractionFailure() {
    let dir = common::create_temp_dir().unwrap();
    let input = common::create_test_file(
        &dir.path().to_path_buf(),
        "empty.txt",
        "   \u{c}  \n ",
    )
    .unwrap();

    let mut config = Config::default();
    config.translation.provider.api_key = "test-key".to_string();
    let controller = Controller::with_config(config).unwrap();

    // The job must fail up front instead of proceeding with an empty document
    let result = controller
        .run(input, dir.path().to_path_buf(), false)
        .await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().to_lowercase().contains("no usable text"));
}

#[tokio::test]
async fn test_controllerExtractOnly_shouldWriteMergedTextWithMarkers() {
    let dir = common::create_temp_dir().unwrap();
    let pages = common::three_page_document();
    let input = common::create_test_file(
        &dir.path().to_path_buf(),
        "book.txt",
        &pages.join("\u{c}"),
    )
    .unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();
    let output = controller.extract_only(&input, dir.path()).unwrap();

    let merged = std::fs::read_to_string(&output).unwrap();
    assert_eq!(merged.matches(CONTEXT_MARKER_OPEN).count(), 2);
    assert!(merged.contains("The quick brown fox jumps over the lazy dog."));
}
