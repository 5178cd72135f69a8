/*!
 * Tests for output document assembly
 */

use std::fs;

use bookwai::document_assembler::{DocumentAssembler, JobMetadata, MarkdownAssembler};
use bookwai::translation::{TranslationJob, TranslationOutcome, TranslationUnit};
use crate::common;

fn job_with(outcomes: Vec<TranslationOutcome>) -> TranslationJob {
    let chunks: Vec<String> = (0..outcomes.len())
        .map(|i| format!("Original chunk {}.", i))
        .collect();
    let units = outcomes
        .into_iter()
        .enumerate()
        .map(|(index, outcome)| TranslationUnit { index, outcome })
        .collect();
    TranslationJob::new(chunks, units)
}

#[test]
fn test_render_shouldContainAllMetadataFields() {
    let job = job_with(vec![TranslationOutcome::Translated("ORIGINAL CHUNK 0.".to_string())]);
    let metadata = JobMetadata::new("English", "Persian", 1, "gpt-4o", "https://api.avalai.ir/v1");

    let rendered = MarkdownAssembler::render(&job, &metadata);
    assert!(rendered.contains("Original Language: English"));
    assert!(rendered.contains("Target Language: Persian"));
    assert!(rendered.contains("Total Sections: 1"));
    assert!(rendered.contains("Translation Engine: OpenAI-Compatible Service"));
    assert!(rendered.contains("Model: gpt-4o"));
    assert!(rendered.contains("Endpoint: https://api.avalai.ir/v1"));
    assert!(rendered.contains("Generated on: "));
}

#[test]
fn test_render_withFailedUnit_shouldEmitSentinelInItsSlot() {
    let job = job_with(vec![
        TranslationOutcome::Translated("FIRST.".to_string()),
        TranslationOutcome::Failed("connection reset".to_string()),
        TranslationOutcome::Translated("THIRD.".to_string()),
    ]);
    let metadata = JobMetadata::new("English", "Persian", 3, "gpt-4o", "endpoint");

    let rendered = MarkdownAssembler::render(&job, &metadata);
    let first = rendered.find("FIRST.").unwrap();
    let sentinel = rendered.find("[Translation Error: connection reset]").unwrap();
    let third = rendered.find("THIRD.").unwrap();

    assert!(first < sentinel && sentinel < third);
}

#[test]
fn test_assemble_shouldCreateParentDirectories() {
    let dir = common::create_temp_dir().unwrap();
    let path = dir.path().join("nested").join("output").join("book.fa.md");

    let job = job_with(vec![TranslationOutcome::Translated("TEXT.".to_string())]);
    let metadata = JobMetadata::new("English", "Persian", 1, "gpt-4o", "endpoint");

    MarkdownAssembler::new(&path).assemble(&job, &metadata).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("TEXT."));
}

#[test]
fn test_jobPairs_shouldStayIndexAligned() {
    let job = job_with(vec![
        TranslationOutcome::Translated("A".to_string()),
        TranslationOutcome::Failed("boom".to_string()),
    ]);

    assert!(job.is_aligned());
    assert_eq!(job.failed_count(), 1);

    let pairs: Vec<_> = job.pairs().collect();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0], ("Original chunk 0.", "A".to_string()));
    assert_eq!(pairs[1].1, "[Translation Error: boom]");
}
