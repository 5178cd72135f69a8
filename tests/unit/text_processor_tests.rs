/*!
 * Tests for paragraph segmentation and overlap merging
 */

use bookwai::text_processor::{OverlapMerger, ParagraphSegmenter, CONTEXT_MARKER_OPEN};
use crate::common;

fn merger(overlap: usize) -> OverlapMerger {
    OverlapMerger::new(overlap, ParagraphSegmenter::default())
}

/// Count context-marker blocks in merged output
fn marker_count(merged: &str) -> usize {
    merged.matches(CONTEXT_MARKER_OPEN).count()
}

#[test]
fn test_segment_withWindowsLineEndings_shouldStillSplit() {
    let segmenter = ParagraphSegmenter::default();
    let text = "First paragraph of text.\r\n\r\nSecond paragraph of text.";
    let paragraphs = segmenter.segment(text);
    assert_eq!(paragraphs.len(), 2);
}

#[test]
fn test_segment_withSameInputTwice_shouldBeDeterministic() {
    let segmenter = ParagraphSegmenter::default();
    let text = "Alpha paragraph here.\n\nBeta paragraph here.";
    assert_eq!(segmenter.segment(text), segmenter.segment(text));
}

#[test]
fn test_merge_withThreePagesAndOverlapOne_shouldEmitTwoMarkers() {
    let pages = common::three_page_document();
    let merged = merger(1).merge(&pages);

    // N pages, all non-empty, k > 0 => exactly N-1 context blocks
    assert_eq!(marker_count(&merged), 2);

    // Each block carries the previous page's last paragraph verbatim
    assert!(merged.contains(
        "[CONTEXT FROM PREVIOUS PAGE: Pack my box with five dozen liquor jugs.]"
    ));
    assert!(merged.contains(
        "[CONTEXT FROM PREVIOUS PAGE: The five boxing wizards jump quickly.]"
    ));
}

#[test]
fn test_merge_withOverlapLargerThanPage_shouldCarryWholePage() {
    let pages = vec![
        common::page_from_paragraphs(&["Only paragraph on page one."]),
        common::page_from_paragraphs(&["Only paragraph on page two."]),
    ];
    // Page one has fewer paragraphs than k; it still overlaps fully
    let merged = merger(3).merge(&pages);
    assert!(merged.contains("[CONTEXT FROM PREVIOUS PAGE: Only paragraph on page one.]"));
}

#[test]
fn test_merge_withMultiParagraphOverlap_shouldJoinWithBlankLines() {
    let pages = vec![
        common::page_from_paragraphs(&["First paragraph of page one.", "Second paragraph of page one."]),
        common::page_from_paragraphs(&["First paragraph of page two."]),
    ];
    let merged = merger(2).merge(&pages);
    assert!(merged.contains(
        "[CONTEXT FROM PREVIOUS PAGE: First paragraph of page one.\n\nSecond paragraph of page one.]"
    ));
}

#[test]
fn test_merge_withZeroOverlap_shouldContainAllContentButNoMarkers() {
    let pages = common::three_page_document();
    let merged = merger(0).merge(&pages);

    assert_eq!(marker_count(&merged), 0);
    assert!(merged.contains("The quick brown fox jumps over the lazy dog."));
    assert!(merged.contains("Two driven jocks help fax my big quiz."));
}

#[test]
fn test_merge_withEmptyPageBetweenContent_shouldContinueContext() {
    let pages = vec![
        common::page_from_paragraphs(&["Closing paragraph of chapter one."]),
        String::new(),
        common::page_from_paragraphs(&["Opening paragraph of chapter two."]),
    ];
    let merged = merger(1).merge(&pages);

    // The empty page contributes nothing and leaves the carry-buffer alone,
    // so chapter two still sees chapter one's trailing paragraph.
    assert_eq!(marker_count(&merged), 1);
    assert!(merged.contains("[CONTEXT FROM PREVIOUS PAGE: Closing paragraph of chapter one.]"));
}

#[test]
fn test_merge_withNoPages_shouldYieldEmptyText() {
    let merged = merger(1).merge(&[]);
    assert!(merged.is_empty());
}

#[test]
fn test_merge_runTwice_shouldBeByteIdentical() {
    let pages = common::three_page_document();
    let m = merger(1);
    assert_eq!(m.merge(&pages), m.merge(&pages));
}

#[test]
fn test_merge_shouldPreservePageOrder() {
    let pages = common::three_page_document();
    let merged = merger(1).merge(&pages);

    let first = merged.find("The quick brown fox").unwrap();
    let second = merged.find("How vexingly quick").unwrap();
    let third = merged.find("Sphinx of black quartz").unwrap();
    assert!(first < second && second < third);
}
