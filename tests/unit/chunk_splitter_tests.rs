/*!
 * Tests for sentence-respecting chunk splitting
 */

use bookwai::translation::ChunkSplitter;
use bookwai::translation::chunk::split_sentences;

#[test]
fn test_split_withTextUnderBound_shouldYieldSingleChunk() {
    let chunks = ChunkSplitter::new(2000).split("One sentence here. Another sentence there.");
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0], "One sentence here. Another sentence there.");
}

#[test]
fn test_split_withBound_shouldNeverExceedItExceptOversizedSentences() {
    let text = "The quick brown fox jumps over the lazy dog. \
                Pack my box with five dozen liquor jugs. \
                How vexingly quick daft zebras jump. \
                The five boxing wizards jump quickly. \
                Sphinx of black quartz, judge my vow.";
    let max = 100;
    let chunks = ChunkSplitter::new(max).split(text);

    assert!(chunks.len() > 1);
    for chunk in &chunks {
        let sentence_count = split_sentences(chunk).len();
        // A chunk over the bound may only be a single oversized sentence
        assert!(
            chunk.len() < max || sentence_count == 1,
            "chunk of {} chars with {} sentences exceeds the bound",
            chunk.len(),
            sentence_count
        );
    }
}

#[test]
fn test_split_shouldReconstructSentenceSequence() {
    let text = "First sentence here. Second sentence there! Third sentence anywhere? \
                Fourth sentence is a somewhat longer one to push past the boundary. Fifth sentence closes.";
    let original_sentences = split_sentences(text);

    let chunks = ChunkSplitter::new(60).split(text);
    let mut recombined = Vec::new();
    for chunk in &chunks {
        recombined.extend(split_sentences(chunk));
    }

    assert_eq!(recombined, original_sentences);
}

#[test]
fn test_split_shouldNeverYieldEmptyChunks() {
    let text = "Tiny. Also tiny. Still tiny. More. Yes. No. Maybe.";
    for max in [1, 5, 10, 50, 1000] {
        for chunk in ChunkSplitter::new(max).split(text) {
            assert!(!chunk.trim().is_empty());
        }
    }
}

#[test]
fn test_split_withExactlyTwoChunkSizedHalves_shouldYieldTwoChunks() {
    // Two sentences of 25 chars; a 30-char bound forces a split after the first
    let text = "Exactly twentyfive chars. Exactly twentyfive again.";
    let chunks = ChunkSplitter::new(30).split(text);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0], "Exactly twentyfive chars.");
    assert_eq!(chunks[1], "Exactly twentyfive again.");
}

#[test]
fn test_split_withTrailingUnterminatedFragment_shouldKeepIt() {
    let chunks = ChunkSplitter::new(2000).split("A full sentence. And a trailing fragment");
    assert_eq!(chunks.len(), 1);
    assert!(chunks[0].ends_with("And a trailing fragment."));
}
