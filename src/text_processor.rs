use once_cell::sync::Lazy;
use regex::Regex;
use log::debug;

// @module: Page text segmentation and overlap merging

// @const: Blank-line paragraph separator
static PARAGRAPH_SPLIT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\s*\n").unwrap()
});

/// Opening of a context-marker block carried across a page boundary
pub const CONTEXT_MARKER_OPEN: &str = "[CONTEXT FROM PREVIOUS PAGE: ";

/// Closing of a context-marker block
pub const CONTEXT_MARKER_CLOSE: &str = "]";

/// Splits raw page text into paragraphs.
///
/// Paragraphs are maximal runs of text bounded by blank lines. Candidates are
/// trimmed and dropped when shorter than the minimum length, which filters
/// page numbers and stray extraction artifacts.
#[derive(Debug, Clone)]
pub struct ParagraphSegmenter {
    // @field: Minimum characters for a paragraph to survive the noise filter
    min_paragraph_chars: usize,
}

impl Default for ParagraphSegmenter {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ParagraphSegmenter {
    /// Create a segmenter with the given noise threshold
    pub fn new(min_paragraph_chars: usize) -> Self {
        ParagraphSegmenter { min_paragraph_chars }
    }

    /// Split text into trimmed, noise-filtered paragraphs.
    ///
    /// Pure function: identical input always yields the identical sequence.
    pub fn segment(&self, text: &str) -> Vec<String> {
        PARAGRAPH_SPLIT_REGEX
            .split(text)
            .map(str::trim)
            .filter(|p| !p.is_empty() && p.len() > self.min_paragraph_chars)
            .map(|p| p.to_string())
            .collect()
    }
}

/// Stitches per-page paragraph lists into one continuous text.
///
/// A carry-buffer holds the trailing paragraphs of the last page that had
/// content; each subsequent contributing page is preceded by a context-marker
/// block wrapping that buffer verbatim, so a translator sees the end of the
/// previous page when it starts a new one.
#[derive(Debug, Clone)]
pub struct OverlapMerger {
    // @field: Number of trailing paragraphs carried across a page boundary
    overlap_paragraphs: usize,

    // @field: Segmenter applied to each page before merging
    segmenter: ParagraphSegmenter,
}

impl OverlapMerger {
    /// Create a merger carrying `overlap_paragraphs` paragraphs across pages
    pub fn new(overlap_paragraphs: usize, segmenter: ParagraphSegmenter) -> Self {
        OverlapMerger {
            overlap_paragraphs,
            segmenter,
        }
    }

    /// Merge per-page texts into a single string with context markers.
    ///
    /// Pages that segment to zero paragraphs contribute nothing and leave the
    /// carry-buffer untouched: context continues from the last page that had
    /// content. An overlap of zero disables markers entirely. Deterministic,
    /// no external state.
    pub fn merge(&self, pages: &[String]) -> String {
        let mut merged = String::new();
        let mut carry: Vec<String> = Vec::new();

        for page_text in pages {
            let paragraphs = self.segmenter.segment(page_text);
            if paragraphs.is_empty() {
                continue;
            }

            if !carry.is_empty() {
                merged.push_str(CONTEXT_MARKER_OPEN);
                merged.push_str(&carry.join("\n\n"));
                merged.push_str(CONTEXT_MARKER_CLOSE);
                merged.push_str("\n\n");
            }

            merged.push_str(&paragraphs.join("\n\n"));
            merged.push_str("\n\n");

            // Keep the last `overlap_paragraphs` paragraphs for the next page
            let keep = self.overlap_paragraphs.min(paragraphs.len());
            carry = paragraphs[paragraphs.len() - keep..].to_vec();
        }

        debug!("Merged {} pages into {} characters", pages.len(), merged.len());
        merged
    }
}
