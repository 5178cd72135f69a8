/*!
 * Sentence-respecting chunk splitting.
 *
 * Translation requests carry bounded units of text. The splitter tokenizes
 * the merged document into sentences and accumulates them greedily into
 * chunks that stay under the configured size, so no request ever cuts a
 * sentence in half.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use log::info;

// Runs of terminal punctuation end a sentence
static SENTENCE_SPLIT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]+").unwrap()
});

/// Tokenize text into sentences.
///
/// Fragments are trimmed and a period is re-appended to each, so downstream
/// consumers always see terminated sentences regardless of the original
/// punctuation run.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_SPLIT_REGEX
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("{}.", s))
        .collect()
}

/// Splits merged text into bounded, sentence-respecting translation units.
#[derive(Debug, Clone)]
pub struct ChunkSplitter {
    /// Size threshold at which a chunk is closed
    max_chunk_size: usize,
}

impl ChunkSplitter {
    /// Create a splitter with the given chunk size bound
    pub fn new(max_chunk_size: usize) -> Self {
        ChunkSplitter { max_chunk_size }
    }

    /// Split text into ordered chunks of whole sentences.
    ///
    /// A chunk is closed by the size threshold only, never by sentence count.
    /// A single sentence that alone exceeds the bound becomes its own
    /// oversized chunk rather than being truncated or split. No chunk is
    /// empty, and the concatenation of all chunks' sentences reproduces the
    /// sentence sequence of the input.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();

        for sentence in split_sentences(text) {
            if !current.is_empty() && current.len() + sentence.len() >= self.max_chunk_size {
                chunks.push(current);
                current = sentence;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&sentence);
            }
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        info!("Created {} chunks for translation", chunks.len());
        chunks
    }
}
