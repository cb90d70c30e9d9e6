//! Word-bounded chunking of extracted text.
//!
//! Long pages are split into slices of at most `max_words` whitespace
//! delimited words so each slice fits into a single rewrite request.

use serde::Serialize;

use crate::ChunkingError;

/// An ordered slice of a larger text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Position of this chunk within its document, starting at 0.
    pub index: usize,
    /// Chunk text.
    pub text: String,
    /// Number of whitespace-delimited words in `text`.
    pub word_count: usize,
}

impl Chunk {
    pub fn new(index: usize, text: String) -> Self {
        let word_count = count_words(&text);
        Self { index, text, word_count }
    }
}

/// Count whitespace-delimited words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split text into chunks of at most `max_words` words.
///
/// Text that already fits is returned untouched as a single chunk, including
/// empty text. Longer text is cut into `ceil(words / max_words)` contiguous
/// slices whose words are re-joined with single spaces; only the last slice
/// may be shorter than `max_words`.
///
/// # Example
///
/// ```rust
/// use swiftread_core::chunk_text;
///
/// let chunks = chunk_text("one two three four five", 2).unwrap();
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[2].text, "five");
/// ```
pub fn chunk_text(text: &str, max_words: usize) -> Result<Vec<Chunk>, ChunkingError> {
    if max_words == 0 {
        return Err(ChunkingError::InvalidChunkSize(max_words));
    }

    let words: Vec<&str> = text.split_whitespace().collect();

    if words.len() <= max_words {
        return Ok(vec![Chunk { index: 0, text: text.to_string(), word_count: words.len() }]);
    }

    let chunks = words
        .chunks(max_words)
        .enumerate()
        .map(|(index, slice)| Chunk { index, text: slice.join(" "), word_count: slice.len() })
        .collect();

    Ok(chunks)
}
