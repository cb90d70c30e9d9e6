//! Input and output document types.
//!
//! [`Document`] wraps the raw text handed over by the extraction layer.
//! [`CleanedDocument`] is the terminal artifact of the cleaning pipeline and
//! is always produced, whether the rewrite fully succeeded, partially
//! degraded, or fell back to the original text.

use serde::Serialize;

use crate::chunk::{Chunk, chunk_text, count_words};
use crate::ChunkingError;

/// Average reading speed used for reading time estimates.
pub const READING_SPEED_WPM: f64 = 200.0;

/// Raw extracted text awaiting cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    word_count: usize,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let word_count = count_words(&text);
        Self { text, word_count }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Split the document into chunks for rewriting.
    ///
    /// Unlike [`chunk_text`], a document without any words is rejected since
    /// there is nothing a rewrite could improve.
    pub fn chunks(&self, max_words: usize) -> Result<Vec<Chunk>, ChunkingError> {
        if self.word_count == 0 {
            return Err(ChunkingError::EmptyInput);
        }
        chunk_text(&self.text, max_words)
    }
}

/// The result of cleaning a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanedDocument {
    /// Cleaned text, or the original text on total fallback.
    pub text: String,

    /// Word count of `text` as returned.
    pub word_count: usize,

    /// Number of chunks dispatched, including those that failed.
    pub chunks_processed: usize,

    /// Number of chunks whose rewrite failed and kept their original text.
    pub chunks_failed: usize,

    /// Whether a usable document was assembled.
    ///
    /// Per-chunk failures do not clear this flag; only a pipeline-level
    /// failure does.
    pub succeeded: bool,

    /// Description of the pipeline-level failure, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CleanedDocument {
    /// Build a document that returns the original input unchanged.
    pub fn fallback(original: &str, error: impl ToString) -> Self {
        Self {
            text: original.to_string(),
            word_count: count_words(original),
            chunks_processed: 0,
            chunks_failed: 0,
            succeeded: false,
            error: Some(error.to_string()),
        }
    }

    /// True when at least one chunk kept its original text.
    pub fn is_degraded(&self) -> bool {
        !self.succeeded || self.chunks_failed > 0
    }

    /// Estimated reading time in minutes, rounded to one decimal.
    pub fn estimated_reading_time(&self) -> f64 {
        (self.word_count as f64 / READING_SPEED_WPM * 10.0).round() / 10.0
    }
}
