//! The content cleaning pipeline.
//!
//! [`ContentProcessor::process`] runs chunking, dispatch, and assembly in
//! sequence and always returns a [`CleanedDocument`]:
//!
//! - every chunk rewritten: cleaned text, `succeeded = true`
//! - some chunks failed: those chunks keep their original text, `succeeded = true`
//! - pipeline failure: the original input unchanged, `succeeded = false`
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use swiftread_core::{ContentProcessor, IdentityRewriter};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let processor = ContentProcessor::new(Arc::new(IdentityRewriter));
//! let cleaned = processor.process("Some extracted article text").await;
//! assert!(cleaned.succeeded);
//! assert_eq!(cleaned.word_count, 4);
//! # }
//! ```

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::assemble::assemble;
use crate::chunk::{Chunk, count_words};
use crate::config::ProcessorConfig;
use crate::dispatch::dispatch;
use crate::document::{CleanedDocument, Document};
use crate::rewrite::Rewriter;
use crate::{ChunkingError, Result, SwiftreadError};

/// Cleans extracted text through a [`Rewriter`].
#[derive(Clone)]
pub struct ContentProcessor {
    config: ProcessorConfig,
    rewriter: Arc<dyn Rewriter>,
}

impl ContentProcessor {
    /// Creates a processor with default settings.
    pub fn new(rewriter: Arc<dyn Rewriter>) -> Self {
        Self { config: ProcessorConfig::default(), rewriter }
    }

    /// Creates a processor with a custom configuration.
    pub fn with_config(config: ProcessorConfig, rewriter: Arc<dyn Rewriter>) -> Self {
        Self { config, rewriter }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn rewriter(&self) -> &dyn Rewriter {
        self.rewriter.as_ref()
    }

    /// Clean `raw_text` for reading.
    ///
    /// Never fails: any pipeline error results in the original text being
    /// returned with `succeeded = false` and `chunks_processed = 0`.
    pub async fn process(&self, raw_text: &str) -> CleanedDocument {
        match self.try_process(raw_text).await {
            Ok(cleaned) => {
                info!(
                    "Successfully cleaned content: {} words from {} original words",
                    cleaned.word_count,
                    count_words(raw_text)
                );
                cleaned
            }
            Err(err) => {
                error!("Error cleaning content: {}; returning original text", err);
                CleanedDocument::fallback(raw_text, err)
            }
        }
    }

    async fn try_process(&self, raw_text: &str) -> Result<CleanedDocument> {
        let document = Document::new(raw_text);
        let chunks = self.chunk(&document)?;

        if chunks.len() > 1 {
            info!("Split {} words into {} chunks", document.word_count(), chunks.len());
        }

        let results = dispatch(&chunks, self.rewriter.clone(), self.config.max_concurrency).await;

        if results.len() != chunks.len() {
            return Err(SwiftreadError::Pipeline(format!(
                "dispatched {} chunks but received {} results",
                chunks.len(),
                results.len()
            )));
        }

        assemble(results)
    }

    /// Chunk the document, falling back to one whole-input chunk when the
    /// configured size is unusable.
    fn chunk(&self, document: &Document) -> Result<Vec<Chunk>> {
        match document.chunks(self.config.max_words) {
            Ok(chunks) => Ok(chunks),
            Err(ChunkingError::InvalidChunkSize(size)) => {
                warn!("Invalid chunk size {}; processing input as a single chunk", size);
                Ok(vec![Chunk::new(0, document.text().to_string())])
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServiceError;
    use crate::rewrite::IdentityRewriter;
    use async_trait::async_trait;

    struct Shout;

    #[async_trait]
    impl Rewriter for Shout {
        async fn rewrite(&self, text: &str) -> std::result::Result<String, ServiceError> {
            Ok(format!("{}!", text.trim()))
        }

        fn name(&self) -> &str {
            "shout"
        }
    }

    #[tokio::test]
    async fn test_process_single_chunk() {
        let processor = ContentProcessor::new(Arc::new(Shout));
        let cleaned = processor.process("  hello world ").await;

        assert_eq!(cleaned.text, "hello world!");
        assert_eq!(cleaned.chunks_processed, 1);
        assert!(cleaned.succeeded);
    }

    #[tokio::test]
    async fn test_process_empty_input_falls_back() {
        let processor = ContentProcessor::new(Arc::new(IdentityRewriter));
        let cleaned = processor.process("").await;

        assert_eq!(cleaned.text, "");
        assert_eq!(cleaned.word_count, 0);
        assert_eq!(cleaned.chunks_processed, 0);
        assert!(!cleaned.succeeded);
        assert!(cleaned.error.unwrap().contains("no words"));
    }

    #[tokio::test]
    async fn test_process_whitespace_input_falls_back_unchanged() {
        let processor = ContentProcessor::new(Arc::new(Shout));
        let cleaned = processor.process(" \n ").await;

        assert_eq!(cleaned.text, " \n ");
        assert!(!cleaned.succeeded);
    }

    #[tokio::test]
    async fn test_zero_chunk_size_processes_whole_input() {
        let config = ProcessorConfig::builder().max_words(0).build();
        let processor = ContentProcessor::with_config(config, Arc::new(Shout));
        let cleaned = processor.process("a b c").await;

        assert_eq!(cleaned.text, "a b c!");
        assert_eq!(cleaned.chunks_processed, 1);
        assert!(cleaned.succeeded);
    }

    #[tokio::test]
    async fn test_process_multiple_chunks() {
        let config = ProcessorConfig::builder().max_words(2).max_concurrency(2).build();
        let processor = ContentProcessor::with_config(config, Arc::new(Shout));
        let cleaned = processor.process("a b c d e").await;

        assert_eq!(cleaned.text, "a b!\n\nc d!\n\ne!");
        assert_eq!(cleaned.chunks_processed, 3);
        assert_eq!(cleaned.word_count, 5);
    }

    #[test]
    fn test_accessors() {
        let processor = ContentProcessor::new(Arc::new(IdentityRewriter));
        assert_eq!(processor.config(), &ProcessorConfig::default());
        assert_eq!(processor.rewriter().name(), "identity");
    }
}
