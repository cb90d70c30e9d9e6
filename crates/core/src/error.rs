//! Error types for Swiftread operations.
//!
//! Three layers of failure exist in the cleaning pipeline:
//!
//! - [`ChunkingError`]: the input could not be split into chunks.
//! - [`ServiceError`]: a single rewrite call failed. These are always
//!   recovered at the chunk level and travel on the chunk's
//!   [`RewriteResult`](crate::RewriteResult) instead of being returned.
//! - [`SwiftreadError::Pipeline`]: an internal invariant was violated.
//!
//! [`ContentProcessor::process`](crate::ContentProcessor::process) never
//! returns any of these; they resolve into a
//! [`CleanedDocument`](crate::CleanedDocument) instead.
//!
//! # Example
//!
//! ```rust
//! use swiftread_core::{ChunkingError, Result, chunk_text};
//!
//! fn first_chunk(text: &str) -> Result<String> {
//!     let chunks = chunk_text(text, 4000)?;
//!     chunks
//!         .into_iter()
//!         .next()
//!         .map(|c| c.text)
//!         .ok_or_else(|| ChunkingError::EmptyInput.into())
//! }
//! # assert_eq!(first_chunk("hello world").unwrap(), "hello world");
//! ```

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Failure of a single call to the rewrite service.
///
/// Values are cheap to clone so the dispatcher can attach them to the
/// result of the chunk that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ServiceError {
    /// The call did not complete within the client's timeout.
    #[error("Rewrite request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The service rejected the call because of rate limiting.
    #[error("Rewrite service rate limited the request{}", retry_hint(*.retry_after))]
    RateLimited { retry_after: Option<u64> },

    /// The service answered, but not with usable content.
    #[error("Malformed rewrite response: {0}")]
    MalformedResponse(String),

    /// The service answered with a non-success HTTP status.
    #[error("Rewrite service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Connection, DNS, or TLS level failure.
    #[error("Rewrite transport error: {0}")]
    Transport(String),

    /// Anything else, including a rewrite task that panicked.
    #[error("Rewrite failed: {0}")]
    Unknown(String),
}

fn retry_hint(retry_after: Option<u64>) -> String {
    match retry_after {
        Some(secs) => format!(" (retry after {} seconds)", secs),
        None => String::new(),
    }
}

/// Failure to split input text into chunks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkingError {
    /// The input contains no words, so there is nothing to rewrite.
    #[error("Input contains no words to process")]
    EmptyInput,

    /// A chunk size of zero words was requested.
    #[error("Invalid chunk size: {0} (must be greater than zero)")]
    InvalidChunkSize(usize),
}

/// Main error type for Swiftread operations.
#[derive(Error, Debug)]
pub enum SwiftreadError {
    /// Input could not be chunked.
    #[error("Chunking failed: {0}")]
    Chunking(#[from] ChunkingError),

    /// A rewrite call failed.
    ///
    /// Only surfaced by direct calls to a [`Rewriter`](crate::Rewriter);
    /// the pipeline recovers these per chunk.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// An internal invariant of the pipeline was violated.
    #[error("Pipeline error: {0}")]
    Pipeline(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Input file not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File or stream I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP client construction errors from reqwest.
    #[cfg(feature = "groq")]
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Result type alias for SwiftreadError.
pub type Result<T> = std::result::Result<T, SwiftreadError>;
