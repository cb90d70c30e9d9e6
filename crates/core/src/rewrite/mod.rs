//! The rewrite capability consumed by the cleaning pipeline.
//!
//! A [`Rewriter`] takes one chunk of text and returns a cleaned version of
//! it, or a [`ServiceError`]. The pipeline calls it concurrently from many
//! tasks, so implementations must be `Send + Sync` and should not rely on
//! state shared between calls.

#[cfg(feature = "groq")]
pub mod groq;
pub mod prompt;

use async_trait::async_trait;
use serde::Serialize;

use crate::ServiceError;

#[cfg(feature = "groq")]
pub use groq::GroqRewriter;
pub use prompt::{CLEANING_PROMPT, render_prompt};

/// A service that rewrites a text segment.
#[async_trait]
pub trait Rewriter: Send + Sync {
    /// Rewrite a single chunk of text.
    async fn rewrite(&self, text: &str) -> Result<String, ServiceError>;

    /// Get rewriter name for logging
    fn name(&self) -> &str;
}

/// Rewriter that returns its input unchanged.
///
/// Useful to run the pipeline without a rewrite service, e.g. to normalize
/// chunk layout only.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityRewriter;

#[async_trait]
impl Rewriter for IdentityRewriter {
    async fn rewrite(&self, text: &str) -> Result<String, ServiceError> {
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "identity"
    }
}

/// Outcome of rewriting a single chunk.
///
/// When `succeeded` is false, `text` holds the original chunk text and
/// `error` holds the reason the rewrite failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewriteResult {
    /// Index of the source chunk.
    pub index: usize,
    /// Rewritten text, or the original chunk text on failure.
    pub text: String,
    /// Whether the rewrite service produced `text`.
    pub succeeded: bool,
    /// Failure reported by the rewrite service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ServiceError>,
}

impl RewriteResult {
    pub fn rewritten(index: usize, text: String) -> Self {
        Self { index, text, succeeded: true, error: None }
    }

    /// Result for a chunk whose rewrite failed; carries the original text.
    pub fn original(index: usize, text: String, error: ServiceError) -> Self {
        Self { index, text, succeeded: false, error: Some(error) }
    }
}
