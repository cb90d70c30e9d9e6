//! Merging rewritten chunks into a single document.

use tracing::info;

use crate::chunk::count_words;
use crate::document::CleanedDocument;
use crate::rewrite::RewriteResult;
use crate::{Result, SwiftreadError};

/// Separator placed between rewritten chunks.
pub const CHUNK_SEPARATOR: &str = "\n\n";

/// Join rewrite results into a [`CleanedDocument`].
///
/// Results must cover the indices `0..N` exactly once; they are put in index
/// order before joining. Failed chunks contribute their original text and are
/// counted in `chunks_failed`, but do not clear `succeeded`.
///
/// # Errors
///
/// Returns [`SwiftreadError::Pipeline`] for an empty result set or one with
/// missing or duplicate indices.
pub fn assemble(mut results: Vec<RewriteResult>) -> Result<CleanedDocument> {
    if results.is_empty() {
        return Err(SwiftreadError::Pipeline("no rewrite results to assemble".to_string()));
    }

    results.sort_by_key(|r| r.index);

    if let Some((position, result)) = results.iter().enumerate().find(|(position, r)| r.index != *position) {
        return Err(SwiftreadError::Pipeline(format!(
            "rewrite results are not contiguous: expected chunk {} but found chunk {}",
            position, result.index
        )));
    }

    let chunks_processed = results.len();
    let chunks_failed = results.iter().filter(|r| !r.succeeded).count();

    let text = results
        .into_iter()
        .map(|r| r.text)
        .collect::<Vec<_>>()
        .join(CHUNK_SEPARATOR);
    let word_count = count_words(&text);

    info!(
        "Assembled {} words from {} chunks ({} kept original text)",
        word_count, chunks_processed, chunks_failed
    );

    Ok(CleanedDocument { text, word_count, chunks_processed, chunks_failed, succeeded: true, error: None })
}
