//! Bounded concurrent dispatch of chunks to a [`Rewriter`].
//!
//! Every chunk gets exactly one rewrite attempt. A failed attempt yields a
//! result carrying the original chunk text, so one bad chunk never affects
//! its siblings. Results always come back ordered by chunk index.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::chunk::{Chunk, count_words};
use crate::rewrite::{RewriteResult, Rewriter};
use crate::ServiceError;

/// Rewrite all chunks with at most `max_concurrency` calls in flight.
///
/// A single chunk is rewritten inline. Otherwise one task per chunk is
/// spawned and gated by a semaphore of `min(max_concurrency, chunks.len())`
/// permits; a ceiling of zero is treated as one. The function returns only
/// after every task has resolved.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use swiftread_core::{IdentityRewriter, chunk_text, dispatch};
///
/// # #[tokio::main]
/// # async fn main() {
/// let chunks = chunk_text("one two three four", 2).unwrap();
/// let results = dispatch(&chunks, Arc::new(IdentityRewriter), 4).await;
/// assert_eq!(results[1].text, "three four");
/// # }
/// ```
pub async fn dispatch(chunks: &[Chunk], rewriter: Arc<dyn Rewriter>, max_concurrency: usize) -> Vec<RewriteResult> {
    match chunks {
        [] => Vec::new(),
        [chunk] => {
            debug!("Processing single chunk with {}", rewriter.name());
            vec![rewrite_inline(rewriter.as_ref(), chunk).await]
        }
        _ => dispatch_concurrent(chunks, rewriter, max_concurrency).await,
    }
}

async fn dispatch_concurrent(
    chunks: &[Chunk], rewriter: Arc<dyn Rewriter>, max_concurrency: usize,
) -> Vec<RewriteResult> {
    let workers = max_concurrency.clamp(1, chunks.len());
    info!("Processing {} chunks in parallel ({} workers, {})", chunks.len(), workers, rewriter.name());

    let semaphore = Arc::new(Semaphore::new(workers));

    let handles: Vec<_> = chunks
        .iter()
        .map(|chunk| {
            let semaphore = semaphore.clone();
            let rewriter = rewriter.clone();
            let index = chunk.index;
            let text = chunk.text.clone();

            tokio::spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => {
                        let err = ServiceError::Unknown("dispatcher shut down before chunk was sent".to_string());
                        return RewriteResult::original(index, text, err);
                    }
                };
                rewrite_chunk(rewriter.as_ref(), index, text).await
            })
        })
        .collect();

    let mut results: Vec<RewriteResult> = join_all(handles)
        .await
        .into_iter()
        .zip(chunks)
        .map(|(joined, chunk)| match joined {
            Ok(result) => result,
            Err(join_err) => {
                warn!("Rewrite task for chunk {} aborted: {}", chunk.index + 1, join_err);
                let err = ServiceError::Unknown(format!("rewrite task aborted: {}", join_err));
                RewriteResult::original(chunk.index, chunk.text.clone(), err)
            }
        })
        .collect();

    results.sort_by_key(|r| r.index);
    results
}

/// Rewrite on the current task, converting a panic into a failed result.
async fn rewrite_inline(rewriter: &dyn Rewriter, chunk: &Chunk) -> RewriteResult {
    match AssertUnwindSafe(rewrite_chunk(rewriter, chunk.index, chunk.text.clone())).catch_unwind().await {
        Ok(result) => result,
        Err(_) => {
            warn!("Rewrite of chunk {} panicked", chunk.index + 1);
            let err = ServiceError::Unknown("rewrite panicked".to_string());
            RewriteResult::original(chunk.index, chunk.text.clone(), err)
        }
    }
}

async fn rewrite_chunk(rewriter: &dyn Rewriter, index: usize, text: String) -> RewriteResult {
    match rewriter.rewrite(&text).await {
        Ok(rewritten) => {
            info!(
                "Processed chunk {}: {} words -> {} words",
                index + 1,
                count_words(&text),
                count_words(&rewritten)
            );
            RewriteResult::rewritten(index, rewritten)
        }
        Err(err) => {
            warn!("Error processing chunk {}: {}; keeping original text", index + 1, err);
            RewriteResult::original(index, text, err)
        }
    }
}
