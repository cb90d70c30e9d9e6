pub mod assemble;
pub mod chunk;
pub mod config;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod processor;
pub mod rewrite;

pub use assemble::{CHUNK_SEPARATOR, assemble};
pub use chunk::{Chunk, chunk_text, count_words};
pub use config::{DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_WORDS, GroqConfig, ProcessorConfig, ProcessorConfigBuilder};
pub use dispatch::dispatch;
pub use document::{CleanedDocument, Document, READING_SPEED_WPM};
pub use error::{ChunkingError, Result, ServiceError, SwiftreadError};
pub use fetch::{fetch_file, fetch_stdin};
pub use formatters::{JsonConfig, JsonFormatter, TextConfig, TextFormatter, convert_to_json, convert_to_text};
pub use processor::ContentProcessor;
#[cfg(feature = "groq")]
pub use rewrite::GroqRewriter;
pub use rewrite::{IdentityRewriter, RewriteResult, Rewriter};
