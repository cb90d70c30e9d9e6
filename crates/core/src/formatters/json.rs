use serde::Serialize;

use crate::Result;
use crate::document::CleanedDocument;

/// Complete JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    /// Cleaned text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    pub word_count: usize,
    pub chunks_processed: usize,
    pub chunks_failed: usize,
    pub succeeded: bool,
    /// Estimated reading time in minutes
    pub estimated_reading_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

/// Configuration for JSON output
#[derive(Debug, Clone)]
pub struct JsonConfig {
    /// Include the cleaned text (default: true)
    pub include_text: bool,
    /// Pretty print JSON output
    pub pretty: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self { include_text: true, pretty: false }
    }
}

/// Convert a cleaned document to JSON
pub fn convert_to_json(doc: &CleanedDocument, config: &JsonConfig) -> Result<String> {
    let output = JsonOutput {
        text: if config.include_text { Some(doc.text.as_str()) } else { None },
        word_count: doc.word_count,
        chunks_processed: doc.chunks_processed,
        chunks_failed: doc.chunks_failed,
        succeeded: doc.succeeded,
        estimated_reading_time: doc.estimated_reading_time(),
        error: doc.error.as_deref(),
    };

    if config.pretty { Ok(serde_json::to_string_pretty(&output)?) } else { Ok(serde_json::to_string(&output)?) }
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, doc: &CleanedDocument) -> Result<String> {
        convert_to_json(doc, &self.config)
    }
}
