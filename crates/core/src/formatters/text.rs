use crate::document::CleanedDocument;

/// Configuration for plain text output
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    /// Wrap lines at specified width (0 = no wrapping)
    pub line_width: usize,

    /// Include a statistics header
    pub include_header: bool,
}

/// Plain text formatter for cleaned documents
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, doc: &CleanedDocument) -> String {
        convert_to_text(doc, &self.config)
    }
}

/// Render a cleaned document as plain text
pub fn convert_to_text(doc: &CleanedDocument, config: &TextConfig) -> String {
    let mut output = String::new();

    if config.include_header {
        output.push_str(&generate_header(doc));
        output.push_str("\n\n");
    }

    let body = if config.line_width > 0 { wrap_text(&doc.text, config.line_width) } else { doc.text.trim().to_string() };
    output.push_str(&body);

    output.trim().to_string()
}

/// Generate a header line from document statistics
fn generate_header(doc: &CleanedDocument) -> String {
    let mut parts = vec![
        format!("Words: {}", doc.word_count),
        format!("Reading time: {:.1} min", doc.estimated_reading_time()),
    ];

    if doc.succeeded {
        parts.push(format!("Chunks: {}", doc.chunks_processed));
        if doc.chunks_failed > 0 {
            parts.push(format!("Uncleaned chunks: {}", doc.chunks_failed));
        }
    } else {
        parts.push("Cleanup failed, original text shown".to_string());
    }

    let header = parts.join(" | ");
    let rule = "=".repeat(header.chars().count());
    format!("{}\n{}", header, rule)
}

/// Wrap text to specified width, keeping blank-line paragraph breaks
fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    text.split("\n\n")
        .map(|paragraph| paragraph.split_whitespace().collect::<Vec<_>>())
        .filter(|words| !words.is_empty())
        .map(|words| wrap_words(&words, width))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Wrap a slice of words to specified width
fn wrap_words(words: &[&str], width: usize) -> String {
    let mut lines = Vec::new();
    let mut current_line = Vec::new();
    let mut current_length = 0;

    for &word in words {
        let word_len = word.chars().count();

        if current_length == 0 {
            current_line.push(word);
            current_length = word_len;
        } else if current_length + 1 + word_len <= width {
            current_length += 1 + word_len;
            current_line.push(word);
        } else {
            lines.push(current_line.join(" "));
            current_line = vec![word];
            current_length = word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    lines.join("\n")
}
