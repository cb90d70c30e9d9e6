//! Pipeline and rewrite service configuration.
//!
//! Both configs can be built in code or read from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `SWIFTREAD_MAX_WORDS` | 4000 |
//! | `SWIFTREAD_MAX_CONCURRENCY` | 50 |
//! | `GROQ_API_KEY` | required |
//! | `GROQ_MODEL` | `meta-llama/llama-4-scout-17b-16e-instruct` |
//! | `GROQ_BASE_URL` | `https://api.groq.com/openai/v1` |
//! | `GROQ_TIMEOUT` | 60 (seconds) |

use std::str::FromStr;

use crate::{Result, SwiftreadError};

/// Default number of words per chunk.
pub const DEFAULT_MAX_WORDS: usize = 4000;

/// Default ceiling of concurrent rewrite calls.
pub const DEFAULT_MAX_CONCURRENCY: usize = 50;

pub const DEFAULT_GROQ_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Configuration for the cleaning pipeline.
///
/// # Example
///
/// ```rust
/// use swiftread_core::ProcessorConfig;
///
/// let config = ProcessorConfig::builder()
///     .max_words(2000)
///     .max_concurrency(8)
///     .build();
/// assert_eq!(config.max_words, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Maximum words per chunk (default: 4000).
    pub max_words: usize,

    /// Maximum number of rewrite calls in flight at once (default: 50).
    pub max_concurrency: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self { max_words: DEFAULT_MAX_WORDS, max_concurrency: DEFAULT_MAX_CONCURRENCY }
    }
}

impl ProcessorConfig {
    /// Creates a new builder for ProcessorConfig.
    pub fn builder() -> ProcessorConfigBuilder {
        ProcessorConfigBuilder::new()
    }

    /// Reads `SWIFTREAD_MAX_WORDS` and `SWIFTREAD_MAX_CONCURRENCY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            max_words: parse_var(&lookup, "SWIFTREAD_MAX_WORDS")?.unwrap_or(defaults.max_words),
            max_concurrency: parse_var(&lookup, "SWIFTREAD_MAX_CONCURRENCY")?.unwrap_or(defaults.max_concurrency),
        })
    }
}

/// Builder for ProcessorConfig.
pub struct ProcessorConfigBuilder {
    config: ProcessorConfig,
}

impl ProcessorConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ProcessorConfig::default() }
    }

    /// Sets the maximum words per chunk.
    pub fn max_words(mut self, value: usize) -> Self {
        self.config.max_words = value;
        self
    }

    /// Sets the concurrency ceiling.
    pub fn max_concurrency(mut self, value: usize) -> Self {
        self.config.max_concurrency = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> ProcessorConfig {
        self.config
    }
}

impl Default for ProcessorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings for the Groq chat-completions rewriter.
#[derive(Clone, PartialEq)]
pub struct GroqConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Chat model identifier.
    pub model: String,
    /// Base URL of the OpenAI-compatible API, without trailing slash.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout: u64,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

impl GroqConfig {
    /// Creates a config with default model and endpoint for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GROQ_MODEL.to_string(),
            base_url: DEFAULT_GROQ_BASE_URL.to_string(),
            timeout: 60,
            temperature: 0.0,
            max_tokens: 8000,
            top_p: 1.0,
        }
    }

    /// Reads `GROQ_API_KEY` and the optional `GROQ_*` overrides.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("GROQ_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| SwiftreadError::ConfigError("GROQ_API_KEY not found in environment variables".to_string()))?;

        let mut config = Self::new(api_key.trim());

        if let Some(model) = lookup("GROQ_MODEL").filter(|m| !m.trim().is_empty()) {
            config.model = model.trim().to_string();
        }
        if let Some(base_url) = lookup("GROQ_BASE_URL").filter(|u| !u.trim().is_empty()) {
            config.base_url = base_url.trim().trim_end_matches('/').to_string();
        }
        if let Some(timeout) = parse_var(&lookup, "GROQ_TIMEOUT")? {
            config.timeout = timeout;
        }

        Ok(config)
    }

    /// Sets the chat model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("top_p", &self.top_p)
            .finish()
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>> {
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SwiftreadError::ConfigError(format!("{} has an invalid value: {}", key, raw))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_processor_config_default() {
        let config = ProcessorConfig::default();
        assert_eq!(config.max_words, 4000);
        assert_eq!(config.max_concurrency, 50);
    }

    #[test]
    fn test_processor_config_builder() {
        let config = ProcessorConfig::builder().max_words(10).max_concurrency(2).build();
        assert_eq!(config, ProcessorConfig { max_words: 10, max_concurrency: 2 });
    }

    #[test]
    fn test_processor_config_from_lookup() {
        let config = ProcessorConfig::from_lookup(vars(&[("SWIFTREAD_MAX_WORDS", " 1500 ")])).unwrap();
        assert_eq!(config.max_words, 1500);
        assert_eq!(config.max_concurrency, DEFAULT_MAX_CONCURRENCY);
    }

    #[test]
    fn test_processor_config_invalid_value() {
        let result = ProcessorConfig::from_lookup(vars(&[("SWIFTREAD_MAX_CONCURRENCY", "many")]));
        match result {
            Err(SwiftreadError::ConfigError(msg)) => assert!(msg.contains("SWIFTREAD_MAX_CONCURRENCY")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_groq_config_requires_api_key() {
        let result = GroqConfig::from_lookup(vars(&[]));
        assert!(matches!(result, Err(SwiftreadError::ConfigError(msg)) if msg.contains("GROQ_API_KEY")));

        let blank = GroqConfig::from_lookup(vars(&[("GROQ_API_KEY", "   ")]));
        assert!(blank.is_err());
    }

    #[test]
    fn test_groq_config_defaults() {
        let config = GroqConfig::from_lookup(vars(&[("GROQ_API_KEY", "gsk_test")])).unwrap();
        assert_eq!(config.api_key, "gsk_test");
        assert_eq!(config.model, DEFAULT_GROQ_MODEL);
        assert_eq!(config.base_url, DEFAULT_GROQ_BASE_URL);
        assert_eq!(config.timeout, 60);
        assert_eq!(config.max_tokens, 8000);
    }

    #[test]
    fn test_groq_config_overrides() {
        let config = GroqConfig::from_lookup(vars(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("GROQ_MODEL", "llama-3.1-8b-instant"),
            ("GROQ_BASE_URL", "http://localhost:9000/v1/"),
            ("GROQ_TIMEOUT", "5"),
        ]))
        .unwrap();

        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.timeout, 5);
    }

    #[test]
    fn test_groq_config_debug_redacts_key() {
        let rendered = format!("{:?}", GroqConfig::new("gsk_secret"));
        assert!(!rendered.contains("gsk_secret"));
        assert!(rendered.contains("redacted"));
    }
}
