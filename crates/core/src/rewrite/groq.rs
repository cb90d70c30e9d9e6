//! Groq chat-completions rewriter.
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint; Groq is the
//! default. Each chunk is sent as a single user message wrapped in the
//! cleaning prompt. Failed calls are not retried here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Rewriter;
use super::prompt::render_prompt;
use crate::config::GroqConfig;
use crate::{Result, ServiceError};

/// Longest response body kept in a [`ServiceError::Status`] message.
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Rewriter backed by a Groq (OpenAI-compatible) chat model.
#[derive(Debug, Clone)]
pub struct GroqRewriter {
    client: Client,
    config: GroqConfig,
    endpoint: String,
}

impl GroqRewriter {
    /// Creates a rewriter with its own HTTP client.
    pub fn new(config: GroqConfig) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout)).build()?;
        let endpoint = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        Ok(Self { client, config, endpoint })
    }

    /// Creates a rewriter from `GROQ_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(GroqConfig::from_env()?)
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn request_body(&self, text: &str) -> ChatRequest<'_> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage { role: "user", content: render_prompt(text) }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            top_p: self.config.top_p,
            stream: false,
        }
    }

    fn map_send_error(&self, err: reqwest::Error) -> ServiceError {
        if err.is_timeout() {
            ServiceError::Timeout { timeout: self.config.timeout }
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl Rewriter for GroqRewriter {
    async fn rewrite(&self, text: &str) -> std::result::Result<String, ServiceError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(text))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok());
            return Err(ServiceError::RateLimited { retry_after });
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            return Err(ServiceError::Status { status: status.as_u16(), message: truncate(&body) });
        }

        let content = parse_completion(&body)?;
        debug!(model = %self.config.model, chars = content.len(), "received completion");
        Ok(content)
    }

    fn name(&self) -> &str {
        "groq"
    }
}

/// Extract the trimmed content of the first choice.
fn parse_completion(body: &str) -> std::result::Result<String, ServiceError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::MalformedResponse("response contained no choices".to_string()))?
        .message
        .content
        .unwrap_or_default();

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::MalformedResponse("response content was empty".to_string()));
    }

    Ok(trimmed.to_string())
}

fn truncate(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
