//! GroqRewriter tests against a local stub of the chat-completions API
#![cfg(feature = "groq")]

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use swiftread_core::*;

const API_KEY: &str = "gsk_test_key";

async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/v1", addr)
}

fn stub(handler: axum::routing::MethodRouter) -> Router {
    Router::new().route("/v1/chat/completions", handler)
}

fn rewriter_for(base_url: &str, timeout: u64) -> GroqRewriter {
    let config = GroqConfig::new(API_KEY).with_base_url(base_url).with_timeout(timeout);
    GroqRewriter::new(config).unwrap()
}

/// Pull the chunk back out of the rendered prompt.
fn chunk_from_prompt(prompt: &str) -> String {
    let start = prompt.find("<content>\n\n").map(|i| i + "<content>\n\n".len()).unwrap_or(0);
    let end = prompt.rfind("\n\n</content>").unwrap_or(prompt.len());
    prompt[start..end].to_string()
}

async fn uppercase_completion(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", API_KEY));
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "bad key"})));
    }

    let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
    let cleaned = chunk_from_prompt(prompt).to_uppercase();
    (
        StatusCode::OK,
        Json(json!({
            "model": body["model"],
            "choices": [{"index": 0, "message": {"role": "assistant", "content": format!("\n{}\n", cleaned)}}]
        })),
    )
}

#[tokio::test]
async fn test_rewrite_success() {
    let base_url = spawn_stub(stub(post(uppercase_completion))).await;
    let rewriter = rewriter_for(&base_url, 5);

    let cleaned = rewriter.rewrite("Visit the museum today").await.unwrap();
    assert_eq!(cleaned, "VISIT THE MUSEUM TODAY");
    assert_eq!(rewriter.name(), "groq");
}

#[tokio::test]
async fn test_wrong_key_maps_to_status() {
    let base_url = spawn_stub(stub(post(uppercase_completion))).await;
    let config = GroqConfig::new("gsk_wrong").with_base_url(&base_url);
    let rewriter = GroqRewriter::new(config).unwrap();

    let err = rewriter.rewrite("text").await.unwrap_err();
    assert!(matches!(err, ServiceError::Status { status: 401, .. }));
}

#[tokio::test]
async fn test_rate_limit_maps_retry_after() {
    let handler = post(|| async { (StatusCode::TOO_MANY_REQUESTS, [(header::RETRY_AFTER, "7")], "slow down") });
    let base_url = spawn_stub(stub(handler)).await;

    let err = rewriter_for(&base_url, 5).rewrite("text").await.unwrap_err();
    assert_eq!(err, ServiceError::RateLimited { retry_after: Some(7) });
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let handler = post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "model overloaded") });
    let base_url = spawn_stub(stub(handler)).await;

    let err = rewriter_for(&base_url, 5).rewrite("text").await.unwrap_err();
    assert_eq!(err, ServiceError::Status { status: 503, message: "model overloaded".to_string() });
}

#[tokio::test]
async fn test_malformed_body_maps_to_malformed_response() {
    let handler = post(|| async { (StatusCode::OK, "<html>gateway</html>") });
    let base_url = spawn_stub(stub(handler)).await;

    let err = rewriter_for(&base_url, 5).rewrite("text").await.unwrap_err();
    assert!(matches!(err, ServiceError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_slow_service_maps_to_timeout() {
    let handler = post(|| async {
        tokio::time::sleep(Duration::from_secs(3)).await;
        Json(json!({"choices": [{"message": {"content": "late"}}]}))
    });
    let base_url = spawn_stub(stub(handler)).await;

    let err = rewriter_for(&base_url, 1).rewrite("text").await.unwrap_err();
    assert_eq!(err, ServiceError::Timeout { timeout: 1 });
}

#[tokio::test]
async fn test_unreachable_service_maps_to_transport() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = rewriter_for(&format!("http://{}/v1", addr), 2).rewrite("text").await.unwrap_err();
    assert!(matches!(err, ServiceError::Transport(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_processor_with_groq_rewriter() {
    let base_url = spawn_stub(stub(post(uppercase_completion))).await;
    let config = ProcessorConfig::builder().max_words(3).max_concurrency(2).build();
    let processor = ContentProcessor::with_config(config, Arc::new(rewriter_for(&base_url, 5)));

    let cleaned = processor.process("one two three four five six seven").await;

    assert!(cleaned.succeeded);
    assert_eq!(cleaned.chunks_processed, 3);
    assert_eq!(cleaned.chunks_failed, 0);
    assert_eq!(cleaned.text, "ONE TWO THREE\n\nFOUR FIVE SIX\n\nSEVEN");
}

#[tokio::test]
async fn test_processor_survives_failing_groq() {
    let handler = post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") });
    let base_url = spawn_stub(stub(handler)).await;
    let processor = ContentProcessor::new(Arc::new(rewriter_for(&base_url, 5)));

    let cleaned = processor.process("keep this text").await;

    assert!(cleaned.succeeded);
    assert_eq!(cleaned.text, "keep this text");
    assert_eq!(cleaned.chunks_failed, 1);
}
