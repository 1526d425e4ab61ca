//! Gemini client tests against a local stub server.

use axum::extract::{Path, RawQuery};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use pillminder_ai::{CompletionProvider, CompletionProxy, GeminiProvider, UpstreamError};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

async fn spawn_stub(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    addr
}

fn provider(addr: SocketAddr, api_key: Option<&str>, timeout: Duration) -> GeminiProvider {
    GeminiProvider::new(
        format!("http://{addr}/v1beta/"),
        "gemini-1.5-flash",
        api_key.map(str::to_string),
        timeout,
    )
    .expect("provider")
}

/// The prompt, model and key reach the service and the first part's text comes back.
#[tokio::test]
async fn returns_first_candidate_text() {
    let router = Router::new().route(
        "/v1beta/models/{call}",
        post(
            |Path(call): Path<String>,
             RawQuery(query): RawQuery,
             headers: HeaderMap,
             Json(body): Json<Value>| async move {
                assert_eq!(call, "gemini-1.5-flash:generateContent");
                assert_eq!(query, None);
                assert_eq!(
                    headers
                        .get("x-goog-api-key")
                        .and_then(|value| value.to_str().ok()),
                    Some("test-key")
                );
                let prompt = body["contents"][0]["parts"][0]["text"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string();
                Json(json!({
                    "candidates": [{ "content": { "parts": [{ "text": format!("re: {prompt}") }] } }]
                }))
            },
        ),
    );
    let addr = spawn_stub(router).await;

    let text = provider(addr, Some("test-key"), Duration::from_secs(5))
        .complete("What is metformin?")
        .await
        .expect("complete");
    assert_eq!(text, "re: What is metformin?");
}

/// A reply with no candidates is empty text, not an error.
#[tokio::test]
async fn missing_candidates_yield_empty_text() {
    let router = Router::new().route(
        "/v1beta/models/{call}",
        post(|| async { Json(json!({ "promptFeedback": { "blockReason": "SAFETY" } })) }),
    );
    let addr = spawn_stub(router).await;

    let text = provider(addr, Some("k"), Duration::from_secs(5))
        .complete("anything")
        .await
        .expect("complete");
    assert_eq!(text, "");
}

/// Non-success statuses surface with their code.
#[tokio::test]
async fn error_status_is_reported() {
    let router = Router::new().route(
        "/v1beta/models/{call}",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "quota exhausted") }),
    );
    let addr = spawn_stub(router).await;

    let err = provider(addr, Some("k"), Duration::from_secs(5))
        .complete("anything")
        .await
        .expect_err("status error");
    match err {
        UpstreamError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "quota exhausted");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// A service slower than the timeout fails with `Timeout`.
#[tokio::test]
async fn slow_service_times_out() {
    let router = Router::new().route(
        "/v1beta/models/{call}",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    );
    let addr = spawn_stub(router).await;

    let err = provider(addr, Some("k"), Duration::from_millis(200))
        .complete("anything")
        .await
        .expect_err("timeout");
    assert!(matches!(err, UpstreamError::Timeout), "got {err:?}");
}

/// Without an API key nothing is sent.
#[tokio::test]
async fn missing_key_is_not_configured() {
    let provider = GeminiProvider::new(
        "http://127.0.0.1:9",
        "gemini-1.5-flash",
        None,
        Duration::from_secs(1),
    )
    .expect("provider");
    let err = provider.complete("anything").await.expect_err("no key");
    assert!(matches!(err, UpstreamError::NotConfigured));
}

/// A failed connection reports the reason without leaking the API key.
#[tokio::test]
async fn transport_failure_does_not_leak_key() {
    let closed = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        listener.local_addr().expect("addr")
    };
    let provider = provider(closed, Some("SENTINEL_API_KEY"), Duration::from_secs(2));

    let err = provider.complete("hi").await.expect_err("closed port");
    assert!(matches!(err, UpstreamError::Transport(_)), "got {err:?}");
    assert!(!err.to_string().contains("SENTINEL_API_KEY"), "{err}");

    let proxy = CompletionProxy::new(Arc::new(provider), 5);
    let reply = proxy.complete("198.51.100.4", "hi").await;
    assert!(reply.is_failure());
    assert!(reply.text().starts_with("AI request failed:"));
    assert!(!reply.text().contains("SENTINEL_API_KEY"), "{}", reply.text());
}
