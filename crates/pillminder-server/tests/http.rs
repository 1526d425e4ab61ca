//! Router tests driven through `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use axum::extract::connect_info::MockConnectInfo;
use axum::http::{Request, StatusCode, header};
use pillminder_ai::{CompletionProvider, CompletionProxy, NO_RESPONSE_FALLBACK};
use pillminder_server::{AppState, CHATBOT_GREETING, REQUEST_ID_HEADER, router};
use pillminder_store::{
    MedicineCatalog, ReminderStore, SqliteReminderStore, UNKNOWN_MEDICINE,
};
use pillminder_test_utils::{
    FailingCompletion, FailingReminderStore, FixedCompletion, RecordingCompletion,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceExt;

const CALLER: ([u8; 4], u16) = ([203, 0, 113, 7], 40_000);

fn app_with(store: Arc<dyn ReminderStore>, provider: Arc<dyn CompletionProvider>) -> Router {
    let state = AppState::new(
        store,
        CompletionProxy::new(provider, 5),
        MedicineCatalog::builtin(),
    );
    router(state).layer(MockConnectInfo(SocketAddr::from(CALLER)))
}

fn app() -> Router {
    app_with(
        Arc::new(SqliteReminderStore::open_in_memory().expect("store")),
        Arc::new(FixedCompletion::new("Take it with water.")),
    )
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

/// Add, list, mark taken, list again.
#[tokio::test]
async fn reminder_lifecycle() {
    let app = app();

    let (status, body) = call(
        &app,
        post_json(
            "/add_reminder",
            json!({ "name": "Jane", "medication": "Metformin", "time": "08:00" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "success", "message": "Reminder added!", "id": 1 })
    );

    let (status, body) = call(&app, get("/get_reminders")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": 1, "name": "Jane", "medication": "Metformin", "time": "08:00", "is_taken": false }])
    );

    let (status, body) = call(
        &app,
        post_json("/update_status", json!({ "id": 1, "is_taken": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success" }));

    let (_, body) = call(&app, get("/get_reminders")).await;
    assert_eq!(body[0]["is_taken"], json!(true));

    let (status, _) = call(
        &app,
        post_json("/update_status", json!({ "id": 1, "is_taken": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = call(&app, get("/get_reminders")).await;
    assert_eq!(body[0]["is_taken"], json!(false));
}

/// A missing field is a 400 and nothing is written.
#[tokio::test]
async fn add_reminder_requires_every_field() {
    let app = app();
    let (status, body) = call(
        &app,
        post_json("/add_reminder", json!({ "name": "Jane", "time": "08:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "missing field: medication");

    let (_, body) = call(&app, get("/get_reminders")).await;
    assert_eq!(body, json!([]));
}

/// Bodies that are not JSON objects are rejected.
#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let app = app();
    for uri in ["/add_reminder", "/update_status", "/medicine_search", "/chatbot", "/send_sms"] {
        let (status, body) = call(&app, post_raw(uri, "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["status"], "error", "{uri}");
    }
}

/// Unknown ids are reported as 404 and leave existing rows alone.
#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let app = app();
    call(
        &app,
        post_json(
            "/add_reminder",
            json!({ "name": "Jane", "medication": "Metformin", "time": "08:00" }),
        ),
    )
    .await;

    let (status, body) = call(
        &app,
        post_json("/update_status", json!({ "id": 42, "is_taken": true })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");

    let (_, body) = call(&app, get("/get_reminders")).await;
    assert_eq!(body[0]["is_taken"], json!(false));
}

/// `is_taken` must be a bool or 0/1, and both fields are required.
#[tokio::test]
async fn update_status_validates_payload() {
    let app = app();
    let cases = [
        json!({ "id": 1, "is_taken": 2 }),
        json!({ "id": 1, "is_taken": "yes" }),
        json!({ "is_taken": true }),
        json!({ "id": 1 }),
    ];
    for payload in cases {
        let (status, _) = call(&app, post_json("/update_status", payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
    }
}

/// Store failures: writes are 500, reads degrade to an empty list.
#[tokio::test]
async fn store_failures_map_to_status_codes() {
    let app = app_with(
        Arc::new(FailingReminderStore),
        Arc::new(FixedCompletion::new("unused")),
    );

    let (status, body) = call(
        &app,
        post_json(
            "/add_reminder",
            json!({ "name": "Jane", "medication": "Metformin", "time": "08:00" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "status": "error", "message": "Database error." }));

    let (status, body) = call(&app, get("/get_reminders")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, _) = call(
        &app,
        post_json("/update_status", json!({ "id": 1, "is_taken": true })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

/// The sixth prompt from one address gets the limit message without an outbound call.
#[tokio::test]
async fn ai_enforces_per_caller_limit() {
    let (provider, prompts) = RecordingCompletion::new("Take it with water.");
    let app = app_with(
        Arc::new(SqliteReminderStore::open_in_memory().expect("store")),
        Arc::new(provider),
    );

    for _ in 0..5 {
        let (status, body) = call(&app, get("/ai?prompt=what%20is%20metformin")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "response": "Take it with water." }));
    }
    let (status, body) = call(&app, get("/ai?prompt=one%20more")).await;
    assert_eq!(status, StatusCode::OK);
    let text = body["response"].as_str().expect("response text");
    assert!(text.contains("limit of 5"), "{text}");
    assert_eq!(prompts.lock().len(), 5);
    assert_eq!(prompts.lock()[0], "what is metformin");
}

/// Upstream failures are a 502 carrying the reason.
#[tokio::test]
async fn ai_failure_is_bad_gateway() {
    let app = app_with(
        Arc::new(SqliteReminderStore::open_in_memory().expect("store")),
        Arc::new(FailingCompletion::new("connection refused")),
    );
    let (status, body) = call(&app, get("/ai?prompt=hi")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let text = body["response"].as_str().expect("response text");
    assert!(text.starts_with("AI request failed:"), "{text}");
}

/// Empty completions become the fallback text.
#[tokio::test]
async fn ai_empty_answer_uses_fallback() {
    let app = app_with(
        Arc::new(SqliteReminderStore::open_in_memory().expect("store")),
        Arc::new(FixedCompletion::empty()),
    );
    let (status, body) = call(&app, get("/ai?prompt=hi")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "response": NO_RESPONSE_FALLBACK }));
}

/// A blank or missing prompt is rejected before any quota is used.
#[tokio::test]
async fn ai_requires_prompt() {
    let app = app();
    for uri in ["/ai", "/ai?prompt=", "/ai?prompt=%20%20"] {
        let (status, body) = call(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["status"], "error");
    }
}

/// Exact-name search with the stock fallback.
#[tokio::test]
async fn medicine_search_uses_exact_names() {
    let app = app();
    let (status, body) = call(
        &app,
        post_json("/medicine_search", json!({ "medicine": "Metformin" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "info": "Oral medicine for type 2 diabetes." }));

    let (_, body) = call(
        &app,
        post_json("/medicine_search", json!({ "medicine": "metformin 500mg" })),
    )
    .await;
    assert_eq!(body, json!({ "info": UNKNOWN_MEDICINE }));

    let (_, body) = call(&app, post_json("/medicine_search", json!({}))).await;
    assert_eq!(body, json!({ "info": UNKNOWN_MEDICINE }));
}

/// Lookup falls back to partial matches and rejects a blank query.
#[tokio::test]
async fn medicine_lookup_matches_partially() {
    let app = app();
    let (status, body) = call(&app, get("/medicine_lookup?q=metformin%20500mg")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answer": "Oral medicine for type 2 diabetes." }));

    let (_, body) = call(&app, get("/medicine_lookup?q=unobtainium")).await;
    assert_eq!(body, json!({ "answer": UNKNOWN_MEDICINE }));

    let (status, _) = call(&app, get("/medicine_lookup?q=")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Chatbot keywords and the SMS echo.
#[tokio::test]
async fn demo_endpoints_reply() {
    let app = app();
    let (status, body) = call(&app, post_json("/chatbot", json!({ "message": "Hello!" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "reply": CHATBOT_GREETING }));

    let (status, body) = call(
        &app,
        post_json(
            "/send_sms",
            json!({ "phone": "+15550100", "message": "Take Metformin" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "SMS sent", "phone": "+15550100" }));
}

/// Index page, health check, and the request id header.
#[tokio::test]
async fn index_and_health() {
    let app = app();
    let response = app.clone().oneshot(get("/")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{content_type}");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert!(String::from_utf8_lossy(&bytes).contains("<title>Pillminder</title>"));

    let (status, body) = call(&app, get("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
