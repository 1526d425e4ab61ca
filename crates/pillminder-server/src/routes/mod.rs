//! HTTP route table.

pub(crate) mod completion;
pub(crate) mod demo;
pub(crate) mod medicine;
pub(crate) mod reminders;

use axum::Json;
use axum::response::Html;
use serde_json::{Value, json};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub(crate) async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
