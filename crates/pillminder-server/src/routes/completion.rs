//! Quota-limited `/ai` completion endpoint.

use crate::error::AppError;
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{ConnectInfo, Query, State};
use axum::http::StatusCode;
use log::debug;
use pillminder_ai::CompletionReply;
use serde::Deserialize;
use serde_json::{Value, json};
use std::net::SocketAddr;

#[derive(Debug, Deserialize)]
pub(crate) struct AiQuery {
    prompt: Option<String>,
}

/// Proxy one prompt, keyed by the caller's IP address.
pub(crate) async fn ai(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    query: Result<Query<AiQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Query(query) = query?;
    let prompt = query
        .prompt
        .filter(|prompt| !prompt.trim().is_empty())
        .ok_or_else(|| AppError::Validation("missing query parameter: prompt".to_string()))?;

    let caller_key = peer.ip().to_string();
    debug!(
        "completion requested (caller={caller_key}, prompt_len={})",
        prompt.len()
    );
    let reply = state.completion().complete(&caller_key, &prompt).await;
    let status = match reply {
        CompletionReply::Failed(_) => StatusCode::BAD_GATEWAY,
        CompletionReply::Answered(_) | CompletionReply::LimitReached(_) => StatusCode::OK,
    };
    Ok((status, Json(json!({ "response": reply.text() }))))
}
